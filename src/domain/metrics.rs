// Analytics domain models - externally supplied KPIs and derived display figures
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiEntry {
    #[serde(default)]
    pub label: String,
    pub value: String,
}

impl KpiEntry {
    #[cfg(test)]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Statistics handed to the console by the analytics source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsObject {
    #[serde(default)]
    pub kpi: Vec<KpiEntry>,
}

impl StatsObject {
    #[cfg(test)]
    pub fn new(kpi: Vec<KpiEntry>) -> Self {
        Self { kpi }
    }

    /// Find a KPI by label, ignoring case, spaces and punctuation,
    /// so "Total Users" and "totalUsers" name the same entry.
    pub fn by_name(&self, name: &str) -> Option<&KpiEntry> {
        let wanted = normalize_label(name);
        self.kpi
            .iter()
            .find(|entry| normalize_label(&entry.label) == wanted)
    }

    pub fn at(&self, index: usize) -> Option<&KpiEntry> {
        self.kpi.get(index)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub visitor_count: String,
    pub active_now_count: u32,
}
