// Seed loader - the data source handing banners, content and stats to the console
use crate::application::console::ConsoleSeed;
use anyhow::Context;
use std::path::Path;

pub fn load_seed(path: impl AsRef<Path>) -> anyhow::Result<ConsoleSeed> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read console seed {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("Failed to parse console seed {}", path.display()))
}

pub fn parse_seed(raw: &str) -> anyhow::Result<ConsoleSeed> {
    let seed: ConsoleSeed = toml::from_str(raw)?;
    tracing::debug!(
        "Parsed seed: {} banners, stats {}",
        seed.banners.len(),
        if seed.stats.is_some() { "present" } else { "absent" }
    );
    Ok(seed)
}
