use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub metrics: MetricsSettings,
    #[serde(default)]
    pub editor: EditorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Where "Visit Site" sends the user.
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentSettings {
    #[serde(default = "default_seed_path")]
    pub seed_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    #[serde(default)]
    pub require_login: bool,
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricsSettings {
    /// Fixes the "active now" sequence, mostly for demos and tests.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorSettings {
    #[serde(default)]
    pub enabled: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_site_url() -> String {
    "/".to_string()
}

fn default_seed_path() -> String {
    "config/seed.toml".to_string()
}

fn default_login_url() -> String {
    "/login".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            site_url: default_site_url(),
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            seed_path: default_seed_path(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            require_login: false,
            login_url: default_login_url(),
        }
    }
}

/// `config/console.toml` (optional), overridden by `CONSOLE__SECTION__KEY` variables.
pub fn load_console_config() -> anyhow::Result<ConsoleConfig> {
    build_console_config(
        config::File::with_name("config/console").required(false),
        console_environment(),
    )
}

fn console_environment() -> config::Environment {
    config::Environment::with_prefix("CONSOLE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn build_console_config<S>(
    file: S,
    environment: config::Environment,
) -> anyhow::Result<ConsoleConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}
