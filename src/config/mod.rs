use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fully qualified name of the debug-logging call to strip.
    #[serde(default = "default_debug_fn")]
    pub debug_fn: String,

    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    #[serde(default = "default_stylesheet_extensions")]
    pub stylesheet_extensions: Vec<String>,

    /// Directory names skipped at any depth during discovery.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

fn default_debug_fn() -> String {
    "console.log".to_string()
}

fn default_source_extensions() -> Vec<String> {
    vec![
        "js".to_string(),
        "jsx".to_string(),
        "ts".to_string(),
        "tsx".to_string(),
    ]
}

fn default_stylesheet_extensions() -> Vec<String> {
    vec!["css".to_string()]
}

fn default_ignore_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "dist".to_string(),
        "build".to_string(),
        ".git".to_string(),
        "coverage".to_string(),
        ".next".to_string(),
        ".nuxt".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_fn: default_debug_fn(),
            source_extensions: default_source_extensions(),
            stylesheet_extensions: default_stylesheet_extensions(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Config {
    /// Load `scrub.config.json` from the project root, falling back to
    /// defaults when the file is absent or not valid JSON.
    pub fn find_and_load(root: &Path) -> Self {
        let config_path = root.join("scrub.config.json");
        if !config_path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("could not read {}: {}", config_path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring invalid {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }
}
