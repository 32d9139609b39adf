use mailblock_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mailblock.config.json";

/// Suffix identifying document files under the source directory
pub const DOCUMENT_SUFFIX: &str = ".email.json";

/// Mailblock configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing .email.json documents
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory compiled HTML is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// `<title>` for compiled emails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub pretty: bool,

    /// Render per-breakpoint overrides
    #[serde(default)]
    pub responsive: bool,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        let mut options = CompileOptions {
            pretty: self.pretty,
            responsive: self.responsive,
            ..Default::default()
        };
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        options
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            title: None,
            pretty: false,
            responsive: false,
        }
    }
}
