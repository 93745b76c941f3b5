use anyhow::Context;
use serde::Deserialize;

/// Names a YAML file to load settings from.
pub const CONFIG_ENV: &str = "DOCSERVE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix joined onto every request path
    pub doc_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            doc_root: "docs".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the file named by `DOCSERVE_CONFIG`, then the
    /// `LISTEN` and `DOC_ROOT` variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.doc_root = root;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
