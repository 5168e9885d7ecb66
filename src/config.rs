use serde::Deserialize;
use web_sys::window;

use crate::error::{ErrorKind, Result};

/// Id of the optional `<script type="application/json">` holding the config.
pub const CONFIG_SCRIPT_ID: &str = "app-config";

pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base: String,
    pub message_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut cfg: AppConfig = serde_json::from_str(json)?;
        cfg.api_base = cfg.api_base.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Reads the embedded config script; defaults when the page has none.
    pub fn from_page() -> Result<Self> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| ErrorKind::Config("no document".into()))?;
        match doc.get_element_by_id(CONFIG_SCRIPT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}
