//! Application configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FOLIO_CHAT_URL` | the hosted portfolio chat endpoint |
//! | `FOLIO_CHAT_DISABLED` | unset (`1`/`true` hides the chat overlay) |
//! | `FOLIO_CHAT_TIMEOUT_MS` | 20000 |
//! | `FOLIO_CONTENT_PATH` | built-in content |
//! | `FOLIO_CELL_W_PX` / `FOLIO_CELL_H_PX` | 8 / 16 |
//! | `FOLIO_LOG_PATH` | `tui-folio.log` |
//! | `FOLIO_LOG_DISABLED` | unset |

use std::path::PathBuf;
use std::time::Duration;

use crate::chat::{ChatClientConfig, DEFAULT_CHAT_URL, DEFAULT_TIMEOUT_MS};
use crate::input::CellMetrics;

pub const DEFAULT_LOG_PATH: &str = "tui-folio.log";

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` when the chat overlay is disabled.
    pub chat: Option<ChatClientConfig>,
    pub content_path: Option<PathBuf>,
    pub cell_metrics: CellMetrics,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: Some(ChatClientConfig::default()),
            content_path: None,
            cell_metrics: CellMetrics::default(),
            log: LogConfig {
                enabled: true,
                path: PathBuf::from(DEFAULT_LOG_PATH),
            },
        }
    }
}

fn flag(value: Option<String>) -> bool {
    value
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable values fall back
    /// to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let chat = if flag(var("FOLIO_CHAT_DISABLED")) {
            None
        } else {
            let url = non_empty(var("FOLIO_CHAT_URL"))
                .unwrap_or_else(|| DEFAULT_CHAT_URL.to_string());
            let timeout_ms = var("FOLIO_CHAT_TIMEOUT_MS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS);
            Some(ChatClientConfig {
                url,
                timeout: Duration::from_millis(timeout_ms),
            })
        };

        let px = |key: &str, fallback: f32| {
            var(key)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|v| *v > 0.0)
                .unwrap_or(fallback)
        };
        let cell_metrics = CellMetrics::new(
            px("FOLIO_CELL_W_PX", defaults.cell_metrics.cell_w_px),
            px("FOLIO_CELL_H_PX", defaults.cell_metrics.cell_h_px),
        );

        let log = LogConfig {
            enabled: !flag(var("FOLIO_LOG_DISABLED")),
            path: non_empty(var("FOLIO_LOG_PATH"))
                .map(PathBuf::from)
                .unwrap_or(defaults.log.path),
        };

        Self {
            chat,
            content_path: non_empty(var("FOLIO_CONTENT_PATH")).map(PathBuf::from),
            cell_metrics,
            log,
        }
    }
}
