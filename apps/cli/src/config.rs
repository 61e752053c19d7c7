use std::fs;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub board_id: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            board_id: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    board_id: Option<i64>,
}

/// Resolves settings with the usual precedence: defaults, then
/// `retroboard.toml`, then environment, then explicit CLI values.
pub fn load_settings(cli_server_url: Option<String>, cli_board_id: Option<i64>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("retroboard.toml") {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.server_url {
                settings.server_url = v;
            }
            if let Some(v) = file_cfg.board_id {
                settings.board_id = v;
            }
        }
    }

    if let Ok(v) = std::env::var("RETRO_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("RETRO_BOARD_ID") {
        if let Ok(parsed) = v.parse::<i64>() {
            settings.board_id = parsed;
        }
    }

    if let Some(v) = cli_server_url {
        settings.server_url = v;
    }
    if let Some(v) = cli_board_id {
        settings.board_id = v;
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    settings
}

/// The stores build paths with `format!("{base}/...")`, so the base must
/// not carry a trailing slash.
pub fn normalize_server_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Settings::default().server_url;
    }
    trimmed.trim_end_matches('/').to_string()
}
