use crate::model::{ConfigError, HistoryRange};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings as they appear in `config.json`; every field is optional there.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    telegram_bot_token: Option<String>,
    telegram_chat_id: Option<String>,
    history_days: Option<u32>,
    vs_currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` only when running with `--dry-run`.
    pub telegram: Option<TelegramConfig>,
    pub history: HistoryRange,
    pub vs_currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Loads `path` if it exists, then applies environment overrides.
pub fn load_config(path: &str, dry_run: bool) -> Result<AppConfig, ConfigError> {
    let file = if Path::new(path).exists() {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    } else {
        FileConfig::default()
    };
    resolve(file, |key| std::env::var(key).ok(), dry_run)
}

fn resolve(
    file: FileConfig,
    lookup: impl Fn(&str) -> Option<String>,
    dry_run: bool,
) -> Result<AppConfig, ConfigError> {
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let bot_token = env("TELEGRAM_TOKEN").or(file.telegram_bot_token);
    let chat_id = env("TELEGRAM_CHAT_ID").or(file.telegram_chat_id);
    let telegram = match (bot_token, chat_id) {
        (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
        _ if dry_run => None,
        (None, _) => return Err(ConfigError::Missing("TELEGRAM_TOKEN")),
        (_, None) => return Err(ConfigError::Missing("TELEGRAM_CHAT_ID")),
    };

    let history = match env("HISTORY_DAYS") {
        Some(raw) => parse_history(&raw)?,
        None => file.history_days.map_or(HistoryRange::Max, HistoryRange::Days),
    };

    let vs_currency = env("VS_CURRENCY")
        .or(file.vs_currency)
        .unwrap_or_else(|| "usd".to_string())
        .to_lowercase();

    Ok(AppConfig {
        telegram,
        history,
        vs_currency,
    })
}

fn parse_history(raw: &str) -> Result<HistoryRange, ConfigError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("max") {
        return Ok(HistoryRange::Max);
    }
    match raw.parse::<u32>() {
        Ok(days) if days > 0 => Ok(HistoryRange::Days(days)),
        _ => Err(ConfigError::Invalid {
            key: "HISTORY_DAYS",
            value: raw.to_string(),
        }),
    }
}
