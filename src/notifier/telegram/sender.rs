// notifier/telegram/sender.rs

use crate::model::NotifyError;
use crate::notifier::telegram::{TelegramNotifier, MAX_MESSAGE_CHARS, SEND_TIMEOUT};
use tokio::time::timeout;
use tracing::{info, warn};

/// Checks the Telegram length limit before any request is made.
pub fn check_length(text: &str) -> Result<(), NotifyError> {
    let chars = text.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(NotifyError::Api(format!(
            "message has {} characters, Telegram allows {}",
            chars, MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

/// Sends a text message via Telegram; any non-success response is an error.
pub async fn send_text(notifier: &TelegramNotifier, text: &str) -> Result<(), NotifyError> {
    check_length(text)?;

    let url = format!("https://api.telegram.org/bot{}/sendMessage", notifier.bot_token);
    let params = [
        ("chat_id", notifier.chat_id.clone()),
        ("text", text.to_string()),
    ];
    info!("📤 Sending Telegram message ({} chars)", text.chars().count());

    let response = match timeout(SEND_TIMEOUT, notifier.client.post(&url).form(&params).send()).await {
        Ok(Ok(resp)) => resp,
        Ok(Err(e)) if e.is_timeout() => {
            warn!("⏳ Telegram send() timed out");
            return Err(NotifyError::Timeout);
        }
        Ok(Err(e)) => {
            warn!("❌ Telegram send() failed: {:?}", e);
            return Err(NotifyError::Api(format!("Send failed: {}", e)));
        }
        Err(_) => {
            warn!("⏳ Telegram send() timed out");
            return Err(NotifyError::Timeout);
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    if !status.is_success() {
        warn!("❌ Telegram API responded [{}]: {}", status, body);
        return Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    info!("✅ Telegram response [{}]", status);
    Ok(())
}
