pub mod sender;

use crate::model::NotifyError;
use crate::notifier::MessageSink;
use reqwest::Client;
use std::time::Duration;

/// Telegram rejects `sendMessage` texts longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

pub const SEND_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TelegramNotifier {
    pub(crate) bot_token: String,
    pub(crate) chat_id: String,
    pub(crate) client: Client,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Api(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            bot_token,
            chat_id,
            client,
        })
    }
}

#[async_trait::async_trait]
impl MessageSink for TelegramNotifier {
    async fn deliver(&self, text: &str) -> Result<(), NotifyError> {
        sender::send_text(self, text).await
    }

    fn name(&self) -> &str {
        "Telegram"
    }
}
