// Delivery of the finished report

pub mod console;
pub mod telegram;

pub use console::ConsoleSink;
pub use telegram::TelegramNotifier;

use crate::model::NotifyError;

#[async_trait::async_trait]
pub trait MessageSink: Send + Sync {
    /// Delivers `text` verbatim.
    async fn deliver(&self, text: &str) -> Result<(), NotifyError>;
    fn name(&self) -> &str;
}
