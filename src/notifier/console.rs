use crate::model::NotifyError;
use crate::notifier::MessageSink;

/// Prints the message to stdout instead of sending it (`--dry-run`).
pub struct ConsoleSink;

#[async_trait::async_trait]
impl MessageSink for ConsoleSink {
    async fn deliver(&self, text: &str) -> Result<(), NotifyError> {
        println!("{}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
