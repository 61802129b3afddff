use homework_rust_core::clients::MessageSink;
use log::{debug, error};

/// Best-effort delivery of notifications to the user.
///
/// Send failures are logged and never propagated.
pub struct Notifier<S> {
    sink: S,
}

impl<S: MessageSink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns whether the message was delivered.
    pub async fn notify(&self, message: &str) -> bool {
        match self.sink.send_message(message).await {
            Ok(()) => {
                debug!("The message was successfully sent: {}", message);
                true
            }
            Err(e) => {
                error!("The following error appears while sending the message: {}", e);
                false
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
