//! App-message callbacks.
//!
//! The face opens the host's message channel but neither sends nor expects a
//! payload. Inbound messages are dropped after a debug line; transport
//! failures are logged and otherwise ignored.

use log::{debug, error, info};
use thiserror_no_std::Error;

/// Failure reasons reported by the host's message transport.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum MessageError {
    #[error("Send timed out")]
    SendTimeout,

    #[error("Send rejected by the peer")]
    SendRejected,

    #[error("Peer not connected")]
    NotConnected,

    #[error("Application not running on the peer")]
    AppNotRunning,

    #[error("Message buffer overflow")]
    BufferOverflow,

    #[error("Transport busy")]
    Busy,

    #[error("Channel closed")]
    Closed,

    #[error("Out of memory")]
    OutOfMemory,

    /// A reason code the face does not know.
    #[error("Unknown transport error ({0})")]
    Other(u32),
}

/// One key/value pair of an app message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MessageEntry {
    pub key: u32,
    pub value: i32,
}

/// An inbound app message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppMessage<'a> {
    pub entries: &'a [MessageEntry],
}

/// Callbacks the host invokes on message traffic.
///
/// The provided implementations are the face's behavior: nothing is acted on,
/// failures only go to the log.
pub trait AppMessageHandler {
    fn inbox_received(
        &mut self,
        message: &AppMessage<'_>,
    ) {
        debug!("Inbox: ignoring message with {} entries", message.entries.len());
    }

    fn inbox_dropped(
        &mut self,
        reason: MessageError,
    ) {
        error!("Message dropped: {reason}");
    }

    fn outbox_failed(
        &mut self,
        reason: MessageError,
    ) {
        error!("Outbox send failed: {reason}");
    }

    fn outbox_sent(&mut self) {
        info!("Outbox send success");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl AppMessageHandler for Inert {}

    #[test]
    fn test_error_messages() {
        assert_eq!(MessageError::Busy.to_string(), "Transport busy");
        assert_eq!(MessageError::Other(64).to_string(), "Unknown transport error (64)");
    }

    #[test]
    fn test_default_callbacks_are_inert() {
        let mut handler = Inert;
        let entries = [MessageEntry { key: 1, value: 0 }];
        handler.inbox_received(&AppMessage { entries: &entries });
        handler.inbox_dropped(MessageError::BufferOverflow);
        handler.outbox_failed(MessageError::NotConnected);
        handler.outbox_sent();
    }
}
