//! User-facing rejection channel.

use log::warn;

/// Sink for blocking, modal-style user notifications.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Alert sink that only writes a log line.
///
/// Used when no interactive surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&self, message: &str) {
        warn!(
            "event=user_alert module=view status=shown chars={}",
            message.chars().count()
        );
    }
}
