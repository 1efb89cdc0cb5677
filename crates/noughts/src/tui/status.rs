//! Status line with timed flash messages.

use std::time::{Duration, Instant};
use tracing::trace;

/// A temporary message shown in place of the normal status.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Flash {
    text: String,
    expires_at: Instant,
}

/// Status line state.
///
/// Flashes expire on [`StatusLine::tick`], called from the event loop
/// between inputs. Nothing runs in the background.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    flash: Option<Flash>,
}

impl StatusLine {
    /// Shows `text` until `now + duration`, replacing any earlier flash.
    pub fn flash(&mut self, text: impl Into<String>, now: Instant, duration: Duration) {
        self.flash = Some(Flash {
            text: text.into(),
            expires_at: now + duration,
        });
    }

    /// Drops the flash once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            trace!("Status flash expired");
            self.flash = None;
        }
    }

    /// The active flash text, if any.
    pub fn current(&self) -> Option<&str> {
        self.flash.as_ref().map(|f| f.text.as_str())
    }
}
