//! Outbound mail adapters implementing the `ContactNotifier` port.

mod memory;

#[cfg(feature = "smtp")]
mod smtp;

pub use memory::{NoopNotifier, RecordingNotifier};

#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpNotifier};
