// tests/support/mocks/mod.rs
pub mod channels;
pub mod repos;
pub mod security;
pub mod time;

pub use channels::{RecordedPost, RecordingEmailSender, RecordingEventSink, RecordingSocialChannel};
pub use repos::InMemoryBackend;
pub use security::{StaticTokenManager, bearer};
pub use time::{FixedClock, fixed_now};
