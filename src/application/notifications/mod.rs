pub mod fanout;
pub mod queue;
pub mod social_text;

pub use fanout::{ChannelOutcome, FanOutNotifier, NotificationReport, NotifierSettings};
pub use queue::NotificationQueue;
pub use social_text::{POST_CHAR_LIMIT, compose_post};
