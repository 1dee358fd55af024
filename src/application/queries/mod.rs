pub mod content;
pub mod subscriptions;
