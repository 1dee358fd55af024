pub mod content;
pub mod staff;
pub mod subscriptions;
