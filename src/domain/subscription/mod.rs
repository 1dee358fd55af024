pub mod entity;
pub mod repository;

pub use entity::{Subscription, SubscriptionId, SubscriptionTarget};
pub use repository::SubscriptionRepository;
