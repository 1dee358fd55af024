// src/application/commands/subscriptions/mod.rs
mod service;
mod subscribe;
mod unsubscribe;

pub use service::{SubscriptionCommandService, SubscriptionTargetRef};
