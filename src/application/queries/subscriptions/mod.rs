mod feed;
mod overview;
mod service;

pub use feed::SubscribedFeedQuery;
pub use service::SubscriptionQueryService;
