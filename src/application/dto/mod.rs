pub mod auth;
pub mod content;
pub mod staff;
pub mod subscriptions;

pub use auth::AuthenticatedUser;
pub use content::ContentDto;
pub use staff::StaffAssignmentDto;
pub use subscriptions::{
    SubscriptionDto, SubscriptionOutcomeDto, SubscriptionsOverviewDto, UnsubscribeOutcomeDto,
};
