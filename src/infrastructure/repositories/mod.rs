// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_content;
mod postgres_publisher;
mod postgres_subscription;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_publisher::{PostgresPublisherRepository, PostgresStaffRepository};
pub use postgres_subscription::PostgresSubscriptionRepository;
pub use postgres_user::PostgresUserRepository;
