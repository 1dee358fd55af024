// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        access::AccessResolver,
        commands::{
            content::ContentCommandService, staff::StaffCommandService,
            subscriptions::SubscriptionCommandService,
        },
        ports::{notification::PublishEventSink, security::TokenManager, time::Clock},
        queries::{content::ContentQueryService, subscriptions::SubscriptionQueryService},
    },
    domain::{
        content::{ContentReadRepository, ContentWriteRepository},
        publisher::{PublisherRepository, StaffRepository},
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Storage ports the services are wired from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub publishers: Arc<dyn PublisherRepository>,
    pub staff: Arc<dyn StaffRepository>,
    pub content_write: Arc<dyn ContentWriteRepository>,
    pub content_read: Arc<dyn ContentReadRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    pub staff_commands: Arc<StaffCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        token_manager: Arc<dyn TokenManager>,
        events: Arc<dyn PublishEventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let access = Arc::new(AccessResolver::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.staff),
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&repos.content_write),
            Arc::clone(&repos.content_read),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
            Arc::clone(&access),
            events,
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&repos.content_read),
            Arc::clone(&access),
        ));
        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&repos.users),
            Arc::clone(&repos.publishers),
            Arc::clone(&clock),
        ));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&repos.content_read),
        ));
        let staff_commands = Arc::new(StaffCommandService::new(
            Arc::clone(&repos.staff),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
            clock,
        ));

        Self {
            content_commands,
            content_queries,
            subscription_commands,
            subscription_queries,
            staff_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
