// tests/support/builders.rs
use super::mocks::{FixedClock, InMemoryBackend, RecordingEventSink, StaticTokenManager, fixed_now};
use newsdesk_core::application::{
    dto::AuthenticatedUser,
    services::{ApplicationServices, Repositories},
};
use newsdesk_core::domain::{
    content::{Approval, ContentBody, ContentId, ContentItem, ContentKind, ContentTitle},
    publisher::{Publisher, PublisherId, StaffRole},
    user::{EmailAddress, GroupName, Role, User, UserId, Username},
};
use std::sync::Arc;

pub const READER: i64 = 1;
pub const SECOND_READER: i64 = 2;
pub const JOURNALIST: i64 = 3;
pub const OTHER_JOURNALIST: i64 = 4;
/// Editor seated on the Daily Planet staff.
pub const STAFF_EDITOR: i64 = 5;
/// Editor role without any staff seat.
pub const OUTSIDE_EDITOR: i64 = 6;
/// Journalist role, member of the Editors group.
pub const GROUP_EDITOR: i64 = 7;
pub const ADMIN: i64 = 8;

pub const DAILY_PLANET: i64 = 10;
pub const GAZETTE: i64 = 11;

pub fn user(id: i64, username: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
        full_name: None,
        role,
        groups: Vec::new(),
        is_superuser: false,
        created_at: fixed_now(),
    }
}

pub fn publisher(id: i64, name: &str) -> Publisher {
    Publisher {
        id: PublisherId::new(id).unwrap(),
        name: name.to_string(),
        description: format!("{name} newsroom"),
        created_at: fixed_now(),
    }
}

/// Backend with the standard cast of users and publishers.
pub fn seeded_backend() -> Arc<InMemoryBackend> {
    let backend = Arc::new(InMemoryBackend::default());

    backend.add_user(user(READER, "rita", Role::Reader));
    backend.add_user(user(SECOND_READER, "rupert", Role::Reader));
    backend.add_user(User {
        full_name: Some("Lois Lane".into()),
        ..user(JOURNALIST, "lois", Role::Journalist)
    });
    backend.add_user(user(OTHER_JOURNALIST, "clark", Role::Journalist));
    backend.add_user(user(STAFF_EDITOR, "perry", Role::Editor));
    backend.add_user(user(OUTSIDE_EDITOR, "olive", Role::Editor));
    backend.add_user(User {
        groups: vec![GroupName::new("Editors").unwrap()],
        ..user(GROUP_EDITOR, "gina", Role::Journalist)
    });
    backend.add_user(User {
        is_superuser: true,
        ..user(ADMIN, "admin", Role::Reader)
    });

    backend.add_publisher(publisher(DAILY_PLANET, "Daily Planet"));
    backend.add_publisher(publisher(GAZETTE, "Gazette"));
    backend.add_staff(DAILY_PLANET, STAFF_EDITOR, StaffRole::Editor);
    backend.add_staff(DAILY_PLANET, JOURNALIST, StaffRole::Journalist);

    backend
}

pub fn draft(id: i64, kind: ContentKind, author: i64, publisher_id: Option<i64>) -> ContentItem {
    ContentItem {
        id: ContentId::new(id).unwrap(),
        kind,
        title: ContentTitle::new(format!("{} {id}", kind.label())).unwrap(),
        body: ContentBody::new("Council postponed the vote on the new budget.").unwrap(),
        author_id: UserId::new(author).unwrap(),
        publisher_id: publisher_id.map(|p| PublisherId::new(p).unwrap()),
        category_id: None,
        image_path: None,
        is_independent: publisher_id.is_none(),
        approval: None,
        published_at: None,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn approved(mut item: ContentItem, by: i64) -> ContentItem {
    item.approval = Some(Approval {
        approved_by: UserId::new(by).unwrap(),
        approved_at: fixed_now(),
    });
    item
}

pub fn published(item: ContentItem, by: i64) -> ContentItem {
    let mut item = approved(item, by);
    item.published_at = Some(fixed_now());
    item
}

pub fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("user{id}"),
    }
}

/// Services wired to one in-memory backend with a recording event sink.
pub struct Newsroom {
    pub backend: Arc<InMemoryBackend>,
    pub events: Arc<RecordingEventSink>,
    pub services: Arc<ApplicationServices>,
}

impl Newsroom {
    pub fn new() -> Self {
        Self::with_backend(seeded_backend())
    }

    pub fn with_backend(backend: Arc<InMemoryBackend>) -> Self {
        let events = Arc::new(RecordingEventSink::default());
        let repos = Repositories {
            users: backend.clone(),
            publishers: backend.clone(),
            staff: backend.clone(),
            content_write: backend.clone(),
            content_read: backend.clone(),
            subscriptions: backend.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(StaticTokenManager),
            events.clone(),
            Arc::new(FixedClock),
        ));
        Self {
            backend,
            events,
            services,
        }
    }
}
