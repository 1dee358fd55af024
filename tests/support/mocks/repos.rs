// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsdesk_core::domain::{
    content::{
        ContentId, ContentItem, ContentKind, ContentReadRepository, ContentUpdate,
        ContentWriteRepository, NewContentItem,
    },
    errors::{DomainError, DomainResult},
    publisher::{
        NewStaffAssignment, Publisher, PublisherId, PublisherRepository, StaffAssignment,
        StaffAssignmentId, StaffRepository, StaffRole,
    },
    subscription::{Subscription, SubscriptionId, SubscriptionRepository, SubscriptionTarget},
    user::{EmailAddress, User, UserId, UserRepository},
};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, User>,
    publishers: BTreeMap<i64, Publisher>,
    staff: Vec<StaffAssignment>,
    content: BTreeMap<ContentId, ContentItem>,
    comments: Vec<ContentId>,
    subscriptions: Vec<Subscription>,
    next_staff_id: i64,
    next_content_id: i64,
    next_subscription_id: i64,
}

/// One in-memory store implementing every repository port, so a test can
/// seed data once and hand the same backend to all services.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
    fail_recipient_lookup: AtomicBool,
}

impl InMemoryBackend {
    pub fn add_user(&self, user: User) {
        self.state.lock().unwrap().users.insert(user.id, user);
    }

    pub fn add_publisher(&self, publisher: Publisher) {
        self.state
            .lock()
            .unwrap()
            .publishers
            .insert(publisher.id.into(), publisher);
    }

    pub fn add_staff(&self, publisher_id: i64, user_id: i64, role: StaffRole) -> StaffAssignment {
        let mut state = self.state.lock().unwrap();
        state.next_staff_id += 1;
        let assignment = StaffAssignment {
            id: StaffAssignmentId::new(state.next_staff_id).unwrap(),
            publisher_id: PublisherId::new(publisher_id).unwrap(),
            user_id: UserId::new(user_id).unwrap(),
            role,
            joined_on: Utc::now().date_naive(),
        };
        state.staff.push(assignment.clone());
        assignment
    }

    pub fn add_content(&self, item: ContentItem) {
        let mut state = self.state.lock().unwrap();
        state.next_content_id = state.next_content_id.max(item.id.into());
        state.content.insert(item.id, item);
    }

    pub fn add_comment(&self, content_id: i64) {
        self.state
            .lock()
            .unwrap()
            .comments
            .push(ContentId::new(content_id).unwrap());
    }

    pub fn content(&self, id: i64) -> Option<ContentItem> {
        self.state
            .lock()
            .unwrap()
            .content
            .get(&ContentId::new(id).unwrap())
            .cloned()
    }

    pub fn comment_count(&self, id: i64) -> usize {
        let id = ContentId::new(id).unwrap();
        self.state
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| **c == id)
            .count()
    }

    pub fn subscription_count(&self) -> usize {
        self.state.lock().unwrap().subscriptions.len()
    }

    pub fn staff_count(&self) -> usize {
        self.state.lock().unwrap().staff.len()
    }

    pub fn fail_recipient_lookup(&self) {
        self.fail_recipient_lookup.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryBackend {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }
}

#[async_trait]
impl PublisherRepository for InMemoryBackend {
    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.state.lock().unwrap().publishers.get(&id.into()).cloned())
    }
}

#[async_trait]
impl StaffRepository for InMemoryBackend {
    async fn insert(&self, assignment: NewStaffAssignment) -> DomainResult<StaffAssignment> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.staff.iter().find(|s| {
            s.publisher_id == assignment.publisher_id
                && s.user_id == assignment.user_id
                && s.role == assignment.role
        }) {
            return Ok(existing.clone());
        }
        state.next_staff_id += 1;
        let stored = StaffAssignment {
            id: StaffAssignmentId::new(state.next_staff_id)?,
            publisher_id: assignment.publisher_id,
            user_id: assignment.user_id,
            role: assignment.role,
            joined_on: assignment.joined_on,
        };
        state.staff.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: StaffAssignmentId) -> DomainResult<Option<StaffAssignment>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .staff
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn delete(&self, id: StaffAssignmentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.staff.len();
        state.staff.retain(|s| s.id != id);
        if state.staff.len() == before {
            return Err(DomainError::NotFound("staff assignment not found".into()));
        }
        Ok(())
    }

    async fn exists(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().staff.iter().any(|s| {
            s.publisher_id == publisher_id && s.user_id == user_id && s.role == role
        }))
    }

    async fn list_by_publisher(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<StaffAssignment>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .staff
            .iter()
            .filter(|s| s.publisher_id == publisher_id)
            .cloned()
            .collect())
    }

    async fn publishers_for(
        &self,
        user_id: UserId,
        role: StaffRole,
    ) -> DomainResult<HashSet<PublisherId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .staff
            .iter()
            .filter(|s| s.user_id == user_id && s.role == role)
            .map(|s| s.publisher_id)
            .collect())
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryBackend {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        state.next_content_id += 1;
        let stored = ContentItem {
            id: ContentId::new(state.next_content_id)?,
            kind: item.kind,
            title: item.title,
            body: item.body,
            author_id: item.author_id,
            publisher_id: item.publisher_id,
            category_id: item.category_id,
            image_path: item.image_path,
            is_independent: item.is_independent,
            approval: None,
            published_at: None,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        state.content.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        let item = state
            .content
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        if item.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "content was modified concurrently".into(),
            ));
        }
        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(body) = update.body {
            item.body = body;
        }
        if let Some(category) = update.category_id {
            item.category_id = category;
        }
        if let Some(image) = update.image_path {
            item.image_path = image;
        }
        if let Some(approval) = update.approval {
            item.approval = Some(approval);
        }
        if let Some(published_at) = update.published_at {
            item.published_at = Some(published_at);
        }
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.content.remove(&id).is_none() {
            return Err(DomainError::NotFound("content not found".into()));
        }
        state.comments.retain(|c| *c != id);
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryBackend {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        Ok(self.state.lock().unwrap().content.get(&id).cloned())
    }

    async fn list_unpublished(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .content
            .values()
            .filter(|item| item.kind == kind && !item.is_published())
            .cloned()
            .collect())
    }

    async fn list_published_from(
        &self,
        kind: ContentKind,
        publishers: &[PublisherId],
        authors: &[UserId],
    ) -> DomainResult<Vec<ContentItem>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .content
            .values()
            .filter(|item| item.kind == kind && item.is_published())
            .filter(|item| {
                item.publisher_id.is_some_and(|p| publishers.contains(&p))
                    || authors.contains(&item.author_id)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryBackend {
    async fn get_or_create(
        &self,
        subscriber_id: UserId,
        target: SubscriptionTarget,
        now: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state
            .subscriptions
            .iter()
            .find(|s| s.subscriber_id == subscriber_id && s.target == target)
        {
            return Ok((existing.clone(), false));
        }
        state.next_subscription_id += 1;
        let created = Subscription {
            id: SubscriptionId::new(state.next_subscription_id)?,
            subscriber_id,
            target,
            created_at: now,
        };
        state.subscriptions.push(created.clone());
        Ok((created, true))
    }

    async fn delete(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.subscriptions.len();
        state
            .subscriptions
            .retain(|s| !(s.subscriber_id == subscriber_id && s.target == target));
        Ok(state.subscriptions.len() != before)
    }

    async fn exists(&self, subscriber_id: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .any(|s| s.subscriber_id == subscriber_id && s.target == target))
    }

    async fn publishers_of(&self, subscriber_id: UserId) -> DomainResult<Vec<PublisherId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .filter(|s| s.subscriber_id == subscriber_id)
            .filter_map(|s| s.target.publisher_id())
            .collect())
    }

    async fn journalists_of(&self, subscriber_id: UserId) -> DomainResult<Vec<UserId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .filter(|s| s.subscriber_id == subscriber_id)
            .filter_map(|s| s.target.journalist_id())
            .collect())
    }

    async fn subscriber_emails(&self, target: SubscriptionTarget) -> DomainResult<Vec<EmailAddress>> {
        if self.fail_recipient_lookup.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let state = self.state.lock().unwrap();
        let emails: BTreeSet<EmailAddress> = state
            .subscriptions
            .iter()
            .filter(|s| s.target == target)
            .filter_map(|s| state.users.get(&s.subscriber_id))
            .map(|u| u.email.clone())
            .collect();
        Ok(emails.into_iter().collect())
    }
}
