// src/domain/content/entity.rs
use crate::domain::content::value_objects::{
    CategoryId, ContentBody, ContentId, ContentKind, ContentTitle, ImagePath,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Who approved an item and when. Both halves are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    pub approved_by: UserId,
    pub approved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Draft,
    Approved,
    Published,
}

#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub category_id: Option<CategoryId>,
    pub image_path: Option<ImagePath>,
    pub is_independent: bool,
    pub approval: Option<Approval>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn state(&self) -> LifecycleState {
        match (self.approval.is_some(), self.published_at.is_some()) {
            (_, true) => LifecycleState::Published,
            (true, false) => LifecycleState::Approved,
            (false, false) => LifecycleState::Draft,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approval.is_some()
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Records the approval. An already approved item keeps its original
    /// approver and timestamp; the return value tells whether anything changed.
    pub fn approve(&mut self, approved_by: UserId, now: DateTime<Utc>) -> bool {
        if self.approval.is_some() {
            return false;
        }
        self.approval = Some(Approval {
            approved_by,
            approved_at: now,
        });
        self.updated_at = now;
        true
    }

    /// Marks the item as published. Returns `Ok(false)` when it already was.
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<bool> {
        if self.approval.is_none() {
            return Err(DomainError::Precondition(format!(
                "{} must be approved before publishing",
                self.kind.label()
            )));
        }
        if self.published_at.is_some() {
            return Ok(false);
        }
        self.published_at = Some(now);
        self.updated_at = now;
        Ok(true)
    }

    pub fn set_content(
        &mut self,
        title: ContentTitle,
        body: ContentBody,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_editable()?;
        self.title = title;
        self.body = body;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_image(&mut self, image_path: Option<ImagePath>, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_editable()?;
        self.image_path = image_path;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_category(
        &mut self,
        category_id: Option<CategoryId>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_editable()?;
        if category_id.is_some() && self.kind != ContentKind::Article {
            return Err(DomainError::Validation(
                "only articles can be categorised".into(),
            ));
        }
        self.category_id = category_id;
        self.updated_at = now;
        Ok(())
    }

    fn ensure_editable(&self) -> DomainResult<()> {
        if self.is_published() {
            Err(DomainError::Precondition(format!(
                "published {}s can no longer be edited",
                self.kind
            )))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub category_id: Option<CategoryId>,
    pub image_path: Option<ImagePath>,
    pub is_independent: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied atomically by the write repository. The row is
/// only updated while its `updated_at` still equals `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub body: Option<ContentBody>,
    pub category_id: Option<Option<CategoryId>>,
    pub image_path: Option<Option<ImagePath>>,
    pub approval: Option<Approval>,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn new(id: ContentId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            category_id: None,
            image_path: None,
            approval: None,
            published_at: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_content(mut self, title: ContentTitle, body: ContentBody) -> Self {
        self.title = Some(title);
        self.body = Some(body);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_image(mut self, image_path: Option<ImagePath>) -> Self {
        self.image_path = Some(image_path);
        self
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.approval = Some(approval);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(kind: ContentKind) -> ContentItem {
        let now = Utc::now();
        ContentItem {
            id: ContentId::new(1).unwrap(),
            kind,
            title: ContentTitle::new("Budget vote delayed").unwrap(),
            body: ContentBody::new("The council postponed the vote.").unwrap(),
            author_id: UserId::new(7).unwrap(),
            publisher_id: None,
            category_id: None,
            image_path: None,
            is_independent: true,
            approval: None,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_items_start_as_drafts() {
        assert_eq!(draft(ContentKind::Article).state(), LifecycleState::Draft);
    }

    #[test]
    fn approve_sets_both_fields_together() {
        let mut item = draft(ContentKind::Article);
        let now = Utc::now();
        assert!(item.approve(UserId::new(3).unwrap(), now));
        let approval = item.approval.unwrap();
        assert_eq!(approval.approved_by, UserId::new(3).unwrap());
        assert_eq!(approval.approved_at, now);
        assert_eq!(item.state(), LifecycleState::Approved);
    }

    #[test]
    fn second_approval_keeps_original_stamp() {
        let mut item = draft(ContentKind::Newsletter);
        let first = Utc::now();
        item.approve(UserId::new(3).unwrap(), first);
        let changed = item.approve(UserId::new(4).unwrap(), first + Duration::minutes(5));
        assert!(!changed);
        assert_eq!(item.approval.unwrap().approved_by, UserId::new(3).unwrap());
        assert_eq!(item.approval.unwrap().approved_at, first);
    }

    #[test]
    fn publish_requires_approval() {
        let mut item = draft(ContentKind::Article);
        let err = item.publish(Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Precondition(msg) if msg == "Article must be approved before publishing"));
        assert!(!item.is_published());
    }

    #[test]
    fn publish_after_approval_is_reported_once() {
        let mut item = draft(ContentKind::Article);
        let now = Utc::now();
        item.approve(UserId::new(3).unwrap(), now);
        assert!(item.publish(now).unwrap());
        assert!(!item.publish(now + Duration::seconds(1)).unwrap());
        assert_eq!(item.published_at, Some(now));
        assert_eq!(item.state(), LifecycleState::Published);
    }

    #[test]
    fn published_items_cannot_be_edited() {
        let mut item = draft(ContentKind::Article);
        let now = Utc::now();
        item.approve(UserId::new(3).unwrap(), now);
        item.publish(now).unwrap();
        let result = item.set_content(
            ContentTitle::new("new").unwrap(),
            ContentBody::new("new").unwrap(),
            now,
        );
        assert!(matches!(result, Err(DomainError::Precondition(_))));
    }

    #[test]
    fn newsletters_cannot_carry_a_category() {
        let mut item = draft(ContentKind::Newsletter);
        let result = item.set_category(Some(CategoryId::new(2).unwrap()), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
