use crate::domain::access::oracle::RoleOracle;
use crate::domain::content::{ContentItem, ContentKind};

pub trait ContentSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Articles need the approve capability, newsletters the manage capability.
/// The two are currently equivalent but are kept as separate policies.
pub struct CanApproveSpec<'a> {
    oracle: &'a RoleOracle,
    kind: ContentKind,
}

impl<'a> CanApproveSpec<'a> {
    pub fn new(oracle: &'a RoleOracle, kind: ContentKind) -> Self {
        Self { oracle, kind }
    }
}

impl ContentSpecification for CanApproveSpec<'_> {
    fn is_satisfied(&self) -> bool {
        match self.kind {
            ContentKind::Article => self.oracle.can_approve(),
            ContentKind::Newsletter => self.oracle.can_manage_content(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishDecision {
    Allowed,
    NotAnEditor,
    NotPublisherStaff,
}

/// Authorization for the approval-gated publish path.
pub struct CanPublishSpec<'a> {
    oracle: &'a RoleOracle,
    item: &'a ContentItem,
}

impl<'a> CanPublishSpec<'a> {
    pub fn new(oracle: &'a RoleOracle, item: &'a ContentItem) -> Self {
        Self { oracle, item }
    }

    pub fn decide(&self) -> PublishDecision {
        if !self.oracle.can_manage_content() {
            return PublishDecision::NotAnEditor;
        }
        if self.item.is_independent {
            return PublishDecision::Allowed;
        }
        match self.item.publisher_id {
            Some(publisher_id) if self.oracle.is_editor_staff_of(publisher_id) => {
                PublishDecision::Allowed
            }
            _ => PublishDecision::NotPublisherStaff,
        }
    }
}

impl ContentSpecification for CanPublishSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.decide() == PublishDecision::Allowed
    }
}

/// Authorization for the direct publish toggle: the journalist who wrote the
/// item, or anyone holding the editor role.
pub struct CanDirectPublishSpec<'a> {
    oracle: &'a RoleOracle,
    item: &'a ContentItem,
}

impl<'a> CanDirectPublishSpec<'a> {
    pub fn new(oracle: &'a RoleOracle, item: &'a ContentItem) -> Self {
        Self { oracle, item }
    }
}

impl ContentSpecification for CanDirectPublishSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.oracle.holds_editor_role()
            || (self.oracle.holds_journalist_role() && self.oracle.is_author_of(self.item))
    }
}

pub struct CanDeleteContentSpec<'a> {
    oracle: &'a RoleOracle,
    item: &'a ContentItem,
}

impl<'a> CanDeleteContentSpec<'a> {
    pub fn new(oracle: &'a RoleOracle, item: &'a ContentItem) -> Self {
        Self { oracle, item }
    }
}

impl ContentSpecification for CanDeleteContentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.oracle.is_author_of(self.item) || self.oracle.holds_editor_role()
    }
}

/// Unpublished items are visible to their author and to content managers.
pub struct CanViewContentSpec<'a> {
    oracle: Option<&'a RoleOracle>,
    item: &'a ContentItem,
}

impl<'a> CanViewContentSpec<'a> {
    pub fn new(oracle: Option<&'a RoleOracle>, item: &'a ContentItem) -> Self {
        Self { oracle, item }
    }
}

impl ContentSpecification for CanViewContentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        if self.item.is_published() {
            return true;
        }
        self.oracle
            .is_some_and(|o| o.is_author_of(self.item) || o.can_manage_content())
    }
}
