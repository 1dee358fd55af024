// src/application/commands/content/create.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{CategoryId, ContentBody, ContentKind, ContentTitle, ImagePath, NewContentItem},
        publisher::PublisherId,
    },
};

pub struct CreateContentCommand {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
    pub image_path: Option<String>,
    pub is_independent: bool,
}

impl CreateContentCommand {
    pub fn builder(kind: ContentKind) -> CreateContentCommandBuilder {
        CreateContentCommandBuilder {
            kind,
            title: None,
            body: None,
            publisher_id: None,
            category_id: None,
            image_path: None,
            is_independent: false,
        }
    }
}

pub struct CreateContentCommandBuilder {
    kind: ContentKind,
    title: Option<String>,
    body: Option<String>,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
    image_path: Option<String>,
    is_independent: bool,
}

impl CreateContentCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn publisher(mut self, publisher_id: i64) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    pub fn independent(mut self, is_independent: bool) -> Self {
        self.is_independent = is_independent;
        self
    }

    pub fn build(self) -> Result<CreateContentCommand, &'static str> {
        Ok(CreateContentCommand {
            kind: self.kind,
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            publisher_id: self.publisher_id,
            category_id: self.category_id,
            image_path: self.image_path,
            is_independent: self.is_independent,
        })
    }
}

impl ContentCommandService {
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let oracle = self.access.resolve(actor).await?;
        if !oracle.holds_journalist_role() {
            return Err(ApplicationError::forbidden(format!(
                "only journalists can create {}s",
                command.kind
            )));
        }

        let title = ContentTitle::new(command.title)?;
        let body = ContentBody::new(command.body)?;
        let image_path = command.image_path.map(ImagePath::new).transpose()?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        if category_id.is_some() && command.kind != ContentKind::Article {
            return Err(ApplicationError::validation("only articles can be categorised"));
        }

        let publisher_id = command.publisher_id.map(PublisherId::new).transpose()?;
        if let Some(publisher_id) = publisher_id {
            if command.is_independent {
                return Err(ApplicationError::validation(
                    "independent content cannot belong to a publisher",
                ));
            }
            self.publisher_repo
                .find_by_id(publisher_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        }

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewContentItem {
                kind: command.kind,
                title,
                body,
                author_id: oracle.user_id(),
                publisher_id,
                category_id,
                image_path,
                is_independent: command.is_independent,
                created_at: now,
            })
            .await?;

        tracing::info!(content_id = %created.id, kind = %created.kind, author_id = %created.author_id, "content drafted");
        Ok(created.into())
    }
}
