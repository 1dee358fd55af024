// src/application/commands/content/update.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{CategoryId, ContentBody, ContentId, ContentKind, ContentTitle, ContentUpdate, ImagePath},
};

/// Partial edit of a draft. `Some(None)` clears an optional field.
pub struct UpdateContentCommand {
    pub kind: ContentKind,
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub image_path: Option<Option<String>>,
}

impl ContentCommandService {
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(command.id)?;
        let oracle = self.access.resolve(actor).await?;
        let _guard = self.locks.acquire(id).await;
        let mut item = self.load(command.kind, id).await?;

        if !oracle.is_author_of(&item) {
            return Err(ApplicationError::forbidden(format!(
                "only the author can edit this {}",
                item.kind
            )));
        }

        let UpdateContentCommand {
            title,
            body,
            category_id,
            image_path,
            ..
        } = command;
        let now = self.clock.now();
        let mut update = ContentUpdate::new(id, item.updated_at);
        let mut changed = false;

        if title.is_some() || body.is_some() {
            let new_title = match title {
                Some(value) => ContentTitle::new(value)?,
                None => item.title.clone(),
            };
            let new_body = match body {
                Some(value) => ContentBody::new(value)?,
                None => item.body.clone(),
            };
            item.set_content(new_title.clone(), new_body.clone(), now)?;
            update = update.with_content(new_title, new_body);
            changed = true;
        }

        if let Some(category) = category_id {
            let category = category.map(CategoryId::new).transpose()?;
            item.set_category(category, now)?;
            update = update.with_category(category);
            changed = true;
        }

        if let Some(image) = image_path {
            let image = image.map(ImagePath::new).transpose()?;
            item.set_image(image.clone(), now)?;
            update = update.with_image(image);
            changed = true;
        }

        if !changed {
            return Ok(item.into());
        }

        update.set_updated_at(item.updated_at);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
