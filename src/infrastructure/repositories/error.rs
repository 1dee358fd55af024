use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_CONTENT_AUTHOR: &str = "content_items_author_id_fkey";
const CNT_CONTENT_PUBLISHER: &str = "content_items_publisher_id_fkey";
const CNT_CONTENT_CATEGORY: &str = "content_items_category_id_fkey";
const CNT_CONTENT_APPROVAL_PAIR: &str = "content_items_approval_pair_chk";
const CNT_CONTENT_PUBLISHED_REQUIRES_APPROVAL: &str =
    "content_items_published_requires_approval_chk";
const CNT_CONTENT_CATEGORY_ARTICLE: &str = "content_items_category_article_chk";
const CNT_STAFF_MEMBER: &str = "publisher_staff_member_key";
const CNT_SUBSCRIPTION_TARGET: &str = "subscriptions_single_target_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_STAFF_MEMBER => {
                        DomainError::Conflict("staff assignment already exists".into())
                    }
                    CNT_CONTENT_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_CONTENT_PUBLISHER => DomainError::NotFound("publisher not found".into()),
                    CNT_CONTENT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_CONTENT_APPROVAL_PAIR => DomainError::Validation(
                        "approver and approval time must be set together".into(),
                    ),
                    CNT_CONTENT_PUBLISHED_REQUIRES_APPROVAL => {
                        DomainError::Precondition("content must be approved before publishing".into())
                    }
                    CNT_CONTENT_CATEGORY_ARTICLE => {
                        DomainError::Validation("only articles can be categorised".into())
                    }
                    CNT_SUBSCRIPTION_TARGET => DomainError::Validation(
                        "subscription must target exactly one publisher or journalist".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
