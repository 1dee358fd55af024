use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

const TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("content id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two content variants share one lifecycle and differ only in optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Newsletter,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Newsletter => "newsletter",
        }
    }

    /// Capitalised label used in user-facing messages ("Article", "Newsletter").
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "Article",
            ContentKind::Newsletter => "Newsletter",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(ContentKind::Article),
            "newsletter" => Ok(ContentKind::Newsletter),
            other => Err(DomainError::Validation(format!(
                "unknown content kind '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBody(String);

impl ContentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Relative path of an uploaded image, resolved against the media root when used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath(String);

impl ImagePath {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("image path cannot be empty".into()));
        }
        if is_rooted(trimmed) {
            return Err(DomainError::Validation(
                "image path must be relative to the media root".into(),
            ));
        }
        if trimmed.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(DomainError::Validation(
                "image path cannot traverse directories".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Absolute paths, leading separators and drive prefixes (`C:`) on any platform.
fn is_rooted(path: &str) -> bool {
    let mut chars = path.chars();
    let drive_prefix = matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    );
    Path::new(path).is_absolute() || path.starts_with(['/', '\\']) || drive_prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_length_is_bounded() {
        assert!(ContentTitle::new("a".repeat(200)).is_ok());
        assert!(ContentTitle::new("a".repeat(201)).is_err());
        assert!(ContentTitle::new("   ").is_err());
    }

    #[test]
    fn image_path_rejects_traversal() {
        assert!(ImagePath::new("article_images/cover.png").is_ok());
        assert!(ImagePath::new("../etc/passwd").is_err());
    }

    #[test]
    fn image_path_must_stay_under_media_root() {
        assert!(ImagePath::new("/etc/passwd").is_err());
        assert!(ImagePath::new("  /srv/app/.env").is_err());
        assert!(ImagePath::new("\\\\server\\share\\cover.png").is_err());
        assert!(ImagePath::new("C:\\Windows\\win.ini").is_err());
        assert!(ImagePath::new("c:cover.png").is_err());
        assert!(ImagePath::new("newsletter_images/c:over.png").is_ok());
    }
}
