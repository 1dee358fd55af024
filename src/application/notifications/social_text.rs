// src/application/notifications/social_text.rs
use crate::domain::content::ContentKind;

/// Hard ceiling for one social post, counted in characters.
pub const POST_CHAR_LIMIT: usize = 280;
const PREVIEW_CHARS: usize = 100;
/// Below this much room the description is dropped entirely.
const MIN_DESCRIPTION_ROOM: usize = 10;

pub fn default_hashtags(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => "#news #article",
        ContentKind::Newsletter => "#news #newsletter",
    }
}

fn framed(kind: ContentKind, title: &str, description: &str, author: &str, hashtags: &str) -> String {
    match kind {
        ContentKind::Article => format!(
            "📰 New article published: '{title}'\n\n📝 {description}\n👤 Author: {author}\n\nRead now! {hashtags}"
        ),
        ContentKind::Newsletter => format!(
            "📢 New newsletter: '{title}'\n\n📝 {description}\n👤 Author: {author}\n\nSubscribe now! {hashtags}"
        ),
    }
}

fn compact(kind: ContentKind, title: &str, author: &str, hashtags: &str) -> String {
    let line = match kind {
        ContentKind::Article => format!("📰 Article '{title}' by {author}."),
        ContentKind::Newsletter => format!("📢 Newsletter '{title}' by {author}."),
    };
    if hashtags.is_empty() {
        line
    } else {
        format!("{line} {hashtags}")
    }
}

fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Builds the announcement text for a publish event.
///
/// The description preview is the first 100 characters plus an ellipsis.
/// When the framed post is over the limit the description is cut further;
/// when too little room remains the compact form is used, shedding hashtags
/// before anything else.
pub fn compose_post(
    kind: ContentKind,
    title: &str,
    description: &str,
    author: &str,
    hashtags: Option<&str>,
) -> String {
    let hashtags = hashtags.unwrap_or_else(|| default_hashtags(kind));
    let description_chars = description.chars().count();
    let preview = take_chars(description, PREVIEW_CHARS);
    let preview_chars = preview.chars().count();
    let ellipsis = if description_chars > PREVIEW_CHARS { "..." } else { "" };

    let text = framed(kind, title, &format!("{preview}{ellipsis}"), author, hashtags);
    let text_chars = text.chars().count();
    if text_chars <= POST_CHAR_LIMIT {
        return text;
    }

    let frame_chars = text_chars - preview_chars;
    let available = POST_CHAR_LIMIT.saturating_sub(frame_chars);
    if available > MIN_DESCRIPTION_ROOM {
        let cut = take_chars(description, available - MIN_DESCRIPTION_ROOM);
        let text = framed(kind, title, &format!("{cut}..."), author, hashtags);
        if text.chars().count() <= POST_CHAR_LIMIT {
            return text;
        }
    }
    compact_within_limit(kind, title, author, hashtags)
}

/// Compact form with trailing hashtags dropped one by one until it fits.
/// Only when "title by author" alone is over the limit is the text clipped.
fn compact_within_limit(kind: ContentKind, title: &str, author: &str, hashtags: &str) -> String {
    let mut tags: Vec<&str> = hashtags.split_whitespace().collect();
    loop {
        let text = compact(kind, title, author, &tags.join(" "));
        if text.chars().count() <= POST_CHAR_LIMIT {
            return text;
        }
        if tags.pop().is_none() {
            return take_chars(&text, POST_CHAR_LIMIT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> usize {
        text.chars().count()
    }

    #[test]
    fn short_article_uses_full_frame() {
        let post = compose_post(ContentKind::Article, "Budget", "Council meets", "Ana", None);
        assert_eq!(
            post,
            "📰 New article published: 'Budget'\n\n📝 Council meets\n👤 Author: Ana\n\nRead now! #news #article"
        );
    }

    #[test]
    fn newsletter_uses_its_own_wording_and_tags() {
        let post = compose_post(ContentKind::Newsletter, "Weekly", "Digest", "Ana", None);
        assert!(post.starts_with("📢 New newsletter: 'Weekly'"));
        assert!(post.ends_with("Subscribe now! #news #newsletter"));
    }

    #[test]
    fn long_description_is_previewed() {
        let description = "x".repeat(150);
        let post = compose_post(ContentKind::Article, "T", &description, "Ana", None);
        assert!(post.contains(&format!("📝 {}...\n", "x".repeat(100))));
        assert!(chars(&post) <= POST_CHAR_LIMIT);
    }

    #[test]
    fn over_limit_post_truncates_description() {
        let title = "t".repeat(120);
        let description = "d".repeat(150);
        let post = compose_post(ContentKind::Article, &title, &description, "Ana", Some("#a"));
        assert!(chars(&post) <= POST_CHAR_LIMIT);
        assert!(post.starts_with("📰 New article published:"));
        assert!(post.contains("...\n👤 Author: Ana"));
    }

    #[test]
    fn falls_back_to_compact_form_when_no_room() {
        let title = "t".repeat(230);
        let post = compose_post(ContentKind::Newsletter, &title, "body", "Ana", Some("#x"));
        assert!(post.starts_with("📢 Newsletter '"));
        assert!(post.ends_with("by Ana. #x"));
        assert!(chars(&post) <= POST_CHAR_LIMIT);
    }

    #[test]
    fn long_author_keeps_title_and_author_by_dropping_hashtags() {
        let title = "t".repeat(200);
        let author = "a".repeat(60);
        let post = compose_post(ContentKind::Article, &title, "body", &author, None);
        assert_eq!(post, format!("📰 Article '{title}' by {author}."));
        assert!(chars(&post) <= POST_CHAR_LIMIT);
    }

    #[test]
    fn hashtags_are_shed_one_at_a_time() {
        let title = "t".repeat(200);
        let author = "a".repeat(55);
        let post = compose_post(ContentKind::Newsletter, &title, "body", &author, Some("#a #bbbbbbbbbb"));
        assert!(post.ends_with(&format!("by {author}. #a")));
        assert!(chars(&post) <= POST_CHAR_LIMIT);
    }

    #[test]
    fn oversized_title_and_author_are_clipped_as_last_resort() {
        let title = "t".repeat(200);
        let author = "a".repeat(100);
        let post = compose_post(ContentKind::Article, &title, "body", &author, None);
        assert_eq!(chars(&post), POST_CHAR_LIMIT);
        assert!(post.starts_with(&format!("📰 Article '{title}' by ")));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let description = "é".repeat(90);
        let post = compose_post(ContentKind::Article, "Café", &description, "Zoë", None);
        assert!(post.contains(&description));
    }
}
