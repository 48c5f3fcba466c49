//! Post records and the post form

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

use super::validation::required;
use super::ValidationError;

/// Maximum length for post titles
pub const MAX_TITLE_LEN: usize = 50;

/// Post record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}

impl Post {
    /// Human-friendly creation time, e.g. "Tue Mar 4 2025, 9:05 PM".
    pub fn friendly_date(&self) -> String {
        self.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string()
    }
}

/// Raw create/edit post form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Validated post fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Validate a submitted form.
    ///
    /// # Rules
    /// - Title non-empty after trimming, max 50 characters
    /// - Content non-empty after trimming (TEXT, no limit)
    pub fn from_form(form: &PostForm) -> Result<Self, ValidationError> {
        let title = required(&form.title, "title", MAX_TITLE_LEN)?;
        let content = required(&form.content, "content", usize::MAX)?;

        Ok(Self { title, content })
    }
}

impl From<&Post> for PostForm {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn valid_post() {
        let post = NewPost::from_form(&PostForm {
            title: " Wahoo ".into(),
            content: "Bananas are great".into(),
        })
        .unwrap();

        assert_eq!(post.title, "Wahoo");
        assert_eq!(post.content, "Bananas are great");
    }

    #[test]
    fn rejects_missing_content() {
        let err = NewPost::from_form(&PostForm {
            title: "Wahoo".into(),
            content: String::new(),
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "content" });
    }

    #[test]
    fn title_max_length() {
        let ok = PostForm {
            title: "a".repeat(50),
            content: "x".into(),
        };
        assert!(NewPost::from_form(&ok).is_ok());

        let too_long = PostForm {
            title: "a".repeat(51),
            content: "x".into(),
        };
        assert!(matches!(
            NewPost::from_form(&too_long).unwrap_err(),
            ValidationError::TooLong { max: 50, .. }
        ));
    }

    #[test]
    fn friendly_date_format() {
        let post = Post {
            id: 1,
            title: "Which Banana".into(),
            content: "This banana".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 4, 21, 5, 0).unwrap(),
            user_id: 1,
        };
        assert_eq!(post.friendly_date(), "Tue Mar 4 2025, 9:05 PM");
    }
}
