//! User records and the user form

use serde::Deserialize;
use sqlx::FromRow;

use super::validation::{optional, required};
use super::ValidationError;
use crate::config::{AvatarConfig, ImagePolicy};

/// Maximum length for first and last names
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length for avatar URLs
pub const MAX_IMAGE_URL_LEN: usize = 300;

/// User record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

impl User {
    /// "First Last", or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// Avatar to display, falling back to the configured placeholder.
    pub fn avatar_url<'a>(&'a self, avatars: &'a AvatarConfig) -> &'a str {
        self.image_url
            .as_deref()
            .unwrap_or(avatars.placeholder_url.as_str())
    }
}

/// Raw create/edit user form body.
///
/// Missing fields decode as empty strings so they surface as validation
/// errors instead of extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image_url: String,
}

/// Validated user fields, ready to insert or overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

impl NewUser {
    /// Validate a submitted form.
    ///
    /// A blank `image_url` is never stored as `""`: it becomes `None` under
    /// [`ImagePolicy::Nullable`] and the placeholder under
    /// [`ImagePolicy::Required`].
    ///
    /// # Example
    /// ```
    /// use blogly_server::config::AvatarConfig;
    /// use blogly_server::models::{NewUser, UserForm};
    ///
    /// let form = UserForm {
    ///     first_name: "Michael".into(),
    ///     last_name: "Matthews".into(),
    ///     image_url: "".into(),
    /// };
    /// let user = NewUser::from_form(&form, &AvatarConfig::default()).unwrap();
    /// assert_eq!(user.image_url, None);
    /// ```
    pub fn from_form(form: &UserForm, avatars: &AvatarConfig) -> Result<Self, ValidationError> {
        let first_name = required(&form.first_name, "first name", MAX_NAME_LEN)?;
        let last_name = optional(&form.last_name, "last name", MAX_NAME_LEN)?;
        let image_url = optional(&form.image_url, "image URL", MAX_IMAGE_URL_LEN)?;

        let image_url = match avatars.policy {
            ImagePolicy::Nullable => image_url,
            ImagePolicy::Required => {
                Some(image_url.unwrap_or_else(|| avatars.placeholder_url.clone()))
            }
        };

        Ok(Self {
            first_name,
            last_name,
            image_url,
        })
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
            image_url: user.image_url.clone().unwrap_or_default(),
        }
    }
}
