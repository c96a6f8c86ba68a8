//! Form state for the login screen and the dashboard.

use quill_api::{CategoryDraft, LoginRequest, Post, PostDraft};

use crate::error::AppError;

/// Login screen input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Post editor input. New posts start out published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// Optional hand-written excerpt.
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub published: bool,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            category: String::new(),
            image_url: String::new(),
            published: true,
        }
    }
}

impl PostForm {
    /// Form prefilled with an existing post.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            category: post.category.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
            published: post.published,
        }
    }

    /// Check that title, content and category are filled in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    #[must_use]
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_owned(),
            content: self.content.clone(),
            excerpt: self.excerpt.trim().to_owned(),
            category: self.category.clone(),
            image_url: self.image_url.trim().to_owned(),
            published: self.published,
        }
    }
}

/// Category creation input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the name is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Missing required fields: name".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
        }
    }
}
