//! Post types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    /// Post ID.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Raw content, possibly containing embed directives.
    pub content: String,
    /// Explicit excerpt. Absent when the backend stored an empty string.
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub excerpt: Option<String>,
    /// Category name.
    pub category: String,
    /// Featured image URL.
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub image_url: Option<String>,
    /// Whether the post is visible on the public blog.
    #[serde(default = "default_published")]
    pub published: bool,
    /// Creation time.
    #[serde(deserialize_with = "super::timestamp")]
    pub created_at: NaiveDateTime,
    /// Last modification time.
    #[serde(default, deserialize_with = "super::optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_published() -> bool {
    true
}

/// Request body for creating a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Explicit excerpt; the backend derives one when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub published: bool,
}

/// Request body for updating a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl From<PostDraft> for PostPatch {
    /// Full replacement of the editable fields, as the dashboard form sends it.
    fn from(draft: PostDraft) -> Self {
        Self {
            title: Some(draft.title),
            content: Some(draft.content),
            excerpt: (!draft.excerpt.is_empty()).then_some(draft.excerpt),
            category: Some(draft.category),
            image_url: Some(draft.image_url),
            published: Some(draft.published),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_backend_post() {
        let body = json!({
            "id": "6f1c",
            "title": "Hello",
            "content": "Body [youtube:abc]",
            "excerpt": "",
            "category": "Utazás",
            "image_url": "",
            "created_at": "2024-01-05T10:20:30.123456",
            "updated_at": "2024-01-06T09:00:00",
            "published": true
        });

        let post: Post = serde_json::from_value(body).unwrap();

        assert_eq!(post.id, "6f1c");
        assert_eq!(post.category, "Utazás");
        assert_eq!(post.excerpt, None);
        assert_eq!(post.image_url, None);
        assert!(post.published);
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_minimal_post() {
        let body = json!({
            "id": "1",
            "title": "T",
            "content": "C",
            "category": "Kultúra",
            "created_at": "2024-01-05T10:20:30"
        });

        let post: Post = serde_json::from_value(body).unwrap();

        assert_eq!(post.excerpt, None);
        assert!(post.published);
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn test_deserialize_explicit_excerpt() {
        let body = json!({
            "id": "1",
            "title": "T",
            "content": "C",
            "excerpt": "Short",
            "category": "K",
            "image_url": "https://example.com/a.jpg",
            "created_at": "2024-01-05T10:20:30"
        });

        let post: Post = serde_json::from_value(body).unwrap();

        assert_eq!(post.excerpt.as_deref(), Some("Short"));
        assert_eq!(post.image_url.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_serialize_draft_omits_empty_excerpt() {
        let draft = PostDraft {
            title: "T".to_owned(),
            content: "C".to_owned(),
            category: "K".to_owned(),
            published: true,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "title": "T",
                "content": "C",
                "category": "K",
                "image_url": "",
                "published": true
            })
        );
    }

    #[test]
    fn test_serialize_patch_omits_absent_fields() {
        let patch = PostPatch {
            published: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "published": false })
        );
    }

    #[test]
    fn test_patch_from_draft() {
        let draft = PostDraft {
            title: "T".to_owned(),
            content: "C".to_owned(),
            category: "K".to_owned(),
            image_url: String::new(),
            published: false,
            ..Default::default()
        };

        let patch = PostPatch::from(draft);

        assert_eq!(patch.title.as_deref(), Some("T"));
        assert_eq!(patch.excerpt, None);
        assert_eq!(patch.image_url.as_deref(), Some(""));
        assert_eq!(patch.published, Some(false));
    }
}
