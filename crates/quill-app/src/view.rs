//! View models computed from the fetched posts.
//!
//! Projections hold owned, display-ready strings and are rebuilt from the
//! controller's state on every call.

use chrono::NaiveDateTime;
use quill_api::Post;
use quill_renderer::{render, summary};
use rayon::prelude::*;

/// Top-level screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Public reading view.
    #[default]
    Home,
    /// Admin login screen.
    Login,
    /// Admin dashboard. Only reachable with an authenticated session.
    Admin,
}

/// Format a timestamp the way cards display it, e.g. `January 5, 2024`.
#[must_use]
pub fn format_date(timestamp: NaiveDateTime) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Post summary shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub image_url: Option<String>,
    pub excerpt: String,
}

impl PostCard {
    /// Card for `post` with an excerpt of at most `excerpt_length` characters.
    #[must_use]
    pub fn new(post: &Post, excerpt_length: usize) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            category: post.category.clone(),
            date: format_date(post.created_at),
            image_url: post.image_url.clone(),
            excerpt: summary(post.excerpt.as_deref(), &post.content, excerpt_length),
        }
    }
}

/// Build cards in parallel, preserving order.
pub(crate) fn cards(posts: &[&Post], excerpt_length: usize) -> Vec<PostCard> {
    posts
        .par_iter()
        .map(|post| PostCard::new(post, excerpt_length))
        .collect()
}

/// Public home page: a featured row followed by the remaining posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePage {
    pub featured: Vec<PostCard>,
    pub posts: Vec<PostCard>,
}

impl HomePage {
    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.posts.is_empty()
    }
}

/// Row in the dashboard's recent posts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub published: bool,
}

impl From<&Post> for DashboardRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            category: post.category.clone(),
            date: format_date(post.created_at),
            published: post.published,
        }
    }
}

/// Whether the post editor creates a new post or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Logged-in user.
    pub username: Option<String>,
    /// Newest posts, drafts included.
    pub recent: Vec<DashboardRow>,
    /// Total number of posts, drafts included.
    pub total_posts: usize,
    /// Category names offered by the post editor.
    pub categories: Vec<String>,
    pub form_mode: FormMode,
}

/// Single post with its rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub image_url: Option<String>,
    /// Body HTML with embed directives resolved.
    pub body_html: String,
}

impl From<&Post> for Article {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            category: post.category.clone(),
            date: format_date(post.created_at),
            image_url: post.image_url.clone(),
            body_html: render(&post.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn post(content: &str, excerpt: Option<&str>) -> Post {
        Post {
            id: "p1".to_owned(),
            title: "Title".to_owned(),
            content: content.to_owned(),
            excerpt: excerpt.map(str::to_owned),
            category: "Travel".to_owned(),
            image_url: None,
            published: true,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(10, 20, 30)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_format_date() {
        let ts = NaiveDate::from_ymd_opt(2023, 11, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(ts), "November 21, 2023");
    }

    #[test]
    fn test_card_derives_excerpt() {
        let card = PostCard::new(&post("<p>Hello <b>world</b></p> [youtube:abc]", None), 150);
        assert_eq!(card.excerpt, "Hello world");
        assert_eq!(card.date, "January 5, 2024");
    }

    #[test]
    fn test_card_prefers_explicit_excerpt() {
        let card = PostCard::new(&post("Long body text", Some("Hand written")), 4);
        assert_eq!(card.excerpt, "Hand written");
    }

    #[test]
    fn test_cards_keep_order() {
        let posts: Vec<Post> = (0..20)
            .map(|i| {
                let mut p = post("Body", None);
                p.id = format!("p{i}");
                p
            })
            .collect();
        let refs: Vec<&Post> = posts.iter().collect();

        let ids: Vec<String> = cards(&refs, 10).into_iter().map(|c| c.id).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("p{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_article_renders_directives() {
        let article = Article::from(&post("Fish & chips [youtube:dQw4w9WgXcQ]", None));
        assert!(article.body_html.starts_with("Fish &amp; chips <div"));
        assert!(
            article
                .body_html
                .contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#)
        );
        assert!(!article.body_html.contains("[youtube:"));
    }
}
