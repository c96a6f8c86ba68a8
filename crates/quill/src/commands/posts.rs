//! `quill posts` subcommand group.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use quill_app::{DashboardRow, PostForm};

use crate::commands::content::read_input;
use crate::context::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Post commands. All of them require a logged-in session.
#[derive(Subcommand)]
pub(crate) enum PostsCommand {
    /// List recent posts, drafts included.
    List(ListArgs),
    /// Create a post.
    Create(CreateArgs),
    /// Edit a post.
    Edit(EditArgs),
    /// Delete a post.
    Delete(DeleteArgs),
}

impl PostsCommand {
    /// Execute the posts subcommand.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(global),
            Self::Create(args) => args.execute(global),
            Self::Edit(args) => args.execute(global),
            Self::Delete(args) => args.execute(global),
        }
    }
}

/// Arguments for the posts list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// List every post instead of only the most recent ones.
    #[arg(long)]
    all: bool,
}

impl ListArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let controller = global.admin_controller()?;
        let dashboard = controller.dashboard();

        let rows = if self.all {
            controller.posts().iter().map(DashboardRow::from).collect()
        } else {
            dashboard.recent
        };

        for row in &rows {
            let status = if row.published { "" } else { " (draft)" };
            output.info(&format!(
                "{}  {}  [{}] {}{status}",
                row.id, row.date, row.category, row.title
            ));
        }
        output.detail(&format!(
            "{} of {} posts",
            rows.len(),
            dashboard.total_posts
        ));
        Ok(())
    }
}

/// Post fields shared by create and edit. Omitted fields keep the form value.
#[derive(Args)]
pub(crate) struct PostFields {
    /// Post title.
    #[arg(long)]
    title: Option<String>,

    /// Post content.
    #[arg(long, conflicts_with = "content_file")]
    content: Option<String>,

    /// File with the post content ("-" for stdin).
    #[arg(long)]
    content_file: Option<PathBuf>,

    /// Hand-written excerpt (derived from content when empty).
    #[arg(long)]
    excerpt: Option<String>,

    /// Category name.
    #[arg(long)]
    category: Option<String>,

    /// Featured image URL.
    #[arg(long)]
    image_url: Option<String>,

    /// Save as draft.
    #[arg(long, conflicts_with = "publish")]
    draft: bool,

    /// Publish the post.
    #[arg(long)]
    publish: bool,
}

impl PostFields {
    fn apply(self, form: &mut PostForm) -> Result<(), CliError> {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(content) = self.content {
            form.content = content;
        } else if let Some(path) = self.content_file {
            form.content = read_input(Some(&path))?;
        }
        if let Some(excerpt) = self.excerpt {
            form.excerpt = excerpt;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        if self.draft {
            form.published = false;
        }
        if self.publish {
            form.published = true;
        }
        Ok(())
    }
}

/// Arguments for the posts create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    fields: PostFields,
}

impl CreateArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.admin_controller()?;

        controller.reset_post_form();
        self.fields.apply(controller.post_form_mut())?;
        let post = controller.submit_post()?;

        output.success(&format!("Created post {}: {}", post.id, post.title));
        if !post.published {
            output.warning("Saved as draft");
        }
        Ok(())
    }
}

/// Arguments for the posts edit command.
#[derive(Args)]
pub(crate) struct EditArgs {
    /// Post ID.
    id: String,

    #[command(flatten)]
    fields: PostFields,
}

impl EditArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.admin_controller()?;

        controller.edit_post(&self.id)?;
        self.fields.apply(controller.post_form_mut())?;
        let post = controller.submit_post()?;

        output.success(&format!("Updated post {}: {}", post.id, post.title));
        Ok(())
    }
}

/// Arguments for the posts delete command.
#[derive(Args)]
pub(crate) struct DeleteArgs {
    /// Post ID.
    id: String,

    /// Delete without asking for confirmation.
    #[arg(short, long)]
    yes: bool,
}

impl DeleteArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.admin_controller()?;

        let title = controller
            .posts()
            .iter()
            .find(|p| p.id == self.id)
            .map_or_else(|| self.id.clone(), |p| p.title.clone());

        if !self.yes && !output.confirm(&format!("Delete post \"{title}\"?"))? {
            output.info("Cancelled");
            return Ok(());
        }

        controller.delete_post(&self.id)?;
        output.success(&format!("Deleted post {}", self.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields() -> PostFields {
        PostFields {
            title: None,
            content: None,
            content_file: None,
            excerpt: None,
            category: None,
            image_url: None,
            draft: false,
            publish: false,
        }
    }

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let mut form = PostForm {
            title: "Old".to_owned(),
            content: "Body".to_owned(),
            category: "Travel".to_owned(),
            ..Default::default()
        };

        PostFields {
            title: Some("New".to_owned()),
            draft: true,
            ..fields()
        }
        .apply(&mut form)
        .unwrap();

        assert_eq!(form.title, "New");
        assert_eq!(form.content, "Body");
        assert_eq!(form.category, "Travel");
        assert!(!form.published);
    }

    #[test]
    fn test_apply_reads_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.html");
        std::fs::write(&path, "[html]<hr>[/html]").unwrap();
        let mut form = PostForm::default();

        PostFields {
            content_file: Some(path),
            ..fields()
        }
        .apply(&mut form)
        .unwrap();

        assert_eq!(form.content, "[html]<hr>[/html]");
        assert!(form.published);
    }
}
