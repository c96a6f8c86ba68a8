//! `quill home` and `quill read` command implementations.

use clap::Args;
use quill_app::PostCard;

use crate::context::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the home command.
#[derive(Args)]
pub(crate) struct HomeArgs;

impl HomeArgs {
    /// Execute the home command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let controller = global.reader_controller()?;
        let page = controller.home_page();

        if page.is_empty() {
            output.info("No posts yet.");
            return Ok(());
        }

        if !page.featured.is_empty() {
            output.heading("Featured");
            output.rule();
            for card in &page.featured {
                print_card(&output, card);
            }
        }

        if !page.posts.is_empty() {
            output.heading("All posts");
            output.rule();
            for card in &page.posts {
                print_card(&output, card);
            }
        }

        Ok(())
    }
}

fn print_card(output: &Output, card: &PostCard) {
    output.heading(&card.title);
    output.detail(&format!("{} | {} | {}", card.category, card.date, card.id));
    if let Some(image_url) = &card.image_url {
        output.detail(image_url);
    }
    output.info(&card.excerpt);
    output.info("");
}

/// Arguments for the read command.
#[derive(Args)]
pub(crate) struct ReadArgs {
    /// Post ID.
    id: String,
}

impl ReadArgs {
    /// Execute the read command.
    ///
    /// Metadata goes to stderr, the rendered body to stdout.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let controller = global.reader_controller()?;
        let article = controller.article(&self.id)?;

        output.heading(&article.title);
        output.detail(&format!("{} | {}", article.category, article.date));
        output.document(&article.body_html)?;
        Ok(())
    }
}
