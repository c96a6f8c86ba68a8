//! `quill categories` subcommand group.

use clap::{Args, Subcommand};

use crate::context::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Category commands.
#[derive(Subcommand)]
pub(crate) enum CategoriesCommand {
    /// List categories.
    List(ListArgs),
    /// Create a category (requires login).
    Create(CreateArgs),
}

impl CategoriesCommand {
    /// Execute the categories subcommand.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(global),
            Self::Create(args) => args.execute(global),
        }
    }
}

/// Arguments for the categories list command.
#[derive(Args)]
pub(crate) struct ListArgs;

impl ListArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let controller = global.reader_controller()?;

        if controller.categories().is_empty() {
            output.info("No categories.");
        }
        for category in controller.categories() {
            if category.description.is_empty() {
                output.info(&category.name);
            } else {
                output.info(&format!("{}  {}", category.name, category.description));
            }
        }
        Ok(())
    }
}

/// Arguments for the categories create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Category name.
    name: String,

    /// Category description.
    #[arg(short, long, default_value = "")]
    description: String,
}

impl CreateArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.admin_controller()?;

        let form = controller.category_form_mut();
        form.name = self.name;
        form.description = self.description;
        let category = controller.create_category()?;

        output.success(&format!("Created category {}", category.name));
        Ok(())
    }
}
