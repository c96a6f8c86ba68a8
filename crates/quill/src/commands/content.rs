//! `quill render` and `quill excerpt` command implementations.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use quill_renderer::{excerpt, render};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Post content file ("-" or omitted for stdin).
    file: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let content = read_input(self.file.as_deref())?;
        Output::new().document(&render(&content))?;
        Ok(())
    }
}

/// Arguments for the excerpt command.
#[derive(Args)]
pub(crate) struct ExcerptArgs {
    /// Post content file ("-" or omitted for stdin).
    file: Option<PathBuf>,

    /// Maximum excerpt length in characters.
    #[arg(short, long, default_value_t = 150)]
    length: usize,
}

impl ExcerptArgs {
    /// Execute the excerpt command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        if self.length == 0 {
            return Err(CliError::Validation(
                "excerpt length must be greater than 0".to_owned(),
            ));
        }
        let content = read_input(self.file.as_deref())?;
        Output::new().document(&excerpt(&content, self.length))?;
        Ok(())
    }
}

/// Read post content from a file, or from stdin for `None` and `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
