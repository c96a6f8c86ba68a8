//! CLI command implementations.

mod categories;
mod content;
mod posts;
mod reader;
mod session;

pub(crate) use categories::CategoriesCommand;
pub(crate) use content::{ExcerptArgs, RenderArgs};
pub(crate) use posts::PostsCommand;
pub(crate) use reader::{HomeArgs, ReadArgs};
pub(crate) use session::{LoginArgs, LogoutArgs, WhoamiArgs};
