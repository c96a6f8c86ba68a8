//! View controller for the Quill blog front end.
//!
//! [`BlogController`] ties the REST client, the persisted session and the
//! content renderer together. It keeps the last fetched posts and
//! categories and derives display-ready projections from them:
//!
//! - [`HomePage`]: featured and regular [`PostCard`]s with excerpts
//! - [`Dashboard`]: recent posts, categories and the editor mode
//! - [`Article`]: one post with its body rendered to HTML
//!
//! # Example
//!
//! ```no_run
//! use quill_api::ApiClient;
//! use quill_app::{BlogController, Session};
//! use quill_config::DisplayConfig;
//! use quill_session::FileTokenStore;
//!
//! let session = Session::new(Box::new(FileTokenStore::new(".quill/token".into())));
//! let mut controller = BlogController::new(
//!     ApiClient::new("http://localhost:8001"),
//!     session,
//!     DisplayConfig::default(),
//! );
//! controller.start();
//!
//! for card in controller.home_page().featured {
//!     println!("{} ({})", card.title, card.date);
//! }
//! ```

mod controller;
mod error;
mod forms;
mod session;
mod view;

pub use controller::BlogController;
pub use error::AppError;
pub use forms::{CategoryForm, LoginForm, PostForm};
pub use session::Session;
pub use view::{
    Article, Dashboard, DashboardRow, FormMode, HomePage, PostCard, View, format_date,
};
