//! Shared command context: global flags, configuration and controller setup.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use quill_api::ApiClient;
use quill_app::{AppError, BlogController, Session, View};
use quill_config::{CliSettings, Config};
use quill_session::FileTokenStore;

use crate::error::CliError;

/// Flags accepted by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config).
    #[arg(long, global = true, env = "QUILL_API_URL")]
    api_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            api_url: self.api_url.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!("Loaded configuration from {}", path.display());
        }
        Ok(config)
    }

    /// Build a controller against the configured backend and run its
    /// initial load. Fetch failures are logged and leave the lists empty.
    pub(crate) fn controller(&self) -> Result<BlogController<ApiClient>, CliError> {
        let mut controller = self.build_controller()?;
        controller.start();
        Ok(controller)
    }

    /// Controller for commands that display fetched content. Fails when
    /// posts or categories cannot be fetched.
    pub(crate) fn reader_controller(&self) -> Result<BlogController<ApiClient>, CliError> {
        let mut controller = self.build_controller()?;
        controller.try_start()?;
        Ok(controller)
    }

    /// Controller with the dashboard open. Fails without a valid session or
    /// when the backend cannot be reached.
    pub(crate) fn admin_controller(&self) -> Result<BlogController<ApiClient>, CliError> {
        let mut controller = self.reader_controller()?;
        controller.navigate(View::Admin);
        if controller.current_view() != View::Admin {
            return Err(AppError::NotAuthenticated.into());
        }
        Ok(controller)
    }

    fn build_controller(&self) -> Result<BlogController<ApiClient>, CliError> {
        let config = self.load_config()?;
        let client = ApiClient::with_timeout(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        );
        let store = FileTokenStore::new(config.session_resolved.token_file.clone());
        let session = Session::new(Box::new(store));

        Ok(BlogController::new(client, session, config.display))
    }
}
