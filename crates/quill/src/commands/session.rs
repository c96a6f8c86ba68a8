//! `quill login`, `quill logout` and `quill whoami` command implementations.

use clap::Args;
use quill_app::{AppError, View};

use crate::context::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the login command.
#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Admin username.
    #[arg(short, long, env = "QUILL_USERNAME")]
    username: String,

    /// Admin password.
    #[arg(short, long, env = "QUILL_PASSWORD", hide_env_values = true)]
    password: String,
}

impl LoginArgs {
    /// Execute the login command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.controller()?;

        if let Some(current) = controller.session().username() {
            output.warning(&format!("Replacing session of {current}"));
        }

        controller.navigate(View::Login);
        let form = controller.login_form_mut();
        form.username = self.username;
        form.password = self.password;
        controller.login()?;

        let username = controller.session().username().unwrap_or_default();
        output.success(&format!("Logged in as {username}"));
        Ok(())
    }
}

/// Arguments for the logout command.
#[derive(Args)]
pub(crate) struct LogoutArgs;

impl LogoutArgs {
    /// Execute the logout command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let mut controller = global.controller()?;
        let was_authenticated = controller.session().is_authenticated();

        controller.logout()?;

        if was_authenticated {
            output.success("Logged out");
        } else {
            output.warning("Not logged in");
        }
        Ok(())
    }
}

/// Arguments for the whoami command.
#[derive(Args)]
pub(crate) struct WhoamiArgs;

impl WhoamiArgs {
    /// Execute the whoami command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let controller = global.controller()?;

        match controller.session().username() {
            Some(username) => {
                output.info(&format!("Logged in as {username}"));
                Ok(())
            }
            None => Err(AppError::NotAuthenticated.into()),
        }
    }
}
