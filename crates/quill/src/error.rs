//! CLI error types.

use quill_app::AppError;
use quill_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Validation(String),
}

impl CliError {
    /// Message shown to the user. Backend errors carrying a `detail` field
    /// show that text instead of the raw response body.
    pub(crate) fn message(&self) -> String {
        if let Self::App(AppError::Api(err)) = self
            && let (Some(detail), Some(status)) = (err.detail(), err.status())
        {
            return format!("{detail} (HTTP {status})");
        }
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_api::ApiError;

    use super::*;

    fn backend_error(status: u16, body: &str) -> CliError {
        AppError::Api(ApiError::HttpResponse {
            status,
            body: body.to_owned(),
        })
        .into()
    }

    #[test]
    fn test_message_uses_server_detail() {
        let err = backend_error(400, r#"{"detail":"Category already exists"}"#);
        assert_eq!(err.message(), "Category already exists (HTTP 400)");
    }

    #[test]
    fn test_message_falls_back_to_body() {
        let err = backend_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), "HTTP error: 502 - <html>Bad Gateway</html>");
    }

    #[test]
    fn test_message_for_other_errors() {
        let err = CliError::Validation("title is required".to_owned());
        assert_eq!(err.message(), "title is required");
    }
}
