//! Terminal output for the CLI.
//!
//! Status messages are styled and written to stderr. Documents (rendered
//! HTML, excerpts) are written to stdout unstyled so they can be piped.

use console::{Style, Term};

/// Styled stderr messages plus a plain stdout channel.
pub(crate) struct Output {
    messages: Term,
    documents: Term,
    success: Style,
    warning: Style,
    error: Style,
    detail: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            messages: Term::stderr(),
            documents: Term::stdout(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            detail: Style::new().dim(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn line(&self, style: Option<&Style>, msg: &str) {
        let line = match style {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_owned(),
        };
        // Status output is best effort
        let _ = self.messages.write_line(&line);
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(None, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Some(&self.success), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Some(&self.warning), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Some(&self.error), msg);
    }

    /// Secondary information such as dates and IDs.
    pub(crate) fn detail(&self, msg: &str) {
        self.line(Some(&self.detail), msg);
    }

    /// Section or post title.
    pub(crate) fn heading(&self, msg: &str) {
        self.line(Some(&self.heading), msg);
    }

    pub(crate) fn rule(&self) {
        self.line(Some(&self.detail), &"-".repeat(60));
    }

    /// Write a document to stdout.
    pub(crate) fn document(&self, text: &str) -> std::io::Result<()> {
        self.documents.write_line(text)
    }

    /// Ask a yes/no question on the terminal. Anything but yes means no.
    pub(crate) fn confirm(&self, question: &str) -> std::io::Result<bool> {
        self.messages.write_str(&format!("{question} [y/N] "))?;
        let answer = self.messages.read_line()?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
