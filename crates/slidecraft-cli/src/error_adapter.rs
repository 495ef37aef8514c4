//! Error adapter for converting SlidecraftError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Deck parse errors
//! carry their source, so they are rendered with a labelled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use slidecraft::SlidecraftError;

const PARSE_HELP: &str = "each [[slides]] table needs a `title` and a `kind` \
     (cover, cardGrid, list, flow, table or stats)";

/// Adapter implementing [`MietteDiagnostic`] for a [`SlidecraftError`].
pub struct ErrorAdapter<'a> {
    err: &'a SlidecraftError,
}

impl<'a> ErrorAdapter<'a> {
    pub fn new(err: &'a SlidecraftError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.err {
            // The snippet is rendered by miette; keep only the message
            SlidecraftError::Parse { err, .. } => write!(f, "{}", err.message()),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            SlidecraftError::Parse { .. } => None,
            other => other.source(),
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            SlidecraftError::Io(_) => "slidecraft::io",
            SlidecraftError::Parse { .. } => "slidecraft::parse",
            SlidecraftError::Config(_) => "slidecraft::config",
            SlidecraftError::Export(_) => "slidecraft::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            SlidecraftError::Parse { .. } => Some(Box::new(PARSE_HELP)),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            SlidecraftError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let SlidecraftError::Parse { err, .. } = self.err else {
            return None;
        };
        let span = err.span()?;

        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            SourceSpan::new(span.start.into(), span.len()),
        ))))
    }
}

#[cfg(test)]
mod tests {
    use slidecraft::{DeckBuilder, config::AppConfig};

    use super::*;

    fn parse_error(source: &str) -> SlidecraftError {
        DeckBuilder::new(AppConfig::default())
            .unwrap()
            .parse(source)
            .unwrap_err()
    }

    #[test]
    fn test_parse_error_has_source_and_label() {
        let err = parse_error("[[slides]]\ntitle = \n");
        let adapter = ErrorAdapter::new(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "slidecraft::parse");
        assert!(adapter.source_code().is_some());
        assert!(adapter.help().is_some());

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_non_parse_error() {
        let err = SlidecraftError::Config("bad color".to_string());
        let adapter = ErrorAdapter::new(&err);

        assert_eq!(adapter.to_string(), "Configuration error: bad color");
        assert_eq!(adapter.code().unwrap().to_string(), "slidecraft::config");
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_renders_without_panicking() {
        let err = parse_error("[[slides]\n");
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter::new(&err))
            .unwrap();
        assert!(out.contains("slidecraft::parse"));
    }
}
