//! Error types for path data, viewBox and configuration parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::path::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Invalid character in path data at {span:?}")]
    InvalidToken { span: Span },

    #[error("Path data error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("Path data must begin with a moveto command (found {span:?})")]
    MissingMoveTo { span: Span },
}

impl PathError {
    pub fn span(&self) -> Span {
        match self {
            PathError::InvalidToken { span }
            | PathError::Syntax { span, .. }
            | PathError::MissingMoveTo { span } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span();
        let (message, detail) = match self {
            PathError::InvalidToken { .. } => (
                "Invalid character in path data".to_string(),
                "not a command letter or number".to_string(),
            ),
            PathError::Syntax {
                message, expected, ..
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (message.clone(), format!("{}{}", message, expected_str))
            }
            PathError::MissingMoveTo { .. } => (
                "Path data must begin with a moveto".to_string(),
                "expected 'M' or 'm' here".to_string(),
            ),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(detail)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for PathError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        PathError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Command(c) => format!("command '{}'", c),
        Token::Number(n) => format!("number {}", n),
    }
}

/// Errors from parsing a textual viewBox
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewBoxError {
    #[error("viewBox needs 4 numbers, found {0}")]
    Arity(usize),
    #[error("viewBox component '{0}' is not a number")]
    NotANumber(String),
}

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessor() {
        let err = PathError::MissingMoveTo { span: 3..5 };
        assert_eq!(err.span(), 3..5);
    }

    #[test]
    fn test_format_includes_message_and_filename() {
        let source = "M0 0 L5 5 ?";
        let err = PathError::InvalidToken { span: 10..11 };
        let report = err.format(source, "tv.path");
        assert!(report.contains("Invalid character in path data"));
        assert!(report.contains("tv.path"));
    }

    #[test]
    fn test_display() {
        let err = ViewBoxError::Arity(3);
        assert_eq!(err.to_string(), "viewBox needs 4 numbers, found 3");
    }
}
