use thiserror::Error;

/// Conditions that prevent a compilation unit from being extracted at all.
///
/// Everything else (a visitor tripping over an unexpected node shape, an
/// unresolved symbol) is absorbed by the visitor engine and only surfaces as a
/// logged warning.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("source content is empty")]
    EmptyContent,

    #[error("source contains syntax errors: {0}")]
    SyntaxErrors(String),

    #[error("no grammar available for {0}")]
    UnsupportedLanguage(String),

    #[error("grammar error: {0}")]
    Grammar(String),

    #[error("parser produced no tree")]
    ParseFailed,
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Failure of one visitor on one syntax node. Never fatal.
#[derive(Debug, Error)]
pub enum VisitError {
    #[error("expected {expected} node but found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: String,
    },

    #[error("{node} has no {child}")]
    MissingChild {
        node: String,
        child: &'static str,
    },

    #[error("{0}")]
    Message(String),
}

impl VisitError {
    pub fn unexpected(expected: &'static str, found: &str) -> Self {
        VisitError::UnexpectedNode {
            expected,
            found: found.to_string(),
        }
    }

    pub fn missing(node: &str, child: &'static str) -> Self {
        VisitError::MissingChild {
            node: node.to_string(),
            child,
        }
    }
}

pub type VisitResult = std::result::Result<(), VisitError>;
