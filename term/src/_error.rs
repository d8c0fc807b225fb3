use crate::{QuadPosition, TermKind};
use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when the creation of a term fails.
#[derive(Debug, Error)]
pub enum TermError {
    /// The IRI of a named node must be absolute (start with a scheme).
    #[error("The given IRI '{0}' is not absolute")]
    InvalidIri(String),
    /// Blank node identifiers must comply with Turtle's
    /// [production rules](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    #[error(
        "The identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL"
    )]
    InvalidBlankNodeId(String),
    /// The language tags of literals must be well-formed according to
    /// [BCP47](https://tools.ietf.org/html/bcp47).
    #[error("The given language tag '{0}' is not well-formed according to BCP47")]
    InvalidLanguageTag(String),
    /// Raised when a literal is built with an inconsistent combination
    /// of language tag and datatype.
    #[error("Inconsistent literal: {0}")]
    InvalidLiteral(String),
    /// Raised when trying to switch a literal to a datatype that requires
    /// more than a datatype change (`rdf:langString` needs a language tag,
    /// and is reached through `with_language_tag` instead).
    #[error("The datatype '{0}' can not be set directly on a literal")]
    InvalidDatatypeTransition(String),
    /// Raised when a term of an unsupported kind is placed in a quad position.
    #[error("The {position} of a quad can not be a {kind:?}")]
    UnexpectedKind {
        /// The quad position that rejected the term.
        position: QuadPosition,
        /// The kind of the rejected term.
        kind: TermKind,
    },
}
