//! I define the [`NamedNode`] wrapper type,
//! which guarantees that the underlying `str` is an absolute IRI,
//! i.e. that it starts with a scheme as defined by
//! [RFC 3987](https://tools.ietf.org/html/rfc3987).
use crate::{Result, TermError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The `scheme ":"` prefix of an absolute IRI:
    ///
    /// `scheme ::= ALPHA ( ALPHA | DIGIT | '+' | '-' | '.' )*`
    ///
    /// Full RFC 3987 validation is out of scope;
    /// checking for a scheme is what rules out relative references.
    static ref IRI_SCHEME: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z] [A-Za-z0-9+.\-]* :
    ").unwrap();
}

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).
///
/// Two named nodes are equal if and only if their IRIs are equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct NamedNode(Box<str>);

impl NamedNode {
    /// Build a new named node, checking that `iri` is absolute.
    pub fn new(iri: impl Into<Box<str>>) -> Result<Self> {
        let iri = iri.into();
        if IRI_SCHEME.is_match(&iri) {
            Ok(NamedNode(iri))
        } else {
            Err(TermError::InvalidIri(iri.into()))
        }
    }

    /// Build a new named node without checking that `iri` is valid.
    pub fn new_unchecked(iri: impl Into<Box<str>>) -> Self {
        NamedNode(iri.into())
    }

    /// The IRI of this named node.
    pub fn iri(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether `iri` has the shape of an absolute IRI.
pub(crate) fn is_absolute_iri(iri: &str) -> bool {
    IRI_SCHEME.is_match(iri)
}
