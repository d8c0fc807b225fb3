//! This crate is part of [Quadset],
//! an in-memory [RDF] quad dataset engine in Rust.
//!
//! It provides the term model:
//! immutable value types for the five kinds of RDF terms
//! (named nodes, blank nodes, literals, the default graph,
//! and nested quads as per [RDF-star]),
//! together with the [`Quad`] type and its positional constraints.
//!
//! Equality of terms is always structural;
//! two terms are interchangeable if and only if they compare equal,
//! and hashing is consistent with equality.
//!
//! [Quadset]: https://github.com/quadset/quadset
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [RDF-star]: https://www.w3.org/2021/12/rdf-star.html

#![deny(missing_docs)]

mod _display;
mod _error;
pub use self::_error::*;
mod _term;
pub use self::_term::*;

pub mod blank_node;
pub mod language_tag;
pub mod literal;
pub mod named_node;
pub mod ns;
pub mod quad;

pub use self::blank_node::BlankNode;
pub use self::language_tag::LanguageTag;
pub use self::literal::Literal;
pub use self::named_node::NamedNode;
pub use self::quad::{Quad, QuadPosition};
