//! This crate is part of [Quadset],
//! an in-memory [RDF] quad dataset engine in Rust.
//!
//! It provides the [`Dataset`] type:
//! a mutable, insertion-ordered set of [quads](quadset_term::Quad)
//! supporting pattern-based querying ([`matcher`]),
//! bulk transformation, positional access, and set algebra,
//! backed by an interned, four-way indexed [quad store](store).
//!
//! # Concurrency
//!
//! A [`Dataset`] has no internal locking:
//! it is a single-writer structure, and concurrent mutation from several
//! threads requires external synchronization.
//! All operations are synchronous and in-memory; none blocks or performs
//! I/O.
//!
//! [Quadset]: https://github.com/quadset/quadset
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

mod _error;
pub use self::_error::*;

pub mod dataset;
pub mod index;
pub mod matcher;
pub mod store;

mod algebra;

pub use self::dataset::Dataset;
pub use self::matcher::{QuadFilter, QuadTemplate, TermSelector};
