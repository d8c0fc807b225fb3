//! A quad expresses a single fact within a context.
//! Quads are RDF triples augmented with a graph name;
//! they are the individual statements of an RDF dataset.
use crate::{Result, Term, TermError, TermKind};

/// The four positions of a [`Quad`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum QuadPosition {
    /// The subject position.
    Subject,
    /// The predicate position.
    Predicate,
    /// The object position.
    Object,
    /// The graph name position.
    Graph,
}

impl std::fmt::Display for QuadPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            QuadPosition::Subject => "subject",
            QuadPosition::Predicate => "predicate",
            QuadPosition::Object => "object",
            QuadPosition::Graph => "graph name",
        })
    }
}

/// An RDF quad: an ordered `(subject, predicate, object, graph)` tuple.
///
/// Positional constraints are enforced at construction:
/// * subject: named node, blank node, or nested quad;
/// * predicate: named node;
/// * object: named node, blank node, literal, or nested quad;
/// * graph: default graph, named node, or blank node.
///
/// Quads are immutable; the `with_*` methods produce new quad values.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct Quad {
    s: Term,
    p: Term,
    o: Term,
    g: Term,
}

fn check_position(position: QuadPosition, term: &Term) -> Result<()> {
    use TermKind::*;
    let ok = match position {
        QuadPosition::Subject => matches!(term.kind(), NamedNode | BlankNode | Quad),
        QuadPosition::Predicate => matches!(term.kind(), NamedNode),
        QuadPosition::Object => matches!(term.kind(), NamedNode | BlankNode | Literal | Quad),
        QuadPosition::Graph => matches!(term.kind(), DefaultGraph | NamedNode | BlankNode),
    };
    if ok {
        Ok(())
    } else {
        Err(TermError::UnexpectedKind {
            position,
            kind: term.kind(),
        })
    }
}

impl Quad {
    /// Build a new quad, checking the positional constraints.
    pub fn new(s: Term, p: Term, o: Term, g: Term) -> Result<Self> {
        check_position(QuadPosition::Subject, &s)?;
        check_position(QuadPosition::Predicate, &p)?;
        check_position(QuadPosition::Object, &o)?;
        check_position(QuadPosition::Graph, &g)?;
        Ok(Quad { s, p, o, g })
    }

    /// Build a new quad without checking the positional constraints.
    ///
    /// # Precondition
    /// The caller must uphold the constraints listed in the type
    /// documentation; this is intended for callers re-assembling quads
    /// whose components were validated before.
    pub fn new_unchecked(s: Term, p: Term, o: Term, g: Term) -> Self {
        Quad { s, p, o, g }
    }

    /// Build a new quad in the default graph.
    pub fn triple(s: Term, p: Term, o: Term) -> Result<Self> {
        Self::new(s, p, o, Term::DefaultGraph)
    }

    /// The subject of this quad.
    pub fn s(&self) -> &Term {
        &self.s
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &Term {
        &self.p
    }

    /// The object of this quad.
    pub fn o(&self) -> &Term {
        &self.o
    }

    /// The graph name of this quad
    /// ([`Term::DefaultGraph`] for the default graph).
    pub fn g(&self) -> &Term {
        &self.g
    }

    /// The four components of this quad, in s/p/o/g order.
    pub fn spog(&self) -> [&Term; 4] {
        [&self.s, &self.p, &self.o, &self.g]
    }

    /// Return a new quad with the given subject.
    pub fn with_subject(&self, s: Term) -> Result<Self> {
        check_position(QuadPosition::Subject, &s)?;
        Ok(Quad { s, ..self.clone() })
    }

    /// Return a new quad with the given predicate.
    pub fn with_predicate(&self, p: Term) -> Result<Self> {
        check_position(QuadPosition::Predicate, &p)?;
        Ok(Quad { p, ..self.clone() })
    }

    /// Return a new quad with the given object.
    pub fn with_object(&self, o: Term) -> Result<Self> {
        check_position(QuadPosition::Object, &o)?;
        Ok(Quad { o, ..self.clone() })
    }

    /// Return a new quad with the given graph name.
    pub fn with_graph(&self, g: Term) -> Result<Self> {
        check_position(QuadPosition::Graph, &g)?;
        Ok(Quad { g, ..self.clone() })
    }

    /// Turn this quad into a term, enabling RDF-star nesting.
    pub fn into_term(self) -> Term {
        Term::Quad(Box::new(self))
    }
}
