// this module is transparently re-exported by the crate root

use crate::blank_node::BlankNode;
use crate::literal::Literal;
use crate::named_node::NamedNode;
use crate::quad::Quad;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// The [default graph](https://www.w3.org/TR/rdf11-concepts/#section-dataset) name
    DefaultGraph,
    /// An RDF-star [quoted quad](https://www.w3.org/2021/12/rdf-star.html#dfn-quoted)
    Quad,
}

/// A straightforward implementation of an RDF term as an enum.
///
/// Terms are immutable value objects:
/// equality, ordering and hashing are structural
/// (kind plus fields, recursively for nested quads),
/// never based on identity.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum Term {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode(NamedNode),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BlankNode),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
    /// The name of the [default graph](https://www.w3.org/TR/rdf11-concepts/#section-dataset)
    DefaultGraph,
    /// A quad used as a term, enabling RDF-star nesting
    Quad(Box<Quad>),
}

impl Term {
    /// Return the kind of RDF term that this [`Term`] represents.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::DefaultGraph => TermKind::DefaultGraph,
            Term::Quad(_) => TermKind::Quad,
        }
    }

    /// Return true if this term is a named node.
    #[inline]
    pub fn is_named_node(&self) -> bool {
        self.kind() == TermKind::NamedNode
    }

    /// Return true if this term is a blank node.
    #[inline]
    pub fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this term is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Return true if this term is the default graph name.
    #[inline]
    pub fn is_default_graph(&self) -> bool {
        self.kind() == TermKind::DefaultGraph
    }

    /// Return true if this term is a nested quad.
    #[inline]
    pub fn is_quad(&self) -> bool {
        self.kind() == TermKind::Quad
    }

    /// Borrow the underlying [`NamedNode`], if any.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow the underlying [`BlankNode`], if any.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the underlying [`Literal`], if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Borrow the underlying [`Quad`], if any.
    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(q) => Some(q),
            _ => None,
        }
    }
}

impl From<NamedNode> for Term {
    fn from(other: NamedNode) -> Term {
        Term::NamedNode(other)
    }
}

impl From<BlankNode> for Term {
    fn from(other: BlankNode) -> Term {
        Term::BlankNode(other)
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Term {
        Term::Literal(other)
    }
}

impl From<Quad> for Term {
    fn from(other: Quad) -> Term {
        Term::Quad(Box::new(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(t: &Term) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn structural_equality() {
        let t1: Term = NamedNode::new("tag:a").unwrap().into();
        let t2: Term = NamedNode::new("tag:a").unwrap().into();
        let t3: Term = NamedNode::new("tag:b").unwrap().into();
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
        assert_eq!(hash_of(&t1), hash_of(&t2));
    }

    #[test]
    fn kind_does_not_cross_equal() {
        let iri: Term = NamedNode::new("tag:a").unwrap().into();
        let bnode: Term = BlankNode::new("a").unwrap().into();
        assert_ne!(iri, bnode);
        assert_eq!(iri.kind(), TermKind::NamedNode);
        assert_eq!(bnode.kind(), TermKind::BlankNode);
    }

    #[test]
    fn nested_quad_equality_is_recursive() {
        let s = || Term::from(BlankNode::new("s").unwrap());
        let p = || Term::from(NamedNode::new("tag:p").unwrap());
        let o1 = || Term::from(Literal::string("o"));
        let o2 = || Term::from(Literal::string("other"));
        let q1 = Quad::new(s(), p(), o1(), Term::DefaultGraph).unwrap();
        let q2 = Quad::new(s(), p(), o1(), Term::DefaultGraph).unwrap();
        let q3 = Quad::new(s(), p(), o2(), Term::DefaultGraph).unwrap();
        assert_eq!(Term::from(q1.clone()), Term::from(q2));
        assert_ne!(Term::from(q1), Term::from(q3));
    }

    #[test]
    fn accessors_match_kind() {
        let t: Term = Literal::from(42i64).into();
        assert!(t.is_literal());
        assert!(t.as_literal().is_some());
        assert!(t.as_named_node().is_none());
        assert!(t.as_blank_node().is_none());
        assert!(t.as_quad().is_none());
        assert!(!Term::DefaultGraph.is_literal());
        assert!(Term::DefaultGraph.is_default_graph());
    }
}
