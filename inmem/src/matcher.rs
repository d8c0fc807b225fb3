//! I define *matchers*: match specifications that select quads in a
//! [`Dataset`](crate::Dataset).
//!
//! A [`TermSelector`] constrains one quad position
//! (wildcard, exact term, or test function);
//! a [`QuadTemplate`] binds zero to four positions;
//! a [`QuadFilter`] is the tagged variant accepted by all filtering
//! operations, convertible from a bare quad, a sequence of quads,
//! a template, or a test function.
//!
//! Test functions must not mutate the dataset they are evaluated
//! against; the `&Dataset` they receive makes that a compile-time
//! guarantee. A failure (panic) inside a test function propagates
//! unmodified to the caller of the matching operation.
use crate::dataset::Dataset;
use quadset_term::{BlankNode, Literal, NamedNode, Quad, Term};

/// The type of test functions usable as a single-position selector.
pub type TermTest = Box<dyn Fn(&Term, &Quad, &Dataset) -> bool>;

/// The type of test functions usable as a whole-quad filter.
pub type QuadTest = Box<dyn Fn(&Quad, &Dataset) -> bool>;

/// A match specification for one quad position.
pub enum TermSelector {
    /// Matches any term.
    Any,
    /// Matches terms structurally equal to the given one.
    Exact(Term),
    /// Matches terms satisfying the function,
    /// which receives the term, the quad it belongs to,
    /// and the dataset being matched.
    Test(TermTest),
}

impl TermSelector {
    /// Build a [`TermSelector::Test`] from a closure.
    pub fn test<F>(f: F) -> Self
    where
        F: Fn(&Term, &Quad, &Dataset) -> bool + 'static,
    {
        TermSelector::Test(Box::new(f))
    }

    /// Check whether this selector matches `term`.
    pub fn matches(&self, term: &Term, quad: &Quad, dataset: &Dataset) -> bool {
        match self {
            TermSelector::Any => true,
            TermSelector::Exact(t) => t == term,
            TermSelector::Test(f) => f(term, quad, dataset),
        }
    }

    /// Return the single term this selector can match, if it is exact.
    ///
    /// Exact selectors are the only ones that can drive an index probe.
    pub fn constant(&self) -> Option<&Term> {
        match self {
            TermSelector::Exact(t) => Some(t),
            _ => None,
        }
    }
}

impl Default for TermSelector {
    fn default() -> Self {
        TermSelector::Any
    }
}

impl std::fmt::Debug for TermSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermSelector::Any => f.write_str("Any"),
            TermSelector::Exact(t) => f.debug_tuple("Exact").field(t).finish(),
            TermSelector::Test(_) => f.write_str("Test(..)"),
        }
    }
}

impl From<Term> for TermSelector {
    fn from(other: Term) -> TermSelector {
        TermSelector::Exact(other)
    }
}

impl From<NamedNode> for TermSelector {
    fn from(other: NamedNode) -> TermSelector {
        TermSelector::Exact(other.into())
    }
}

impl From<BlankNode> for TermSelector {
    fn from(other: BlankNode) -> TermSelector {
        TermSelector::Exact(other.into())
    }
}

impl From<Literal> for TermSelector {
    fn from(other: Literal) -> TermSelector {
        TermSelector::Exact(other.into())
    }
}

impl From<Quad> for TermSelector {
    fn from(other: Quad) -> TermSelector {
        TermSelector::Exact(other.into())
    }
}

/// A partial-quad match specification, one [`TermSelector`] per position.
///
/// An empty template (the default) matches every quad.
#[derive(Debug, Default)]
pub struct QuadTemplate {
    s: TermSelector,
    p: TermSelector,
    o: TermSelector,
    g: TermSelector,
}

impl QuadTemplate {
    /// Build a template matching every quad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the subject position.
    pub fn with_subject(mut self, s: impl Into<TermSelector>) -> Self {
        self.s = s.into();
        self
    }

    /// Constrain the predicate position.
    pub fn with_predicate(mut self, p: impl Into<TermSelector>) -> Self {
        self.p = p.into();
        self
    }

    /// Constrain the object position.
    pub fn with_object(mut self, o: impl Into<TermSelector>) -> Self {
        self.o = o.into();
        self
    }

    /// Constrain the graph name position.
    pub fn with_graph(mut self, g: impl Into<TermSelector>) -> Self {
        self.g = g.into();
        self
    }

    /// Check whether `quad` matches this template.
    ///
    /// Positions are evaluated in subject, predicate, object, graph
    /// order, short-circuiting on the first failing position.
    pub fn matches(&self, quad: &Quad, dataset: &Dataset) -> bool {
        self.s.matches(quad.s(), quad, dataset)
            && self.p.matches(quad.p(), quad, dataset)
            && self.o.matches(quad.o(), quad, dataset)
            && self.g.matches(quad.g(), quad, dataset)
    }

    /// The exact-bound terms per position, in s/p/o/g order.
    pub(crate) fn constants(&self) -> [Option<&Term>; 4] {
        [
            self.s.constant(),
            self.p.constant(),
            self.o.constant(),
            self.g.constant(),
        ]
    }
}

impl From<&Quad> for QuadTemplate {
    /// A bare quad is equivalent to a template with all four positions
    /// exact-bound to that quad's terms.
    fn from(other: &Quad) -> QuadTemplate {
        QuadTemplate::new()
            .with_subject(other.s().clone())
            .with_predicate(other.p().clone())
            .with_object(other.o().clone())
            .with_graph(other.g().clone())
    }
}

/// A match specification for whole quads,
/// accepted by all filtering operations of [`Dataset`].
pub enum QuadFilter {
    /// Matches quads structurally equal to any of the given ones.
    Quads(Vec<Quad>),
    /// Matches quads matching the template.
    Template(QuadTemplate),
    /// Matches quads satisfying the function (evaluated as a full scan).
    Test(QuadTest),
}

impl QuadFilter {
    /// Build a filter matching every quad.
    pub fn any() -> Self {
        QuadFilter::Template(QuadTemplate::new())
    }

    /// Build a [`QuadFilter::Test`] from a closure.
    pub fn test<F>(f: F) -> Self
    where
        F: Fn(&Quad, &Dataset) -> bool + 'static,
    {
        QuadFilter::Test(Box::new(f))
    }

    /// Check whether `quad` matches this filter.
    pub fn matches(&self, quad: &Quad, dataset: &Dataset) -> bool {
        match self {
            QuadFilter::Quads(quads) => quads.contains(quad),
            QuadFilter::Template(template) => template.matches(quad, dataset),
            QuadFilter::Test(f) => f(quad, dataset),
        }
    }
}

impl std::fmt::Debug for QuadFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadFilter::Quads(quads) => f.debug_tuple("Quads").field(quads).finish(),
            QuadFilter::Template(template) => {
                f.debug_tuple("Template").field(template).finish()
            }
            QuadFilter::Test(_) => f.write_str("Test(..)"),
        }
    }
}

impl From<Quad> for QuadFilter {
    fn from(other: Quad) -> QuadFilter {
        QuadFilter::Quads(vec![other])
    }
}

impl From<&Quad> for QuadFilter {
    fn from(other: &Quad) -> QuadFilter {
        QuadFilter::Quads(vec![other.clone()])
    }
}

impl From<Vec<Quad>> for QuadFilter {
    fn from(other: Vec<Quad>) -> QuadFilter {
        QuadFilter::Quads(other)
    }
}

impl<const N: usize> From<[Quad; N]> for QuadFilter {
    fn from(other: [Quad; N]) -> QuadFilter {
        QuadFilter::Quads(other.into())
    }
}

impl From<QuadTemplate> for QuadFilter {
    fn from(other: QuadTemplate) -> QuadFilter {
        QuadFilter::Template(other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quadset_term::{Literal, NamedNode, Term};

    fn nn(iri: &str) -> Term {
        NamedNode::new_unchecked(iri).into()
    }

    fn quad(s: &str, o: &str) -> Quad {
        Quad::triple(nn(s), nn("tag:p"), Literal::string(o).into()).unwrap()
    }

    #[test]
    fn selector_any() {
        let d = Dataset::new();
        let q = quad("tag:s", "o");
        assert!(TermSelector::Any.matches(q.s(), &q, &d));
        assert!(TermSelector::Any.matches(&Term::DefaultGraph, &q, &d));
        assert_eq!(TermSelector::Any.constant(), None);
    }

    #[test]
    fn selector_exact_is_structural() {
        let d = Dataset::new();
        let q = quad("tag:s", "o");
        let sel = TermSelector::from(NamedNode::new_unchecked("tag:s"));
        assert!(sel.matches(q.s(), &q, &d));
        assert!(!sel.matches(q.o(), &q, &d));
        assert_eq!(sel.constant(), Some(&nn("tag:s")));
    }

    #[test]
    fn selector_test_sees_term_and_quad() {
        let d = Dataset::new();
        let q = quad("tag:s", "o");
        let sel = TermSelector::test(|t, q, _| t.is_literal() && q.s() == &nn("tag:s"));
        assert!(sel.matches(q.o(), &q, &d));
        assert!(!sel.matches(q.s(), &q, &d));
        assert_eq!(sel.constant(), None);
    }

    #[test]
    fn template_short_circuits_in_position_order() {
        use std::cell::Cell;
        use std::rc::Rc;

        let d = Dataset::new();
        let q = quad("tag:s", "o");
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let template = QuadTemplate::new()
            .with_subject(nn("tag:not-s"))
            .with_object(TermSelector::test(move |_, _, _| {
                h.set(h.get() + 1);
                true
            }));
        assert!(!template.matches(&q, &d));
        // the subject failed first, so the object test never ran
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn template_from_quad_is_all_exact() {
        let d = Dataset::new();
        let q = quad("tag:s", "o");
        let template = QuadTemplate::from(&q);
        assert!(template.matches(&q, &d));
        assert!(!template.matches(&quad("tag:s", "other"), &d));
        assert!(template.constants().iter().all(Option::is_some));
    }

    #[test]
    fn filter_conversions() {
        let d = Dataset::new();
        let q1 = quad("tag:s1", "a");
        let q2 = quad("tag:s2", "b");

        let f = QuadFilter::from(q1.clone());
        assert!(f.matches(&q1, &d));
        assert!(!f.matches(&q2, &d));

        let f = QuadFilter::from([q1.clone(), q2.clone()]);
        assert!(f.matches(&q1, &d) && f.matches(&q2, &d));

        let f = QuadFilter::any();
        assert!(f.matches(&q1, &d) && f.matches(&q2, &d));

        let f = QuadFilter::test(|q, _| q.s() == &nn("tag:s2"));
        assert!(!f.matches(&q1, &d));
        assert!(f.matches(&q2, &d));
    }
}
