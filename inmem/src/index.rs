//! A [`TermIndex`] is a reference-counted, bidirectional association of
//! [terms](Term) with short numeric [indices](Index).
use quadset_term::Term;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Abstraction of the short numeric indices representing [terms](Term) in a
/// [`TermIndex`].
///
/// `Hash` is required because id-quads are kept in hash-based sets
/// alongside the ordered ones.
pub trait Index: Copy + std::fmt::Debug + std::hash::Hash + Ord {
    /// The smallest index value.
    const ZERO: Self;
    /// The largest index value.
    const MAX: Self;
    /// Convert from a `usize`.
    ///
    /// # Panics
    /// If `other` overflows this index type.
    fn from_usize(other: usize) -> Self;
    /// Convert to a `usize`.
    fn into_usize(self) -> usize;
}

macro_rules! impl_index {
    ($typ:ty) => {
        impl Index for $typ {
            const ZERO: Self = 0;
            const MAX: Self = <$typ>::MAX;
            fn from_usize(other: usize) -> Self {
                other.try_into().unwrap_or_else(|_| {
                    panic!("{} overflows {}", other, stringify!($typ))
                })
            }
            fn into_usize(self) -> usize {
                self as usize
            }
        }
    };
}

impl_index!(usize);
impl_index!(u32);
impl_index!(u16);

//

/// A reference-counted term interner.
///
/// Equal terms share a single index, giving O(1) average-case equality and
/// hashing to everything keyed by indices.
/// Each index carries a reference count;
/// [`release`](TermIndex::release) retires an index when its count reaches
/// zero, and retired slots are reused by later
/// [`ensure_index`](TermIndex::ensure_index) calls.
#[derive(Clone, Debug)]
pub struct TermIndex<I: Index> {
    t2i: HashMap<Term, I>,
    i2t: Vec<Option<Term>>,
    counts: Vec<usize>,
    free: Vec<I>,
}

impl<I: Index> TermIndex<I> {
    /// Build an empty term index.
    pub fn new() -> Self {
        TermIndex {
            t2i: HashMap::new(),
            i2t: vec![],
            counts: vec![],
            free: vec![],
        }
    }

    /// The number of live (non-retired) terms.
    pub fn len(&self) -> usize {
        self.t2i.len()
    }

    /// Whether this term index holds no live term.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    ///
    /// The reference count is left untouched.
    pub fn get_index(&self, t: &Term) -> Option<I> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`,
    /// adding it to the term index if necessary,
    /// and increment its reference count.
    pub fn ensure_index(&mut self, t: &Term) -> I {
        match self.t2i.entry(t.clone()) {
            Entry::Vacant(e) => {
                let t = e.key().clone();
                let i = match self.free.pop() {
                    Some(i) => {
                        self.i2t[i.into_usize()] = Some(t);
                        self.counts[i.into_usize()] = 1;
                        i
                    }
                    None => {
                        let i = I::from_usize(self.i2t.len());
                        self.i2t.push(Some(t));
                        self.counts.push(1);
                        i
                    }
                };
                e.insert(i);
                i
            }
            Entry::Occupied(e) => {
                let i = *e.get();
                self.counts[i.into_usize()] += 1;
                i
            }
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must be a live index previously returned by
    /// [`get_index`](TermIndex::get_index) or
    /// [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    pub fn get_term(&self, i: I) -> &Term {
        self.i2t[i.into_usize()]
            .as_ref()
            .expect("index points to a retired term")
    }

    /// Decrement the reference count of index `i`,
    /// retiring the term when no reference remains.
    ///
    /// Retired slots are recycled by later calls to
    /// [`ensure_index`](TermIndex::ensure_index).
    ///
    /// # Precondition
    /// Same as [`get_term`](TermIndex::get_term).
    pub fn release(&mut self, i: I) {
        let slot = i.into_usize();
        debug_assert!(self.counts[slot] > 0);
        self.counts[slot] -= 1;
        if self.counts[slot] == 0 {
            let t = self.i2t[slot]
                .take()
                .expect("released index points to a retired term");
            self.t2i.remove(&t);
            self.free.push(i);
        }
    }
}

impl<I: Index> Default for TermIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quadset_term::{Literal, NamedNode};

    fn nn(iri: &str) -> Term {
        NamedNode::new_unchecked(iri).into()
    }

    #[test]
    fn index_round_trips_through_usize() {
        assert_eq!(u16::from_usize(42).into_usize(), 42);
        assert_eq!(u32::from_usize(0), u32::ZERO);
        assert_eq!(usize::from_usize(usize::MAX), usize::MAX);
    }

    #[test]
    #[should_panic]
    fn narrow_index_overflow() {
        u16::from_usize(0x1_0000);
    }

    #[test]
    fn intern_deduplicates() {
        let mut ti = TermIndex::<u32>::new();
        assert!(ti.is_empty());

        let a1 = ti.ensure_index(&nn("tag:a"));
        let b = ti.ensure_index(&nn("tag:b"));
        let a2 = ti.ensure_index(&nn("tag:a"));
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(ti.len(), 2);
        assert_eq!(ti.get_index(&nn("tag:a")), Some(a1));
        assert_eq!(ti.get_index(&nn("tag:c")), None);
        assert_eq!(ti.get_term(a1), &nn("tag:a"));
        assert_eq!(ti.get_term(b), &nn("tag:b"));
    }

    #[test]
    fn release_retires_at_zero() {
        let mut ti = TermIndex::<u32>::new();
        let a = ti.ensure_index(&nn("tag:a"));
        let a2 = ti.ensure_index(&nn("tag:a"));
        assert_eq!(a, a2);

        ti.release(a);
        // one reference left
        assert_eq!(ti.get_index(&nn("tag:a")), Some(a));
        ti.release(a);
        assert_eq!(ti.get_index(&nn("tag:a")), None);
        assert!(ti.is_empty());
    }

    #[test]
    fn retired_slots_are_reused() {
        let mut ti = TermIndex::<u32>::new();
        let a = ti.ensure_index(&nn("tag:a"));
        let _b = ti.ensure_index(&nn("tag:b"));
        ti.release(a);

        let c = ti.ensure_index(&Literal::string("c").into());
        assert_eq!(c, a);
        assert_eq!(ti.len(), 2);
        assert_eq!(ti.get_term(c), &Term::from(Literal::string("c")));
    }

    #[test]
    fn distinct_kinds_get_distinct_indices() {
        let mut ti = TermIndex::<u32>::new();
        let iri = ti.ensure_index(&nn("tag:a"));
        let lit = ti.ensure_index(&Literal::string("tag:a").into());
        let dg = ti.ensure_index(&Term::DefaultGraph);
        assert_ne!(iri, lit);
        assert_ne!(iri, dg);
        assert_eq!(ti.len(), 3);
    }
}
