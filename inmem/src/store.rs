//! The [`QuadStore`] maps interned id-quads to quad memberships across four
//! complementary index orderings.
//!
//! RDF queries commonly bind one to three positions;
//! keeping the orderings SPOG, POSG, OSPG and GSPO lets any such query
//! start from a prefix range of one of them instead of a full scan.
use crate::index::{Index, TermIndex};
use indexmap::IndexSet;
use log::trace;
use quadset_term::{Quad, Term};
use std::collections::BTreeSet;

/// A quad of term indices, in subject/predicate/object/graph order.
pub type IdQuad<I> = [I; 4];

/// For each ordering, `stored[k] = spog[PERM[k]]`.
static ORDERINGS: [(&str, [usize; 4]); 4] = [
    ("SPOG", [0, 1, 2, 3]),
    ("POSG", [1, 2, 0, 3]),
    ("OSPG", [2, 0, 1, 3]),
    ("GSPO", [3, 0, 1, 2]),
];

fn rotate<I: Index>(idq: &IdQuad<I>, perm: &[usize; 4]) -> IdQuad<I> {
    [idq[perm[0]], idq[perm[1]], idq[perm[2]], idq[perm[3]]]
}

/// Indexed storage for a set of quads over interned terms.
///
/// The store owns a [`TermIndex`] deduplicating all terms,
/// an insertion-ordered set of id-quads
/// (the iteration order of the dataset),
/// and the four [`ORDERINGS`](self) as sorted sets probed by prefix range.
/// Insertion is idempotent (set semantics).
#[derive(Clone, Debug)]
pub struct QuadStore<I: Index> {
    terms: TermIndex<I>,
    order: IndexSet<IdQuad<I>>,
    spog: BTreeSet<IdQuad<I>>,
    posg: BTreeSet<IdQuad<I>>,
    ospg: BTreeSet<IdQuad<I>>,
    gspo: BTreeSet<IdQuad<I>>,
}

impl<I: Index> QuadStore<I> {
    /// Build an empty quad store.
    pub fn new() -> Self {
        QuadStore {
            terms: TermIndex::new(),
            order: IndexSet::new(),
            spog: BTreeSet::new(),
            posg: BTreeSet::new(),
            ospg: BTreeSet::new(),
            gspo: BTreeSet::new(),
        }
    }

    /// The number of quads in this store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether this store holds no quad.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The number of distinct live terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// The index of term `t`, if it is referenced by any stored quad.
    pub fn term_id(&self, t: &Term) -> Option<I> {
        self.terms.get_index(t)
    }

    /// Insert `quad`, returning `false` if it was already present.
    pub fn insert(&mut self, quad: &Quad) -> bool {
        self.insert_at(self.len(), quad)
    }

    /// Insert `quad` at position `pos` of the iteration order
    /// (quads at `pos` and later shift one position towards the end),
    /// returning `false` if it was already present.
    ///
    /// # Precondition
    /// `pos <= len`.
    pub fn insert_at(&mut self, pos: usize, quad: &Quad) -> bool {
        let idq = [
            self.terms.ensure_index(quad.s()),
            self.terms.ensure_index(quad.p()),
            self.terms.ensure_index(quad.o()),
            self.terms.ensure_index(quad.g()),
        ];
        if !self.order.shift_insert(pos, idq) {
            // already present: roll back the references acquired above
            for i in idq {
                self.terms.release(i);
            }
            return false;
        }
        self.spog.insert(idq);
        self.posg.insert(rotate(&idq, &ORDERINGS[1].1));
        self.ospg.insert(rotate(&idq, &ORDERINGS[2].1));
        self.gspo.insert(rotate(&idq, &ORDERINGS[3].1));
        trace!("inserted {:?} at {}", idq, pos);
        true
    }

    /// Remove `quad`, returning `false` if it was not present.
    ///
    /// The relative iteration order of the remaining quads is preserved.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        let ids = [
            self.terms.get_index(quad.s()),
            self.terms.get_index(quad.p()),
            self.terms.get_index(quad.o()),
            self.terms.get_index(quad.g()),
        ];
        let [Some(s), Some(p), Some(o), Some(g)] = ids else {
            return false;
        };
        self.remove_id(&[s, p, o, g])
    }

    /// Remove the quad at position `pos` of the iteration order,
    /// returning it, or `None` if `pos` is out of range.
    pub fn remove_at(&mut self, pos: usize) -> Option<Quad> {
        let idq = *self.order.get_index(pos)?;
        let quad = self.resolve(&idq);
        self.remove_id(&idq);
        Some(quad)
    }

    fn remove_id(&mut self, idq: &IdQuad<I>) -> bool {
        if !self.order.shift_remove(idq) {
            return false;
        }
        self.spog.remove(idq);
        self.posg.remove(&rotate(idq, &ORDERINGS[1].1));
        self.ospg.remove(&rotate(idq, &ORDERINGS[2].1));
        self.gspo.remove(&rotate(idq, &ORDERINGS[3].1));
        for i in *idq {
            self.terms.release(i);
        }
        trace!("removed {:?}", idq);
        true
    }

    /// Whether `quad` is present in this store.
    pub fn contains(&self, quad: &Quad) -> bool {
        let ids = [
            self.terms.get_index(quad.s()),
            self.terms.get_index(quad.p()),
            self.terms.get_index(quad.o()),
            self.terms.get_index(quad.g()),
        ];
        match ids {
            [Some(s), Some(p), Some(o), Some(g)] => self.order.contains(&[s, p, o, g]),
            _ => false,
        }
    }

    /// The id-quad at position `pos` of the iteration order, if any.
    pub fn get_at(&self, pos: usize) -> Option<&IdQuad<I>> {
        self.order.get_index(pos)
    }

    /// The position of `idq` in the iteration order, if present.
    pub fn position_of(&self, idq: &IdQuad<I>) -> Option<usize> {
        self.order.get_index_of(idq)
    }

    /// The position of `quad` in the iteration order, if present.
    pub fn position(&self, quad: &Quad) -> Option<usize> {
        let idq = [
            self.terms.get_index(quad.s())?,
            self.terms.get_index(quad.p())?,
            self.terms.get_index(quad.o())?,
            self.terms.get_index(quad.g())?,
        ];
        self.order.get_index_of(&idq)
    }

    /// Iterate over all id-quads in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IdQuad<I>> {
        self.order.iter()
    }

    /// Materialize `idq` back into a [`Quad`].
    ///
    /// # Precondition
    /// All four indices must be live (see [`TermIndex::get_term`]).
    pub fn resolve(&self, idq: &IdQuad<I>) -> Quad {
        // positions were validated when the quad was first inserted
        Quad::new_unchecked(
            self.terms.get_term(idq[0]).clone(),
            self.terms.get_term(idq[1]).clone(),
            self.terms.get_term(idq[2]).clone(),
            self.terms.get_term(idq[3]).clone(),
        )
    }

    /// Return all id-quads whose bound positions match,
    /// as a snapshot sorted in insertion order.
    ///
    /// The ordering with the longest bound prefix is probed;
    /// constraints not covered by its prefix are checked per candidate.
    /// With no bound position this is a full scan.
    pub fn matching(
        &self,
        s: Option<I>,
        p: Option<I>,
        o: Option<I>,
        g: Option<I>,
    ) -> Vec<IdQuad<I>> {
        let bound = [s, p, o, g];
        if bound == [None; 4] {
            return self.order.iter().copied().collect();
        }
        if let [Some(s), Some(p), Some(o), Some(g)] = bound {
            let idq = [s, p, o, g];
            return match self.order.contains(&idq) {
                true => vec![idq],
                false => vec![],
            };
        }

        let (name, perm, set, prefix_len) = self.pick_ordering(&bound);
        trace!("probing {} with a {}-bound prefix", name, prefix_len);

        let mut lo = [I::ZERO; 4];
        let mut hi = [I::MAX; 4];
        for (k, (l, h)) in lo.iter_mut().zip(hi.iter_mut()).enumerate().take(prefix_len) {
            let v = bound[perm[k]].expect("prefix positions are bound");
            (*l, *h) = (v, v);
        }

        let mut result: Vec<IdQuad<I>> = set
            .range(lo..=hi)
            .map(|stored| {
                let mut spog = [I::ZERO; 4];
                for (k, v) in stored.iter().enumerate() {
                    spog[perm[k]] = *v;
                }
                spog
            })
            .filter(|spog| {
                bound
                    .iter()
                    .zip(spog)
                    .all(|(b, v)| b.map_or(true, |b| b == *v))
            })
            .collect();
        result.sort_by_key(|idq| self.order.get_index_of(idq));
        result
    }

    /// Select the ordering whose key prefix covers the most bound positions.
    fn pick_ordering(
        &self,
        bound: &[Option<I>; 4],
    ) -> (&'static str, &'static [usize; 4], &BTreeSet<IdQuad<I>>, usize) {
        let sets = [&self.spog, &self.posg, &self.ospg, &self.gspo];
        let mut best = 0;
        let mut best_len = 0;
        for (n, (_, perm)) in ORDERINGS.iter().enumerate() {
            let len = perm
                .iter()
                .take_while(|k| bound[**k].is_some())
                .count();
            if len > best_len {
                (best, best_len) = (n, len);
            }
        }
        (ORDERINGS[best].0, &ORDERINGS[best].1, sets[best], best_len)
    }
}

impl<I: Index> Default for QuadStore<I> {
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

    fn quad(s: &str, p: &str, o: &str, g: &str) -> Quad {
        let g = match g {
            "" => Term::DefaultGraph,
            g => nn(g),
        };
        Quad::new(nn(s), nn(p), nn(o), g).unwrap()
    }

    fn store(quads: &[Quad]) -> QuadStore<u32> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut st = QuadStore::new();
        for q in quads {
            assert!(st.insert(q));
        }
        st
    }

    #[test]
    fn idempotent_insert() {
        let q = quad("tag:s", "tag:p", "tag:o", "");
        let mut st = QuadStore::<u32>::new();
        assert!(st.insert(&q));
        assert!(!st.insert(&q));
        assert_eq!(st.len(), 1);
        // the duplicate insert must not have leaked references
        assert_eq!(st.term_count(), 4);
        assert!(st.remove(&q));
        assert_eq!(st.term_count(), 0);
    }

    #[test]
    fn remove_releases_shared_terms_once() {
        let q1 = quad("tag:s", "tag:p", "tag:o1", "");
        let q2 = quad("tag:s", "tag:p", "tag:o2", "");
        let mut st = store(&[q1.clone(), q2.clone()]);
        // s, p, o1, o2, default graph
        assert_eq!(st.term_count(), 5);
        assert!(st.remove(&q1));
        // s, p and the default graph are still referenced by q2
        assert_eq!(st.term_count(), 4);
        assert!(!st.remove(&q1));
        assert!(st.remove(&q2));
        assert_eq!(st.term_count(), 0);
    }

    #[test]
    fn resolve_round_trip() {
        let q = Quad::new(
            nn("tag:s"),
            nn("tag:p"),
            Literal::lang_tagged("o", "en").unwrap().into(),
            nn("tag:g"),
        )
        .unwrap();
        let mut st = QuadStore::<u32>::new();
        st.insert(&q);
        let idq = *st.get_at(0).unwrap();
        assert_eq!(st.resolve(&idq), q);
    }

    #[test]
    fn matching_by_each_position() {
        let quads = [
            quad("tag:s1", "tag:p1", "tag:o1", "tag:g"),
            quad("tag:s1", "tag:p2", "tag:o2", "tag:g"),
            quad("tag:s2", "tag:p1", "tag:o3", "tag:g"),
        ];
        let st = store(&quads);
        let id = |t: &Term| st.term_id(t);

        let s1 = id(&nn("tag:s1"));
        let p1 = id(&nn("tag:p1"));
        let o3 = id(&nn("tag:o3"));
        let g = id(&nn("tag:g"));

        assert_eq!(st.matching(s1, None, None, None).len(), 2);
        assert_eq!(st.matching(None, p1, None, None).len(), 2);
        assert_eq!(st.matching(None, None, o3, None).len(), 1);
        assert_eq!(st.matching(None, None, None, g).len(), 3);
        assert_eq!(st.matching(s1, p1, None, None).len(), 1);
        assert_eq!(st.matching(s1, None, None, g).len(), 2);
        assert_eq!(st.matching(None, None, None, None).len(), 3);
    }

    #[test]
    fn matching_preserves_insertion_order() {
        let quads = [
            quad("tag:s2", "tag:p1", "tag:o3", ""),
            quad("tag:s1", "tag:p2", "tag:o2", ""),
            quad("tag:s1", "tag:p1", "tag:o1", ""),
        ];
        let st = store(&quads);
        let p1 = st.term_id(&nn("tag:p1"));
        let found = st.matching(None, p1, None, None);
        let found: Vec<Quad> = found.iter().map(|idq| st.resolve(idq)).collect();
        // insertion order, not index order
        assert_eq!(found, vec![quads[0].clone(), quads[2].clone()]);
    }

    #[test]
    fn matching_all_bound_is_membership() {
        let q = quad("tag:s", "tag:p", "tag:o", "tag:g");
        let st = store(&[q.clone()]);
        let idq = *st.get_at(0).unwrap();
        assert_eq!(
            st.matching(Some(idq[0]), Some(idq[1]), Some(idq[2]), Some(idq[3])),
            vec![idq]
        );
        assert!(st
            .matching(Some(idq[0]), Some(idq[1]), Some(idq[2]), Some(idq[0]))
            .is_empty());
    }

    #[test]
    fn insert_at_shifts_order() {
        let q1 = quad("tag:s1", "tag:p", "tag:o", "");
        let q2 = quad("tag:s2", "tag:p", "tag:o", "");
        let q3 = quad("tag:s3", "tag:p", "tag:o", "");
        let mut st = store(&[q1.clone(), q2.clone()]);
        assert!(st.insert_at(1, &q3));
        let all: Vec<Quad> = st.iter().map(|idq| st.resolve(idq)).collect();
        assert_eq!(all, vec![q1, q3, q2]);
    }

    #[test]
    fn narrow_index_width() {
        let q1 = quad("tag:s1", "tag:p", "tag:o", "");
        let q2 = quad("tag:s2", "tag:p", "tag:o", "tag:g");
        let mut st = QuadStore::<u16>::new();
        assert!(st.insert(&q1));
        assert!(st.insert(&q2));
        assert!(st.contains(&q1));
        assert_eq!(st.resolve(st.get_at(1).unwrap()), q2);
        let p = st.term_id(&nn("tag:p"));
        assert_eq!(st.matching(None, p, None, None).len(), 2);
    }

    #[test]
    fn remove_at_returns_quad() {
        let q1 = quad("tag:s1", "tag:p", "tag:o", "");
        let q2 = quad("tag:s2", "tag:p", "tag:o", "");
        let mut st = store(&[q1.clone(), q2.clone()]);
        assert_eq!(st.remove_at(0), Some(q1));
        assert_eq!(st.len(), 1);
        assert_eq!(st.remove_at(1), None);
        assert_eq!(st.remove_at(0), Some(q2));
        assert!(st.is_empty());
        assert_eq!(st.term_count(), 0);
    }
}
