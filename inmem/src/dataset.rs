//! An insertion-ordered, indexed, in-memory quad [`Dataset`].
use crate::matcher::{QuadFilter, QuadTemplate};
use crate::store::QuadStore;
use crate::DatasetError;
use quadset_term::Quad;
use std::fmt;

/// A mutable set of [quads](Quad).
///
/// A dataset has set semantics (inserting a quad twice keeps one copy)
/// but remembers insertion order:
/// iteration, [positional access](Dataset::get_at) and the results of
/// matching operations all follow the order in which quads were first
/// inserted.
///
/// All matching operations accept anything convertible to a
/// [`QuadFilter`]: a bare quad, a sequence of quads, a
/// [`QuadTemplate`], or a test function.
/// Template filters with exact-bound positions are answered from the
/// underlying indexes; test functions always cost a full scan.
///
/// Mutating operations that evaluate a user-provided function
/// ([`update_matching`](Dataset::update_matching) and friends)
/// snapshot the matching quads first,
/// so the function observes the dataset as it was when the operation
/// started.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    store: QuadStore<u32>,
}

impl Dataset {
    /// Build an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of quads in this dataset.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether this dataset holds no quad.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The number of distinct terms referenced by the quads of this
    /// dataset.
    pub fn term_count(&self) -> usize {
        self.store.term_count()
    }

    /// Insert `quad`, returning `false` if it was already present.
    pub fn insert(&mut self, quad: &Quad) -> bool {
        self.store.insert(quad)
    }

    /// Insert every quad yielded by `quads`.
    pub fn insert_all<T>(&mut self, quads: T) -> &mut Self
    where
        T: IntoIterator<Item = Quad>,
    {
        for quad in quads {
            self.store.insert(&quad);
        }
        self
    }

    /// Remove `quad`, returning `false` if it was not present.
    ///
    /// The relative order of the remaining quads is preserved.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        self.store.remove(quad)
    }

    /// Whether `quad` is present in this dataset.
    pub fn contains(&self, quad: &Quad) -> bool {
        self.store.contains(quad)
    }

    /// Iterate over all quads, in insertion order.
    pub fn iter(&self) -> Quads<'_> {
        Quads {
            store: &self.store,
            inner: Box::new(self.store.iter()),
        }
    }

    /// Return all quads matching `filter`, in insertion order.
    pub fn quads_matching(&self, filter: impl Into<QuadFilter>) -> Vec<Quad> {
        self.matching(&filter.into())
    }

    /// Whether at least one quad matches `filter`.
    pub fn contains_matching(&self, filter: impl Into<QuadFilter>) -> bool {
        match &filter.into() {
            QuadFilter::Quads(quads) => quads.iter().any(|q| self.contains(q)),
            QuadFilter::Template(template) => !self.matching_template(template).is_empty(),
            QuadFilter::Test(f) => self.iter().any(|q| f(&q, self)),
        }
    }

    fn matching(&self, filter: &QuadFilter) -> Vec<Quad> {
        match filter {
            QuadFilter::Quads(quads) => {
                let mut hits: Vec<(usize, &Quad)> = quads
                    .iter()
                    .filter_map(|q| Some((self.store.position(q)?, q)))
                    .collect();
                hits.sort_by_key(|(pos, _)| *pos);
                hits.dedup_by_key(|(pos, _)| *pos);
                hits.into_iter().map(|(_, q)| q.clone()).collect()
            }
            QuadFilter::Template(template) => self.matching_template(template),
            QuadFilter::Test(f) => self.iter().filter(|q| f(q, self)).collect(),
        }
    }

    fn matching_template(&self, template: &QuadTemplate) -> Vec<Quad> {
        let mut bound = [None; 4];
        for (k, constant) in template.constants().iter().enumerate() {
            if let Some(term) = constant {
                match self.store.term_id(term) {
                    Some(i) => bound[k] = Some(i),
                    // an exact term absent from the dataset matches nothing
                    None => return vec![],
                }
            }
        }
        self.store
            .matching(bound[0], bound[1], bound[2], bound[3])
            .iter()
            .map(|idq| self.store.resolve(idq))
            // test selectors are not covered by the index probe
            .filter(|q| template.matches(q, self))
            .collect()
    }

    /// Remove every quad matching `filter`.
    pub fn remove_matching(&mut self, filter: impl Into<QuadFilter>) -> &mut Self {
        for quad in self.matching(&filter.into()) {
            self.store.remove(&quad);
        }
        self
    }

    /// Remove every quad *not* matching `filter`.
    pub fn retain_matching(&mut self, filter: impl Into<QuadFilter>) -> &mut Self {
        let filter = filter.into();
        let doomed: Vec<Quad> = self.iter().filter(|q| !filter.matches(q, self)).collect();
        for quad in doomed {
            self.store.remove(&quad);
        }
        self
    }

    /// Build a new dataset holding the quads matching `filter`,
    /// in their original relative order.
    ///
    /// The copy is independent: later mutation of either dataset does
    /// not affect the other.
    pub fn copy_matching(&self, filter: impl Into<QuadFilter>) -> Dataset {
        let mut copy = Dataset::new();
        copy.insert_all(self.matching(&filter.into()));
        copy
    }

    /// Replace every quad matching `filter` with the result of `f`,
    /// in place.
    ///
    /// Each replacement keeps the position of the quad it replaces;
    /// if `f` maps two quads to the same value, they collapse into one.
    /// `f` observes the dataset as it was before the first replacement.
    pub fn update_matching<F>(&mut self, filter: impl Into<QuadFilter>, f: F) -> &mut Self
    where
        F: Fn(&Quad, &Dataset) -> Quad,
    {
        let snapshot = self.matching(&filter.into());
        let replacements: Vec<(Quad, Quad)> = snapshot
            .iter()
            .map(|q| (q.clone(), f(q, self)))
            .collect();
        for (old, new) in replacements {
            if old != new {
                self.replace(&old, new);
            }
        }
        self
    }

    /// Build a new dataset where every quad matching `filter` is
    /// replaced by the result of `f`, and every other quad is kept.
    pub fn map_matching<F>(&self, filter: impl Into<QuadFilter>, f: F) -> Dataset
    where
        F: Fn(&Quad, &Dataset) -> Quad,
    {
        let filter = filter.into();
        let mut out = Dataset::new();
        for quad in self.iter() {
            if filter.matches(&quad, self) {
                out.insert(&f(&quad, self));
            } else {
                out.insert(&quad);
            }
        }
        out
    }

    /// Fold `f` over the quads matching `filter`, in insertion order,
    /// starting from `init`.
    pub fn fold_matching<A, F>(&self, filter: impl Into<QuadFilter>, init: A, f: F) -> A
    where
        F: Fn(A, &Quad, &Dataset) -> A,
    {
        let mut acc = init;
        for quad in self.matching(&filter.into()) {
            acc = f(acc, &quad, self);
        }
        acc
    }

    /// The quad at position `pos` of the insertion order.
    ///
    /// # Error
    /// [`DatasetError::IndexOutOfRange`] if `pos >= len`.
    pub fn get_at(&self, pos: usize) -> Result<Quad, DatasetError> {
        match self.store.get_at(pos) {
            Some(idq) => Ok(self.store.resolve(idq)),
            None => Err(DatasetError::IndexOutOfRange {
                index: pos,
                len: self.len(),
            }),
        }
    }

    /// Whether position `pos` is within the `[0, len)` range.
    pub fn exists_at(&self, pos: usize) -> bool {
        pos < self.len()
    }

    /// Replace the quad at position `pos` with `quad`.
    ///
    /// If `quad` is already present elsewhere, the quad at `pos` is
    /// simply removed (set semantics).
    ///
    /// # Error
    /// [`DatasetError::IndexOutOfRange`] if `pos >= len`.
    pub fn set_at(&mut self, pos: usize, quad: Quad) -> Result<(), DatasetError> {
        match self.store.remove_at(pos) {
            Some(_) => {
                if !self.store.contains(&quad) {
                    self.store.insert_at(pos, &quad);
                }
                Ok(())
            }
            None => Err(DatasetError::IndexOutOfRange {
                index: pos,
                len: self.len(),
            }),
        }
    }

    /// Remove and return the quad at position `pos`.
    ///
    /// # Error
    /// [`DatasetError::IndexOutOfRange`] if `pos >= len`.
    pub fn remove_at(&mut self, pos: usize) -> Result<Quad, DatasetError> {
        self.store
            .remove_at(pos)
            .ok_or(DatasetError::IndexOutOfRange {
                index: pos,
                len: self.len(),
            })
    }

    /// Replace `old` with `new`, keeping `old`'s position,
    /// returning `false` if `old` was not present.
    ///
    /// If `new` is already present elsewhere, `old` is simply removed
    /// (set semantics).
    pub fn replace(&mut self, old: &Quad, new: Quad) -> bool {
        match self.store.position(old) {
            Some(pos) => {
                if *old != new {
                    self.store.remove(old);
                    if !self.store.contains(&new) {
                        self.store.insert_at(pos, &new);
                    }
                }
                true
            }
            None => false,
        }
    }
}

/// Two datasets are equal when they hold the same set of quads,
/// regardless of insertion order.
impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|q| other.contains(&q))
    }
}

impl Eq for Dataset {}

/// Formats the dataset as [N-Quads] lines, in insertion order.
///
/// [N-Quads]: https://www.w3.org/TR/n-quads/
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in self.iter() {
            writeln!(f, "{}", quad)?;
        }
        Ok(())
    }
}

impl Extend<Quad> for Dataset {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.insert_all(iter);
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        let mut dataset = Dataset::new();
        dataset.insert_all(iter);
        dataset
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = Quad;
    type IntoIter = Quads<'a>;
    fn into_iter(self) -> Quads<'a> {
        self.iter()
    }
}

/// Iterator over the quads of a [`Dataset`], in insertion order.
///
/// Yields owned quads, materialized from the interned representation.
pub struct Quads<'a> {
    store: &'a QuadStore<u32>,
    inner: Box<dyn Iterator<Item = &'a [u32; 4]> + 'a>,
}

impl Iterator for Quads<'_> {
    type Item = Quad;

    fn next(&mut self) -> Option<Quad> {
        self.inner.next().map(|idq| self.store.resolve(idq))
    }
}
