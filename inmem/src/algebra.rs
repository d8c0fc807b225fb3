//! Set algebra over [`Dataset`], defined on top of the engine
//! primitives.
use crate::dataset::Dataset;
use crate::matcher::QuadFilter;
use quadset_term::Quad;

impl Dataset {
    /// Build a new dataset holding the quads of both `self` and
    /// `other`.
    ///
    /// Quads common to both appear once (set semantics).
    /// The result iterates over `self`'s quads in their order,
    /// then `other`'s remaining quads in theirs.
    pub fn union(&self, other: &Dataset) -> Dataset {
        let mut out = self.clone();
        out.insert_all(other.iter());
        out
    }

    /// Build a new dataset holding the quads present in exactly one of
    /// `self` and `other` (symmetric difference).
    pub fn xor(&self, other: &Dataset) -> Dataset {
        let mut out = Dataset::new();
        out.insert_all(self.iter().filter(|q| !other.contains(q)));
        out.insert_all(other.iter().filter(|q| !self.contains(q)));
        out
    }

    /// Build a new dataset holding the quads *not* matching `filter`,
    /// in their original relative order.
    ///
    /// Complement of [`copy_matching`](Dataset::copy_matching).
    pub fn copy_except(&self, filter: impl Into<QuadFilter>) -> Dataset {
        let filter = filter.into();
        let kept: Vec<Quad> = self.iter().filter(|q| !filter.matches(q, self)).collect();
        let mut out = Dataset::new();
        out.insert_all(kept);
        out
    }

    /// Remove every quad *not* matching `filter`.
    ///
    /// Complement of [`remove_matching`](Dataset::remove_matching).
    pub fn remove_except(&mut self, filter: impl Into<QuadFilter>) -> &mut Self {
        self.retain_matching(filter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matcher::QuadTemplate;
    use quadset_term::{Literal, NamedNode, Term};

    fn nn(iri: &str) -> Term {
        NamedNode::new_unchecked(iri).into()
    }

    fn quad(s: &str, o: &str) -> Quad {
        Quad::triple(nn(s), nn("tag:p"), Literal::string(o).into()).unwrap()
    }

    fn dataset(quads: &[Quad]) -> Dataset {
        quads.iter().cloned().collect()
    }

    #[test]
    fn union_dedupes_and_orders() {
        let q1 = quad("tag:s1", "a");
        let q2 = quad("tag:s2", "b");
        let q3 = quad("tag:s3", "c");
        let d1 = dataset(&[q1.clone(), q2.clone()]);
        let d2 = dataset(&[q2.clone(), q3.clone()]);

        let u = d1.union(&d2);
        let seen: Vec<Quad> = u.iter().collect();
        assert_eq!(seen, vec![q1, q2, q3]);
    }

    #[test]
    fn union_is_idempotent_and_commutative() {
        let d1 = dataset(&[quad("tag:s1", "a"), quad("tag:s2", "b")]);
        let d2 = dataset(&[quad("tag:s2", "b"), quad("tag:s3", "c")]);

        assert_eq!(d1.union(&d1), d1);
        assert_eq!(d1.union(&d2), d2.union(&d1));
        assert_eq!(d1.union(&Dataset::new()), d1);
    }

    #[test]
    fn xor_keeps_exactly_one_side() {
        let q1 = quad("tag:s1", "a");
        let q2 = quad("tag:s2", "b");
        let q3 = quad("tag:s3", "c");
        let d1 = dataset(&[q1.clone(), q2.clone()]);
        let d2 = dataset(&[q2, q3.clone()]);

        assert_eq!(d1.xor(&d2), dataset(&[q1, q3]));
        assert!(d1.xor(&d1).is_empty());
        assert_eq!(d1.xor(&Dataset::new()), d1);
    }

    #[test]
    fn xor_of_disjoint_sets_is_their_union() {
        let d1 = dataset(&[quad("tag:s1", "a")]);
        let d2 = dataset(&[quad("tag:s2", "b")]);
        assert_eq!(d1.xor(&d2), d1.union(&d2));
    }

    #[test]
    fn copy_except_complements_copy_matching() {
        let quads = [
            quad("tag:s1", "a"),
            quad("tag:s2", "b"),
            quad("tag:s1", "c"),
        ];
        let d = dataset(&quads);
        let template = || QuadTemplate::new().with_subject(nn("tag:s1"));

        let except = d.copy_except(template());
        assert_eq!(except, dataset(&[quads[1].clone()]));
        assert_eq!(d.copy_matching(template()).union(&except), d);
    }

    #[test]
    fn remove_except_complements_remove_matching() {
        let quads = [
            quad("tag:s1", "a"),
            quad("tag:s2", "b"),
            quad("tag:s1", "c"),
        ];
        let template = || QuadTemplate::new().with_subject(nn("tag:s1"));

        let mut kept = dataset(&quads);
        kept.remove_except(template());
        assert_eq!(kept, dataset(&[quads[0].clone(), quads[2].clone()]));

        let mut removed = dataset(&quads);
        removed.remove_matching(template());
        assert_eq!(kept.union(&removed), dataset(&quads));
    }
}
