//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! You can think of a triple as a sentence of the form
//! "subject verb complement"
//! (although the *predicate* is often better expressed as a relationship than a verb).

use crate::term::{SimpleTerm, Term};

/// This trait represents an abstract RDF triple,
/// and provide convenient methods for working with triples.
pub trait Triple {
    /// The type of [`Term`] contained by this triple
    type Term: Term;

    /// The subject of this triple.
    fn s(&self) -> &Self::Term;
    /// The predicate of this triple.
    fn p(&self) -> &Self::Term;
    /// The object of this triple.
    fn o(&self) -> &Self::Term;

    /// The three components of this triple, as an array of references.
    fn spo(&self) -> [&Self::Term; 3] {
        [self.s(), self.p(), self.o()]
    }

    /// Consume this triple, returning its three components.
    fn to_spo(self) -> [Self::Term; 3]
    where
        Self: Sized;

    /// Copy this triple into an owned array of [`SimpleTerm`]s.
    fn to_simple(&self) -> [SimpleTerm; 3] {
        self.spo().map(SimpleTerm::from_term)
    }

    /// Check whether `other` is term-wise equal to `self`.
    fn eq<T: Triple>(&self, other: T) -> bool {
        Term::eq(self.s(), other.s()) && Term::eq(self.p(), other.p()) && Term::eq(self.o(), other.o())
    }
}

impl<T: Term> Triple for [T; 3] {
    type Term = T;

    fn s(&self) -> &Self::Term {
        &self[0]
    }
    fn p(&self) -> &Self::Term {
        &self[1]
    }
    fn o(&self) -> &Self::Term {
        &self[2]
    }
    fn to_spo(self) -> [Self::Term; 3] {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_as_triple() {
        let s = SimpleTerm::new_iri("http://example.org/s").unwrap();
        let p = SimpleTerm::new_iri("http://example.org/p").unwrap();
        let o = SimpleTerm::new_literal("o", None, None).unwrap();
        let borrowed = [&s, &p, &o];
        assert_eq!(borrowed.s(), &&s);
        assert_eq!(borrowed.o(), &&o);
        let owned = borrowed.to_simple();
        assert!(Triple::eq(&borrowed, owned.spo()));
        assert_eq!(owned.to_spo(), [s, p, o]);
    }
}
