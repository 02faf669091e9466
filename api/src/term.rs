//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in the toolkit.
//!
//! I provide the main trait [`Term`],
//! the concrete type [`SimpleTerm`] produced by parsers,
//! and a few auxiliary types such as [`TermKind`] and [`BnodeId`].

mod _display;
mod _error;
pub use _error::*;
mod _simple;
pub use _simple::*;

pub mod bnode_id;

/// This type is re-exported from `rdfjson_iri` for convenience,
/// as it is required to implement [`Term`].
pub use rdfjson_iri::IriRef;
pub use bnode_id::BnodeId;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
///
/// # Implementation
///
/// The only method without a default implementation is [`kind`](Term::kind),
/// which indicates what kind of RDF term a given [`Term`] represents.
///
/// The accessors [`iri`](Term::iri), [`bnode_id`](Term::bnode_id)
/// and [`lexical_form`](Term::lexical_form) have a default implementation,
/// but the one corresponding to the kind of the term MUST be overridden,
/// otherwise it will panic.
pub trait Term {
    /// Return the kind of RDF term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// Return true if this [`Term`] is an IRI,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Iri`].
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::BlankNode`].
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Literal`].
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Iri`],
    /// return this IRI reference.
    /// Otherwise return `None`.
    #[inline]
    fn iri(&self) -> Option<IriRef<&str>> {
        self.is_iri()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the blank node identifier (without the `_:` prefix).
    /// Otherwise return `None`.
    #[inline]
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        self.is_blank_node()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    #[inline]
    fn lexical_form(&self) -> Option<&str> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// The datatype IRI of this literal, if it is a literal carrying an explicit one.
    #[inline]
    fn datatype(&self) -> Option<IriRef<&str>> {
        None
    }

    /// The language tag of this literal, if it is a literal carrying one.
    ///
    /// Tags are reported as found in the source, without any normalization.
    #[inline]
    fn language_tag(&self) -> Option<&str> {
        None
    }

    /// Check whether `self` and `other` represent the same RDF term.
    fn eq<T: Term>(&self, other: T) -> bool {
        let k1 = self.kind();
        let k2 = other.kind();
        if k1 != k2 {
            return false;
        }
        match k1 {
            TermKind::Iri => self.iri() == other.iri(),
            TermKind::BlankNode => self.bnode_id() == other.bnode_id(),
            TermKind::Literal => {
                self.lexical_form() == other.lexical_form()
                    && self.datatype() == other.datatype()
                    && self.language_tag() == other.language_tag()
            }
        }
    }
}

impl<'a, T: Term + ?Sized> Term for &'a T {
    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn iri(&self) -> Option<IriRef<&str>> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<&str> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<IriRef<&str>> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<&str> {
        (*self).language_tag()
    }
}
