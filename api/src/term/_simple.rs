use super::*;

/// A straightforward owned implementation of [`Term`],
/// as produced by the toolkit's parsers.
///
/// Literals keep their optional language tag and optional datatype
/// exactly as found in the source; neither is defaulted nor normalized.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SimpleTerm {
    /// An IRI reference
    Iri(IriRef<Box<str>>),
    /// A blank node
    BlankNode(BnodeId<Box<str>>),
    /// A literal: lexical form, language tag, datatype
    Literal(Box<str>, Option<Box<str>>, Option<IriRef<Box<str>>>),
}

use SimpleTerm::*;

impl SimpleTerm {
    /// Build an IRI term, checking that `iri` is a valid IRI reference.
    pub fn new_iri(iri: &str) -> Result<Self, TermError> {
        Ok(Iri(IriRef::new(Box::from(iri))?))
    }

    /// Build a blank node term from its identifier (without `_:`).
    pub fn new_bnode(id: &str) -> Result<Self, TermError> {
        Ok(BlankNode(BnodeId::new(Box::from(id))?))
    }

    /// Build a literal term.
    ///
    /// The datatype, if any, is checked to be a valid IRI reference.
    pub fn new_literal(
        lexical_form: &str,
        language_tag: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Self, TermError> {
        let datatype = datatype.map(|dt| IriRef::new(Box::from(dt))).transpose()?;
        Ok(Literal(
            Box::from(lexical_form),
            language_tag.map(Box::from),
            datatype,
        ))
    }

    /// Copy any [`Term`] into a [`SimpleTerm`].
    pub fn from_term<T: Term>(term: T) -> Self {
        match term.kind() {
            TermKind::Iri => Iri(term
                .iri()
                .map(|iri| iri.boxed())
                .unwrap_or_else(|| unreachable!())),
            TermKind::BlankNode => BlankNode(
                term.bnode_id()
                    .map(|id| BnodeId::new_unchecked(Box::from(id.as_str())))
                    .unwrap_or_else(|| unreachable!()),
            ),
            TermKind::Literal => Literal(
                term.lexical_form()
                    .map(Box::from)
                    .unwrap_or_else(|| unreachable!()),
                term.language_tag().map(Box::from),
                term.datatype().map(|dt| dt.boxed()),
            ),
        }
    }
}

impl Term for SimpleTerm {
    fn kind(&self) -> TermKind {
        match self {
            Iri(_) => TermKind::Iri,
            BlankNode(_) => TermKind::BlankNode,
            Literal(..) => TermKind::Literal,
        }
    }
    fn iri(&self) -> Option<IriRef<&str>> {
        match self {
            Iri(iri) => Some(iri.as_ref()),
            _ => None,
        }
    }
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        match self {
            BlankNode(id) => Some(id.as_ref()),
            _ => None,
        }
    }
    fn lexical_form(&self) -> Option<&str> {
        match self {
            Literal(lex, ..) => Some(&lex[..]),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<IriRef<&str>> {
        match self {
            Literal(_, _, Some(dt)) => Some(dt.as_ref()),
            _ => None,
        }
    }
    fn language_tag(&self) -> Option<&str> {
        match self {
            Literal(_, Some(tag), _) => Some(&tag[..]),
            _ => None,
        }
    }
}
