use super::{Context, Slot, Step};
use crate::RdfJsonError;
use rdfjson_api::source::{SourceError, StreamResult};
use rdfjson_api::term::SimpleTerm;
use rdfjson_api::Error;

/// Position inside the `{"triples": [...]}` form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TriplesState {
    /// After the `triples` key, before its array
    Key,
    /// Inside the array, between triple objects
    Array,
    /// Inside a triple object, with the slot selected by its last key
    Triple(Option<Slot>),
    /// Inside a term object, to be stored in the given slot
    Term(Option<Slot>),
}

use Step::*;
use TriplesState::*;

impl TriplesState {
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            Key => "start of triples array",
            Array => "start of triple map or end of array",
            Triple(_) => "'subject', 'predicate' or 'object' key, term map or end of map",
            Term(_) => "term attribute key, string or end of map",
        }
    }

    pub(crate) fn start_map(self, cx: &mut Context) -> Option<Step<Self>> {
        match self {
            Array => {
                cx.statement.clear();
                Some(Next(Triple(None)))
            }
            Triple(slot) => {
                cx.term.begin();
                Some(Next(Term(slot)))
            }
            Key | Term(_) => None,
        }
    }

    pub(crate) fn map_key(
        self,
        cx: &mut Context,
        key: &str,
    ) -> Result<Option<Step<Self>>, RdfJsonError> {
        match self {
            Triple(_) => match Slot::from_key(key) {
                Some(slot) => Ok(Some(Next(Triple(Some(slot))))),
                None => Err(RdfJsonError::UnexpectedTripleKey(key.to_string())),
            },
            Term(_) => {
                cx.term.select_attribute(key)?;
                Ok(Some(Next(self)))
            }
            Key | Array => Ok(None),
        }
    }

    pub(crate) fn string(
        self,
        cx: &mut Context,
        txt: &str,
    ) -> Result<Option<Step<Self>>, RdfJsonError> {
        match self {
            Term(_) => {
                cx.term_value(txt)?;
                Ok(Some(Next(self)))
            }
            Key | Array | Triple(_) => Ok(None),
        }
    }

    pub(crate) fn end_map<F, E>(
        self,
        cx: &mut Context,
        sink: &mut F,
    ) -> StreamResult<Option<Step<Self>>, RdfJsonError, E>
    where
        F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
        E: Error,
    {
        match self {
            Key => Ok(Some(Done)),
            Term(slot) => {
                let term = cx.term.finalize().map_err(SourceError)?;
                match slot {
                    Some(slot) => cx.statement.set(slot, term),
                    None => cx
                        .recover(RdfJsonError::UnassignedTerm)
                        .map_err(SourceError)?,
                }
                Ok(Some(Next(Triple(slot))))
            }
            Triple(_) => {
                cx.emit(sink)?;
                cx.statement.clear();
                Ok(Some(Next(Array)))
            }
            Array => Ok(None),
        }
    }

    pub(crate) fn start_array(self) -> Option<Step<Self>> {
        match self {
            Key => Some(Next(Array)),
            _ => None,
        }
    }

    pub(crate) fn end_array(self) -> Option<Step<Self>> {
        match self {
            Array => Some(Done),
            _ => None,
        }
    }
}
