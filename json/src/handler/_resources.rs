use super::{term_from_key, Context, Slot, Step};
use crate::RdfJsonError;
use rdfjson_api::source::{SourceError, StreamResult};
use rdfjson_api::term::SimpleTerm;
use rdfjson_api::Error;

/// Position inside the value of a subject key, in the resource map form
/// `{"<subject>": {"<predicate>": [<object>, ...]}}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourcesState {
    /// After a subject key, before its predicate map
    SubjectKey,
    /// Inside the predicate map, between its entries
    Predicate,
    /// Inside an array of objects, between term objects
    ObjectArray,
    /// Inside an object term
    Object,
}

use ResourcesState::*;
use Step::*;

impl ResourcesState {
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            SubjectKey => "start of predicate map",
            Predicate => "predicate key, object array or end of map",
            ObjectArray => "start of object map or end of array",
            Object => "term attribute key, string or end of map",
        }
    }

    pub(crate) fn start_map(self, cx: &mut Context) -> Option<Step<Self>> {
        match self {
            SubjectKey => Some(Next(Predicate)),
            ObjectArray => {
                cx.term.begin();
                Some(Next(Object))
            }
            Predicate | Object => None,
        }
    }

    pub(crate) fn map_key(
        self,
        cx: &mut Context,
        key: &str,
    ) -> Result<Option<Step<Self>>, RdfJsonError> {
        match self {
            Predicate => {
                cx.statement.set(Slot::Predicate, term_from_key(key)?);
                Ok(Some(Next(Predicate)))
            }
            Object => {
                cx.term.select_attribute(key)?;
                Ok(Some(Next(Object)))
            }
            SubjectKey | ObjectArray => Ok(None),
        }
    }

    pub(crate) fn string(
        self,
        cx: &mut Context,
        txt: &str,
    ) -> Result<Option<Step<Self>>, RdfJsonError> {
        match self {
            Object => {
                cx.term_value(txt)?;
                Ok(Some(Next(Object)))
            }
            SubjectKey | Predicate | ObjectArray => Ok(None),
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
            Object => {
                let object = cx.term.finalize().map_err(SourceError)?;
                cx.statement.set(Slot::Object, object);
                cx.emit(sink)?;
                cx.statement.clear_object();
                Ok(Some(Next(ObjectArray)))
            }
            Predicate => Ok(Some(Done)),
            SubjectKey | ObjectArray => Ok(None),
        }
    }

    pub(crate) fn start_array(self) -> Option<Step<Self>> {
        match self {
            Predicate => Some(Next(ObjectArray)),
            _ => None,
        }
    }

    pub(crate) fn end_array(self) -> Option<Step<Self>> {
        match self {
            ObjectArray => Some(Next(Predicate)),
            _ => None,
        }
    }
}
