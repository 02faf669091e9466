//! Errors raised while parsing RDF/JSON.

use crate::event::JsonEvent;
use crate::handler::Slot;
use rdfjson_api::term::TermError;
use std::fmt;

/// An error raised while parsing RDF/JSON.
///
/// Most errors are fatal: the handler that raised them refuses any further event.
/// Some are recoverable (see [`RdfJsonError::is_recoverable`]):
/// they are reported as warnings and parsing goes on,
/// unless [strict mode](crate::RdfJsonOptions::with_strict) is enabled.
#[derive(Debug, thiserror::Error)]
pub enum RdfJsonError {
    /// The input is not well-formed JSON (or could not be read)
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A JSON scalar appeared where RDF/JSON never allows one
    #[error("{0}s are not valid in RDF/JSON")]
    BareScalar(ScalarKind),
    /// The event is not allowed in the current state of the grammar
    #[error("Unexpected {found}: expected {expected}")]
    UnexpectedEvent {
        /// Description of the event found
        found: &'static str,
        /// Description of what the grammar accepts at this point
        expected: &'static str,
    },
    /// A key other than `subject`, `predicate` or `object` in a triple object
    #[error("Unexpected JSON key name '{0}' in triple definition")]
    UnexpectedTripleKey(String),
    /// A key other than `value`, `type`, `lang` or `datatype` in a term object
    #[error("Unexpected key name '{0}' in term definition")]
    UnexpectedTermKey(String),
    /// A string in a term object that does not follow an attribute key
    #[error("String '{0}' does not follow any term attribute key")]
    UnassignedValue(String),
    /// The `type` of a term is none of `uri`, `literal` or `bnode` (recoverable)
    #[error("Unknown term type: {0}")]
    UnknownTermType(String),
    /// A term object has no `value`
    #[error("No value for term defined")]
    MissingValue,
    /// A term object has a value but no usable type
    #[error("Unsupported term type")]
    UnsupportedTermType,
    /// A term object in a triple is not introduced by a slot key (recoverable)
    #[error("Term is not attached to a subject, predicate or object key")]
    UnassignedTerm,
    /// A triple object is closed before all three slots are filled (recoverable)
    #[error("Triple is missing its {0} term")]
    MissingTerm(Slot),
    /// A term could not be built from the given text
    #[error(transparent)]
    InvalidTerm(#[from] TermError),
    /// An event was received after parsing was halted by a previous error
    #[error("Parsing was aborted by a previous error")]
    Aborted,
}

impl RdfJsonError {
    /// Whether parsing may continue after this error in non-strict mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RdfJsonError::UnknownTermType(_)
                | RdfJsonError::UnassignedTerm
                | RdfJsonError::MissingTerm(_)
        )
    }
}

/// The kinds of JSON scalars that RDF/JSON rejects outright.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// A number without fractional part or exponent
    Integer,
    /// A number with a fractional part or an exponent
    Float,
}

impl ScalarKind {
    /// The kind of scalar carried by `event`, if any.
    pub fn of(event: &JsonEvent) -> Option<Self> {
        match event {
            JsonEvent::Null => Some(ScalarKind::Null),
            JsonEvent::Boolean(_) => Some(ScalarKind::Boolean),
            JsonEvent::Number(repr) => Some(ScalarKind::of_number(repr)),
            _ => None,
        }
    }

    /// The kind of a number, given its textual representation.
    pub fn of_number(repr: &str) -> Self {
        if repr.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            ScalarKind::Float
        } else {
            ScalarKind::Integer
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::Null => "Null",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Integer => "Integer",
            ScalarKind::Float => "Float",
        })
    }
}
