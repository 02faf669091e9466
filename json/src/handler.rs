//! The RDF/JSON state machine.
//!
//! [`RdfJsonHandler`] is fed [`JsonEvent`]s one at a time,
//! and pushes a triple into the given sink each time one is complete.
//! It is split into a small dispatcher, handling the document root,
//! and two sub-grammars, one for each form of RDF/JSON:
//! [`TriplesState`] for the `{"triples": [...]}` form,
//! [`ResourcesState`] for the resource map form.
//! Both grammars share the same term and statement accumulators.

use crate::event::JsonEvent;
use crate::{RdfJsonError, RdfJsonOptions, ScalarKind};
use rdfjson_api::source::{SinkError, SourceError, StreamResult};
use rdfjson_api::term::SimpleTerm;
use rdfjson_api::Error;

mod _resources;
pub use _resources::*;
mod _statement;
pub use _statement::Slot;
use _statement::PendingStatement;
mod _term;
use _term::{term_from_key, PendingTerm};
mod _triples;
pub use _triples::*;

#[cfg(test)]
mod test;

/// The position of a [`RdfJsonHandler`] in the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseState {
    /// Before the top-level map
    Root,
    /// Inside the top-level map, between its entries
    MapRoot,
    /// Inside the value of the `triples` key
    Triples(TriplesState),
    /// Inside the value of a subject key
    Resources(ResourcesState),
}

impl ParseState {
    /// Description of the events accepted in this state, used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            ParseState::Root => "start of map",
            ParseState::MapRoot => "'triples' key, subject key or end of map",
            ParseState::Triples(s) => s.expected(),
            ParseState::Resources(s) => s.expected(),
        }
    }
}

/// Outcome of an event accepted by one of the sub-grammars.
pub(crate) enum Step<S> {
    /// The grammar goes on in the given state
    Next(S),
    /// The grammar is complete; control returns to the top-level map
    Done,
}

impl<S> Step<S> {
    fn lift(self, wrap: fn(S) -> ParseState) -> ParseState {
        match self {
            Step::Next(s) => wrap(s),
            Step::Done => ParseState::MapRoot,
        }
    }
}

/// Data shared by both sub-grammars.
pub(crate) struct Context {
    pub(crate) term: PendingTerm,
    pub(crate) statement: PendingStatement,
    options: RdfJsonOptions,
    warnings: Vec<RdfJsonError>,
}

impl Context {
    /// Report `err` as a warning if it is recoverable (and strict mode is off),
    /// return it otherwise.
    pub(crate) fn recover(&mut self, err: RdfJsonError) -> Result<(), RdfJsonError> {
        if err.is_recoverable() && !self.options.strict() {
            log::warn!("{err}");
            self.warnings.push(err);
            Ok(())
        } else {
            Err(err)
        }
    }

    /// Store a string into the current attribute of the pending term.
    pub(crate) fn term_value(&mut self, txt: &str) -> Result<(), RdfJsonError> {
        self.term.set_value(txt).or_else(|err| self.recover(err))
    }

    /// Push the pending statement into `sink`.
    ///
    /// If one of its slots is empty, nothing is emitted
    /// and [`RdfJsonError::MissingTerm`] is reported instead.
    pub(crate) fn emit<F, E>(&mut self, sink: &mut F) -> StreamResult<(), RdfJsonError, E>
    where
        F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
        E: Error,
    {
        match self.statement.triple() {
            Ok(triple) => {
                log::debug!("triple {} {} {}", triple[0], triple[1], triple[2]);
                sink(triple).map_err(SinkError)
            }
            Err(slot) => self
                .recover(RdfJsonError::MissingTerm(slot))
                .map_err(SourceError),
        }
    }
}

/// An event-driven RDF/JSON parser.
///
/// Each call to [`handle`](RdfJsonHandler::handle) consumes one event,
/// and calls the sink at most once.
/// Once an event has been rejected, the handler is halted
/// and rejects everything with [`RdfJsonError::Aborted`], until [`reset`](RdfJsonHandler::reset).
pub struct RdfJsonHandler {
    state: ParseState,
    cx: Context,
    halted: bool,
}

impl Default for RdfJsonHandler {
    fn default() -> Self {
        Self::new(RdfJsonOptions::default())
    }
}

impl RdfJsonHandler {
    /// Make a new handler, in the [`Root`](ParseState::Root) state.
    pub fn new(options: RdfJsonOptions) -> Self {
        RdfJsonHandler {
            state: ParseState::Root,
            cx: Context {
                term: PendingTerm::default(),
                statement: PendingStatement::default(),
                options,
                warnings: vec![],
            },
            halted: false,
        }
    }

    /// The current state of this handler.
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// The options of this handler.
    pub fn options(&self) -> &RdfJsonOptions {
        &self.cx.options
    }

    /// The recoverable errors reported so far.
    pub fn warnings(&self) -> &[RdfJsonError] {
        &self.cx.warnings
    }

    /// Whether this handler has rejected an event.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Prepare this handler for a new document.
    pub fn reset(&mut self) {
        self.state = ParseState::Root;
        self.cx.term.begin();
        self.cx.statement.clear();
        self.cx.warnings.clear();
        self.halted = false;
    }

    /// Mark this handler as halted, e.g. because its event source failed.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Process one event, calling `sink` if it completes a triple.
    ///
    /// Errors raised by `sink` are returned as [`SinkError`]s,
    /// rejections of the event as [`SourceError`]s.
    /// In both cases the handler is halted.
    pub fn handle<F, E>(
        &mut self,
        event: JsonEvent<'_>,
        sink: &mut F,
    ) -> StreamResult<(), RdfJsonError, E>
    where
        F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
        E: Error,
    {
        if self.halted {
            return Err(SourceError(RdfJsonError::Aborted));
        }
        log::trace!("{:?} <- {:?}", self.state, event);
        let next = match event {
            JsonEvent::Null => Err(SourceError(RdfJsonError::BareScalar(ScalarKind::Null))),
            JsonEvent::Boolean(_) => Err(SourceError(RdfJsonError::BareScalar(ScalarKind::Boolean))),
            JsonEvent::Number(repr) => Err(SourceError(RdfJsonError::BareScalar(
                ScalarKind::of_number(repr),
            ))),
            JsonEvent::String(txt) => self.string(txt).map_err(SourceError),
            JsonEvent::StartMap => Ok(self.start_map()),
            JsonEvent::MapKey(key) => self.map_key(key).map_err(SourceError),
            JsonEvent::EndMap => self.end_map(sink),
            JsonEvent::StartArray => Ok(self.start_array()),
            JsonEvent::EndArray => Ok(self.end_array()),
            JsonEvent::End => {
                self.end();
                Ok(Some(ParseState::Root))
            }
        };
        let next = next.and_then(|next| {
            next.ok_or_else(|| {
                SourceError(RdfJsonError::UnexpectedEvent {
                    found: event.describe(),
                    expected: self.state.expected(),
                })
            })
        });
        match next {
            Ok(next) => {
                if next != self.state {
                    log::trace!("{:?} -> {:?}", self.state, next);
                }
                self.state = next;
                Ok(())
            }
            Err(err) => {
                self.halted = true;
                Err(err)
            }
        }
    }

    // Each of the methods below returns the next state,
    // or None if the event is not allowed in the current state.

    fn string(&mut self, txt: &str) -> Result<Option<ParseState>, RdfJsonError> {
        Ok(match self.state {
            ParseState::Triples(s) => s
                .string(&mut self.cx, txt)?
                .map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .string(&mut self.cx, txt)?
                .map(|step| step.lift(ParseState::Resources)),
            ParseState::Root | ParseState::MapRoot => None,
        })
    }

    fn start_map(&mut self) -> Option<ParseState> {
        match self.state {
            ParseState::Root => Some(ParseState::MapRoot),
            ParseState::MapRoot => None,
            ParseState::Triples(s) => s
                .start_map(&mut self.cx)
                .map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .start_map(&mut self.cx)
                .map(|step| step.lift(ParseState::Resources)),
        }
    }

    fn map_key(&mut self, key: &str) -> Result<Option<ParseState>, RdfJsonError> {
        Ok(match self.state {
            ParseState::Root => None,
            ParseState::MapRoot if key == "triples" => {
                Some(ParseState::Triples(TriplesState::Key))
            }
            ParseState::MapRoot => {
                let subject = term_from_key(key)?;
                self.cx.statement.set(Slot::Subject, subject);
                Some(ParseState::Resources(ResourcesState::SubjectKey))
            }
            ParseState::Triples(s) => s
                .map_key(&mut self.cx, key)?
                .map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .map_key(&mut self.cx, key)?
                .map(|step| step.lift(ParseState::Resources)),
        })
    }

    fn end_map<F, E>(&mut self, sink: &mut F) -> StreamResult<Option<ParseState>, RdfJsonError, E>
    where
        F: FnMut([&SimpleTerm; 3]) -> Result<(), E>,
        E: Error,
    {
        Ok(match self.state {
            ParseState::Root => None,
            ParseState::MapRoot => Some(ParseState::Root),
            ParseState::Triples(s) => s
                .end_map(&mut self.cx, sink)?
                .map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .end_map(&mut self.cx, sink)?
                .map(|step| step.lift(ParseState::Resources)),
        })
    }

    fn start_array(&mut self) -> Option<ParseState> {
        match self.state {
            ParseState::Root | ParseState::MapRoot => None,
            ParseState::Triples(s) => s.start_array().map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .start_array()
                .map(|step| step.lift(ParseState::Resources)),
        }
    }

    fn end_array(&mut self) -> Option<ParseState> {
        match self.state {
            ParseState::Root | ParseState::MapRoot => None,
            ParseState::Triples(s) => s.end_array().map(|step| step.lift(ParseState::Triples)),
            ParseState::Resources(s) => s
                .end_array()
                .map(|step| step.lift(ParseState::Resources)),
        }
    }

    fn end(&mut self) {
        if self.state != ParseState::Root || !self.cx.statement.is_empty() {
            log::debug!(
                "end of input in state {:?}, discarding pending statement",
                self.state
            );
        }
        self.cx.term.begin();
        self.cx.statement.clear();
    }
}
