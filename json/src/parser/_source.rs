use super::_driver::drive;
use crate::handler::RdfJsonHandler;
use crate::RdfJsonError;
use rdfjson_api::source::{StreamResult, TripleSource};
use rdfjson_api::term::SimpleTerm;
use rdfjson_api::Error;
use std::io::BufRead;

/// The [`TripleSource`] returned by [`RdfJsonParser`](super::RdfJsonParser).
///
/// Its triples borrow their terms from the parser's pending statement.
pub struct RdfJsonTripleSource<B> {
    input: Option<B>,
    handler: RdfJsonHandler,
}

impl<B> RdfJsonTripleSource<B> {
    pub(crate) fn new(input: B, handler: RdfJsonHandler) -> Self {
        RdfJsonTripleSource {
            input: Some(input),
            handler,
        }
    }

    /// The recoverable errors reported so far.
    pub fn warnings(&self) -> &[RdfJsonError] {
        self.handler.warnings()
    }
}

impl<B: BufRead> TripleSource for RdfJsonTripleSource<B> {
    type Triple<'x> = [&'x SimpleTerm; 3];
    type Error = RdfJsonError;

    fn try_for_some_triple<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Self::Triple<'_>) -> Result<(), E>,
    {
        let Some(input) = self.input.take() else {
            return Ok(false);
        };
        drive(input, &mut self.handler, &mut |t: [&SimpleTerm; 3]| f(t))?;
        Ok(true)
    }
}
