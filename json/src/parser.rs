//! An RDF/JSON parser reading from any [`BufRead`].

use crate::handler::RdfJsonHandler;
use crate::RdfJsonOptions;
use rdfjson_api::parser::TripleParser;
use std::io::BufRead;

mod _driver;
mod _source;
pub use _source::*;

/// RDF/JSON parser.
///
/// The whole document is read, and its triples pushed to the consumer,
/// during the first call to [`try_for_some_triple`](rdfjson_api::source::TripleSource::try_for_some_triple)
/// on the returned source.
#[derive(Clone, Debug, Default)]
pub struct RdfJsonParser {
    options: RdfJsonOptions,
}

impl RdfJsonParser {
    /// Make a new [`RdfJsonParser`] with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a new [`RdfJsonParser`] with the given options
    pub fn new_with_options(options: RdfJsonOptions) -> Self {
        RdfJsonParser { options }
    }

    /// Borrow the options of this parser
    pub fn options(&self) -> &RdfJsonOptions {
        &self.options
    }
}

impl<B: BufRead> TripleParser<B> for RdfJsonParser {
    type Source = RdfJsonTripleSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        RdfJsonTripleSource::new(data, RdfJsonHandler::new(self.options.clone()))
    }
}

rdfjson_api::def_mod_functions_for_bufread_parser!(RdfJsonParser, TripleParser);
