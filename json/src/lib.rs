//! This crate is part of the RDF/JSON toolkit.
//!
//! It provides an event-driven parser for [RDF/JSON],
//! the Talis JSON serialization of RDF graphs.
//! Both forms of the syntax are accepted, possibly mixed in a single document:
//!
//! * the *triples array* form: `{"triples": [{"subject": ..., "predicate": ..., "object": ...}]}`
//! * the *resource map* form: `{"<subject>": {"<predicate>": [<object>, ...]}}`
//!
//! where every term object has a `value`, and optionally a `type`
//! (`uri`, `literal` or `bnode`), a `lang` and a `datatype`.
//!
//! The core of the crate is [`RdfJsonHandler`](handler::RdfJsonHandler),
//! a state machine fed one [`JsonEvent`](event::JsonEvent) at a time,
//! which pushes every recognised triple into a caller-supplied sink.
//! [`RdfJsonParser`](parser::RdfJsonParser) drives it from any [`BufRead`](std::io::BufRead)
//! and exposes the result as a [`TripleSource`](rdfjson_api::source::TripleSource).
//!
//! ```
//! use rdfjson::parser::parse_str;
//! use rdfjson_api::prelude::*;
//!
//! let doc = r#"{"http://example.org/s": {"http://example.org/p": [{"value": "hi", "type": "literal"}]}}"#;
//! let triples = parse_str(doc).collect_triples().unwrap();
//! assert_eq!(triples.len(), 1);
//! assert_eq!(triples[0][2].lexical_form(), Some("hi"));
//! ```
//!
//! [RDF/JSON]: https://www.w3.org/TR/rdf-json/

#![deny(missing_docs)]

pub mod error;
pub use error::*;
pub mod event;
pub mod handler;
pub mod options;
pub use options::*;
pub mod parser;
pub mod syntax;
