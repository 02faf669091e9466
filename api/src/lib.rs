//! This crate is part of the RDF/JSON toolkit.
//!
//! It defines the generic API shared by the toolkit's parsers:
//! [terms](term), [triples](triple), [triple sources](source)
//! and [parsers](parser).
//!
//! Parsers push the triples they recognise into a caller-supplied sink,
//! so the types here favour short-lived borrowed triples
//! over owned collections.

#![deny(missing_docs)]

pub mod parser;
pub mod prelude;
pub mod source;
pub mod term;
pub mod triple;

pub use rdfjson_iri as iri;

/// Re-export of the standard `Error` trait, used throughout the API.
pub use std::error::Error;
