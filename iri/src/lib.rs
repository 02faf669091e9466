//! This crate is part of the RDF/JSON toolkit.
//!
//! It provides a wrapper type guaranteeing that the wrapped text
//! is a valid [IRI reference](https://www.rfc-editor.org/rfc/rfc3987),
//! which is what RDF/JSON documents use to name resources and datatypes.

#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod _wrapper;
pub use _wrapper::*;
#[cfg(feature = "serde")]
mod _serde;
