//! A source yields items, and may also fail in the process.
//! This module provides the [`TripleSource`] trait.
//!
//! This trait provides an API similar to (a subset of) the [`Iterator`] API,
//! with methods such as [`for_each_triple`] and [`try_for_each_triple`].
//!
//! Unlike [`Iterator`], the triples it yields may borrow from the source itself,
//! and are only valid during the call to the closure receiving them.
//! This is what event-driven parsers need,
//! as they hand out triples whose terms live in their own pending state,
//! which is replaced as soon as the next triple is recognised.
//!
//! [`for_each_triple`]: TripleSource::for_each_triple
//! [`try_for_each_triple`]: TripleSource::try_for_each_triple

use std::error::Error;

mod _stream_error;
pub use _stream_error::*;
mod _triple;
pub use _triple::*;
