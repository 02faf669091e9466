//! Prelude for all the toolkit's crates.
pub use crate::parser::{IntoParsable, TripleParser};
pub use crate::source::{StreamError, StreamResult, TripleSource};
pub use crate::term::{SimpleTerm, Term, TermKind};
pub use crate::triple::Triple;
