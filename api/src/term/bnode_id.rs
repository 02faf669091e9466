//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! is a usable blank node identifier (without the leading `_:`).
//!
//! No label grammar is enforced:
//! identifiers are kept exactly as they appear in the source document,
//! the only requirement being that they are not empty.
use super::*;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// A blank node identifier, without the leading `_:`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId<T: Borrow<str>>(T);

impl<T: Borrow<str>> BnodeId<T> {
    /// Build a new `BnodeId`, checking that `id` is not empty.
    pub fn new(id: T) -> Result<Self, InvalidBnodeId> {
        if id.borrow().is_empty() {
            Err(InvalidBnodeId(id.borrow().to_string()))
        } else {
            Ok(BnodeId(id))
        }
    }

    /// Build a new `BnodeId` from trusted text.
    pub fn new_unchecked(id: T) -> Self {
        debug_assert!(!id.borrow().is_empty());
        BnodeId(id)
    }

    /// The underlying identifier.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Borrow this wrapper as a `BnodeId<&str>`.
    pub fn as_ref(&self) -> BnodeId<&str> {
        BnodeId(self.0.borrow())
    }

    /// Extract the wrapped value.
    pub fn unwrap(self) -> T {
        self.0
    }
}

/// This error is raised when trying to build an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' is not valid")]
pub struct InvalidBnodeId(pub String);

impl<T: Borrow<str>> Deref for BnodeId<T> {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> PartialEq<str> for BnodeId<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Borrow<str>> fmt::Display for BnodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

impl<T: Borrow<str>> Term for BnodeId<T> {
    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        Some(self.as_ref())
    }
}
