//! I provide [`IriRef`], a wrapper around any `str`-like type
//! guaranteeing that its underlying data is a valid IRI reference.
use super::{InvalidIri, Result};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Wrapper for text satisfying the `IRI-reference` rule of RFC-3987.
///
/// Both absolute and relative references are accepted;
/// see [`IriRef::is_absolute`] to tell them apart.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IriRef<T: Borrow<str>>(T);

impl<T: Borrow<str>> IriRef<T> {
    /// Build a new `IriRef`, checking that `iri` is a valid IRI reference.
    pub fn new(iri: T) -> Result<Self> {
        if is_valid_iri_ref(iri.borrow()) {
            Ok(IriRef(iri))
        } else {
            Err(InvalidIri(iri.borrow().to_string()))
        }
    }

    /// Build a new `IriRef` from trusted text.
    ///
    /// # Pre-condition
    /// `iri` must be a valid IRI reference;
    /// this is only checked in debug builds.
    pub fn new_unchecked(iri: T) -> Self {
        debug_assert!(
            is_valid_iri_ref(iri.borrow()),
            "invalid IRI reference {:?}",
            iri.borrow()
        );
        IriRef(iri)
    }

    /// The underlying text.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Borrow this wrapper as an `IriRef<&str>`.
    pub fn as_ref(&self) -> IriRef<&str> {
        IriRef(self.0.borrow())
    }

    /// Extract the wrapped value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Whether this reference is an absolute IRI (i.e. it has a scheme).
    pub fn is_absolute(&self) -> bool {
        oxiri::Iri::parse(self.as_str()).is_ok()
    }
}

impl IriRef<&str> {
    /// Copy the underlying text into a boxed `IriRef`.
    pub fn boxed(&self) -> IriRef<Box<str>> {
        IriRef(Box::from(self.0))
    }
}

/// Check whether `txt` is a valid IRI reference.
pub fn is_valid_iri_ref(txt: &str) -> bool {
    oxiri::IriRef::parse(txt).is_ok()
}

impl<T: Borrow<str>> Borrow<str> for IriRef<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> Deref for IriRef<T> {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> fmt::Display for IriRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Borrow<str>> PartialEq<str> for IriRef<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Borrow<str>> PartialEq<IriRef<T>> for str {
    fn eq(&self, other: &IriRef<T>) -> bool {
        self == other.as_str()
    }
}

impl<T: Borrow<str>> PartialOrd<str> for IriRef<T> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        self.as_str().partial_cmp(other)
    }
}
