use rdfjson_api::term::SimpleTerm;
use std::fmt;

/// One of the three positions of a triple.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Slot {
    /// The subject
    Subject,
    /// The predicate
    Predicate,
    /// The object
    Object,
}

impl Slot {
    /// The slot designated by a key of a triple object, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "subject" => Some(Slot::Subject),
            "predicate" => Some(Slot::Predicate),
            "object" => Some(Slot::Object),
            _ => None,
        }
    }

    /// The name of this slot, as used in triple objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Subject => "subject",
            Slot::Predicate => "predicate",
            Slot::Object => "object",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The triple being assembled.
///
/// Storing a term into a slot releases whatever term it held before.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingStatement {
    subject: Option<SimpleTerm>,
    predicate: Option<SimpleTerm>,
    object: Option<SimpleTerm>,
}

impl PendingStatement {
    pub(crate) fn set(&mut self, slot: Slot, term: SimpleTerm) {
        let target = match slot {
            Slot::Subject => &mut self.subject,
            Slot::Predicate => &mut self.predicate,
            Slot::Object => &mut self.object,
        };
        if let Some(old) = target.replace(term) {
            log::trace!("{slot} {old} replaced");
        }
    }

    pub(crate) fn clear_object(&mut self) {
        self.object = None;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.subject.is_none() && self.predicate.is_none() && self.object.is_none()
    }

    /// The complete triple, or the first missing slot.
    pub(crate) fn triple(&self) -> Result<[&SimpleTerm; 3], Slot> {
        Ok([
            self.subject.as_ref().ok_or(Slot::Subject)?,
            self.predicate.as_ref().ok_or(Slot::Predicate)?,
            self.object.as_ref().ok_or(Slot::Object)?,
        ])
    }
}
