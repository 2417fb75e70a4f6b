use std::mem;

/// An owned key/value pair held by an occupied slot. The table owns both
/// strings outright; they are dropped on overwrite, removal, or table drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// One position in the slot array.
///
/// `Tombstone` marks a slot whose entry was removed but which must stay a
/// probe-sequence marker so chains inserted past it remain reachable. The
/// tagged state replaces the address-compared sentinel item some
/// implementations share globally, which can never be confused with a live
/// entry or freed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Entry),
}

impl Slot {
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub(crate) fn as_occupied(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn as_occupied_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Takes the entry out of an occupied slot, leaving a tombstone behind.
    /// Empty slots and existing tombstones are left untouched.
    pub(crate) fn take(&mut self) -> Option<Entry> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(entry) => Some(entry),
            other => {
                *self = other;
                None
            }
        }
    }
}
