//! Tri-state field wrapper for partial updates.
//!
//! JSON PATCH bodies need to distinguish "field absent" (leave it alone)
//! from "field explicitly null" (clear it) for nullable columns like
//! `deleted_at` and `started_at` that gate visibility. A bare `Option`
//! collapses those two cases, so update DTOs use [`Patch`] instead.

use serde::{Deserialize, Deserializer};

/// One field of a partial-update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field was not present in the request; do not touch it.
    #[default]
    Unset,
    /// Field was explicitly `null`; clear it.
    Null,
    /// Field was present with a value.
    Value(T),
}

impl<T> Patch<T> {
    /// True when the request did not mention this field.
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// The concrete value to write, with `Null` as `None`.
    ///
    /// Callers must check [`is_unset`](Self::is_unset) first; an `Unset`
    /// field has no value to write.
    pub fn as_write(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }
}

// serde sees a missing field as "use Default" (Unset) when the DTO field is
// annotated `#[serde(default)]`, and a present field comes through here:
// `null` deserializes to `Null`, anything else to `Value`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
