//! Three-state field marker for partial updates.
//!
//! A nullable column in an update request carries three distinct meanings:
//! the field is absent (leave the stored value unchanged), the field is an
//! explicit JSON `null` (clear the column to NULL), or the field carries a
//! value (replace the column). A plain `Option<T>` collapses the first two,
//! so update DTOs use [`Patch<T>`] for every nullable column.

use serde::{Deserialize, Deserializer};

/// State of one nullable field in a partial-update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field was not present in the request; keep the stored value.
    #[default]
    Absent,
    /// Field was an explicit `null`; clear the column.
    Null,
    /// Field carried a value; replace the column.
    Value(T),
}

impl<T> Patch<T> {
    /// `true` unless the field was absent from the request.
    pub fn is_set(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    /// The replacement value to bind: `Some` for `Value`, `None` for
    /// `Null` and `Absent`. Only meaningful when [`Patch::is_set`] is true.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Null | Patch::Absent => None,
        }
    }
}

impl Patch<String> {
    /// String-deref convenience mirroring `Option::as_deref`.
    pub fn as_deref(&self) -> Option<&str> {
        self.as_option().map(String::as_str)
    }
}

/// Deserializes `null` to `Null` and any value to `Value`. `Absent` is only
/// produced by `#[serde(default)]` when the key is missing entirely, so DTO
/// fields of this type must carry that attribute.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
