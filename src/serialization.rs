#![cfg(feature = "serde")]

use serde::{Serialize, Serializer};

use crate::{Snippet, Transform};

// Deserialize is deliberately not implemented: a snippet can only be built
// from text fixed at compile time, and deserialization would admit runtime
// input.

impl Serialize for Snippet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Transform::Unindent => serializer.serialize_unit_variant("Transform", 0, "Unindent"),
            Transform::Fold => serializer.serialize_unit_variant("Transform", 1, "Fold"),
        }
    }
}
