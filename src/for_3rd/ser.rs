//! Serialization of Rational.
//! The value is serialized as its exact fraction string.

use crate::rational::Rational;
use serde::{Serialize, Serializer};

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
