//!
//! Serde-related.
//!

use serde::{de, Deserialize, Deserializer};

use crate::{Secret, Strategy};

// Only deserialization is provided: a secret leaves the wrapper through an explicit
// `expose()`, never through `Serialize`.
impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
