//! Wire types shared with the backend API.
//!
//! Everything in here is plain data: `serde` structs mirroring the JSON the
//! backend sends and accepts. Money is carried as [`rust_decimal::Decimal`]
//! and encoded as JSON numbers.

pub mod analytics;
pub mod customer;
pub mod money;
pub mod product;
pub mod sale;
pub mod user;

pub use analytics::*;
pub use customer::*;
pub use money::*;
pub use product::*;
pub use sale::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
