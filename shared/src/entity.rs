//! Persisted entity contract
//!
//! Every backend record carries an optional surrogate key. An absent key
//! means the record has not been saved yet; it is omitted from request
//! bodies so the backend assigns one on create.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: fmt::Display + fmt::Debug + Copy + PartialEq + Send + Sync;

    fn id(&self) -> Option<Self::Id>;

    /// Drop the key, turning the record into a create payload
    fn clear_id(&mut self);

    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Implement [`Entity`] for records keyed by `id: Option<i64>`
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entity::Entity for $ty {
                type Id = i64;

                fn id(&self) -> Option<i64> {
                    self.id
                }

                fn clear_id(&mut self) {
                    self.id = None;
                }
            }
        )+
    };
}

pub(crate) use impl_entity;
