//! Request-scoped typed storage.
//!
//! Middlewares use `Extensions` to hand typed values to handlers further down
//! the chain without encoding them into headers.
//!
//! ```
//! use pickles::http_helpers::Extensions;
//!
//! struct AuthenticatedUser(String);
//!
//! let mut ext = Extensions::new();
//! ext.insert(AuthenticatedUser("gfmois".to_string()));
//!
//! assert_eq!(ext.get::<AuthenticatedUser>().unwrap().0, "gfmois");
//! ```

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

/// A map holding at most one value per type.
#[derive(Debug, Default)]
pub struct Extensions {
    map: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `val`, returning the previous value of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
