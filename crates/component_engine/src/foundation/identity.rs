//! Unique identifier issuing and recycling
//!
//! An [`IdentityFactory`] hands out the smallest unused positive integer and
//! takes IDs back when their [`Identifiable`] owner is dropped. Owners keep
//! only a weak reference to the factory, so the factory may go away first.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Identifier type
pub type IdType = u32;

/// Reserved identifier meaning "no object"
pub const INVALID_ID: IdType = 0;

/// Identity factory shared by every object it issues IDs to
pub type SharedIdentityFactory = Rc<RefCell<IdentityFactory>>;

/// Identity errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity factory was null or already dropped
    #[error("identity factory is unavailable")]
    FactoryUnavailable,
}

/// Issues unique non-zero IDs and recycles released ones.
///
/// Issued IDs are kept sorted so the first gap can be found with a single
/// linear scan; the expected number of live IDs is small.
#[derive(Debug, Default)]
pub struct IdentityFactory {
    issued: Vec<IdType>,
}

impl IdentityFactory {
    /// Create a new factory with no issued IDs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new factory wrapped for sharing
    pub fn new_shared() -> SharedIdentityFactory {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Issue the smallest positive ID that is not currently in use
    pub fn generate_id(&mut self) -> IdType {
        let mut candidate: IdType = 1;

        for (index, &id) in self.issued.iter().enumerate() {
            if id != candidate {
                self.issued.insert(index, candidate);
                return candidate;
            }
            candidate += 1;
        }

        self.issued.push(candidate);
        candidate
    }

    /// Give an ID back; unknown IDs are ignored
    pub fn release_id(&mut self, id: IdType) {
        if let Ok(index) = self.issued.binary_search(&id) {
            self.issued.remove(index);
        }
    }

    /// Whether the ID is currently issued
    pub fn is_issued(&self, id: IdType) -> bool {
        self.issued.binary_search(&id).is_ok()
    }

    /// Currently issued IDs in ascending order
    pub fn issued_ids(&self) -> &[IdType] {
        &self.issued
    }
}

/// Owner of one ID from an [`IdentityFactory`].
///
/// The ID is released back to the factory on drop if the factory still exists.
#[derive(Debug)]
pub struct Identifiable {
    id: IdType,
    factory: Weak<RefCell<IdentityFactory>>,
}

impl Identifiable {
    /// Take a fresh ID from the given factory
    pub fn new(factory: &SharedIdentityFactory) -> Self {
        let id = factory.borrow_mut().generate_id();
        Self {
            id,
            factory: Rc::downgrade(factory),
        }
    }

    /// Take a fresh ID from a weakly referenced factory.
    ///
    /// Fails if the factory has already been dropped.
    pub fn from_weak(factory: &Weak<RefCell<IdentityFactory>>) -> Result<Self, IdentityError> {
        let factory = factory.upgrade().ok_or(IdentityError::FactoryUnavailable)?;
        Ok(Self::new(&factory))
    }

    /// The issued ID (never [`INVALID_ID`])
    pub fn id(&self) -> IdType {
        self.id
    }

    /// Whether the issuing factory is still alive
    pub fn has_factory(&self) -> bool {
        self.factory.strong_count() > 0
    }
}

impl Drop for Identifiable {
    fn drop(&mut self) {
        let Some(factory) = self.factory.upgrade() else {
            return;
        };

        match factory.try_borrow_mut() {
            Ok(mut factory) => factory.release_id(self.id),
            Err(_) => log::warn!("Identity factory busy, ID {} was not released", self.id),
        };
    }
}
