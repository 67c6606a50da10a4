//! Pet store
//!
//! The store is the single owner of all pet records for the lifetime of the
//! process. It is shared across request handlers behind an `Arc` and guards
//! the collection with an `RwLock`, so mutations made by one request stay
//! visible to every later one.

use tokio::sync::RwLock;

use crate::types::{Pet, PetId};

/// In-memory pet collection, kept in insertion order
pub struct PetStore {
    /// Pets in insertion order (protected by RwLock for concurrent access)
    pets: RwLock<Vec<Pet>>,
}

impl PetStore {
    /// Create an empty store
    pub fn empty() -> Self {
        Self {
            pets: RwLock::new(Vec::new()),
        }
    }

    /// Create a store holding the five stock entries
    ///
    /// The seed list stands in for a persistence layer; it is rebuilt from
    /// these literals on every process start.
    pub fn seeded() -> Self {
        let pets = vec![
            Pet::new(1, "Bird"),
            Pet::new(2, "Dog"),
            Pet::new(3, "Cat"),
            Pet::new(4, "Fish"),
            Pet::new(5, "Spider"),
        ];

        Self {
            pets: RwLock::new(pets),
        }
    }

    /// Every pet currently held, in insertion order
    pub async fn list(&self) -> Vec<Pet> {
        self.pets.read().await.clone()
    }

    /// First pet whose id matches, or `None` on a miss
    pub async fn get(&self, id: PetId) -> Option<Pet> {
        self.pets
            .read()
            .await
            .iter()
            .find(|pet| pet.id == id)
            .cloned()
    }

    /// Append a pet unconditionally
    ///
    /// The id comes from the caller and is not checked against existing
    /// entries; duplicates are allowed and resolve to the first-inserted
    /// match on lookup.
    pub async fn create(&self, pet: Pet) {
        self.pets.write().await.push(pet);
    }

    /// Rename the first pet with a matching id and return the updated record
    ///
    /// A miss returns `None` and leaves the collection untouched.
    pub async fn update_name(&self, id: PetId, name: String) -> Option<Pet> {
        let mut pets = self.pets.write().await;
        let pet = pets.iter_mut().find(|pet| pet.id == id)?;
        pet.name = name;
        Some(pet.clone())
    }

    /// Number of pets currently held
    pub async fn len(&self) -> usize {
        self.pets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pets.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = PetStore::empty();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn duplicate_ids_resolve_to_first_inserted() {
        let store = PetStore::empty();
        store.create(Pet::new(7, "First")).await;
        store.create(Pet::new(7, "Second")).await;

        let found = store.get(7).await.unwrap();
        assert_eq!(found.name, "First");

        let updated = store.update_name(7, "Renamed".to_string()).await.unwrap();
        assert_eq!(updated.name, "Renamed");

        // Only the first entry is renamed; the shadowed duplicate keeps its name.
        let pets = store.list().await;
        assert_eq!(pets[0], Pet::new(7, "Renamed"));
        assert_eq!(pets[1], Pet::new(7, "Second"));
    }
}
