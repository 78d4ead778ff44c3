use async_trait::async_trait;

use crate::types::{Campground, CampgroundChanges, CampgroundError, NewCampground};

/// Persistence boundary for campground records.
///
/// Identifiers are accepted as raw path text; implementations report
/// `InvalidIdentifier` for text that is not a UUID and `NotFound` for a
/// well-formed id with no record.
#[async_trait]
pub trait CampgroundStore: Send + Sync {
    /// Returns every campground in insertion order.
    async fn list(&self) -> Result<Vec<Campground>, CampgroundError>;

    /// Persists a new campground under a freshly generated id.
    async fn create(&self, campground: NewCampground) -> Result<Campground, CampgroundError>;

    /// Fetches one campground by id.
    async fn get(&self, id: &str) -> Result<Campground, CampgroundError>;

    /// Overwrites the present fields of one campground and returns the result.
    async fn update(
        &self,
        id: &str,
        changes: CampgroundChanges,
    ) -> Result<Campground, CampgroundError>;

    /// Removes one campground.
    async fn delete(&self, id: &str) -> Result<(), CampgroundError>;

    /// Removes every campground and returns how many were deleted.
    async fn delete_all(&self) -> Result<u64, CampgroundError>;
}
