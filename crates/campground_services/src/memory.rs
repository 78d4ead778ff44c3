use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::CampgroundStore;
use crate::types::*;

/// Campground store kept entirely in memory.
///
/// Records live in insertion order, so `list` matches the ordering of the
/// PostgreSQL store. Each instance is isolated from every other one.
#[derive(Default)]
pub struct InMemoryCampgroundStore {
    campgrounds: RwLock<Vec<Campground>>,
}

impl InMemoryCampgroundStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no campgrounds
    pub async fn is_empty(&self) -> bool {
        self.campgrounds.read().await.is_empty()
    }
}

#[async_trait]
impl CampgroundStore for InMemoryCampgroundStore {
    async fn list(&self) -> Result<Vec<Campground>, CampgroundError> {
        Ok(self.campgrounds.read().await.clone())
    }

    async fn create(&self, campground: NewCampground) -> Result<Campground, CampgroundError> {
        let created = Campground {
            id: Uuid::new_v4(),
            title: campground.title,
            location: campground.location,
            image: campground.image,
            description: campground.description,
            price: campground.price,
        };
        self.campgrounds.write().await.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Campground, CampgroundError> {
        let id = parse_campground_id(id)?;
        self.campgrounds
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CampgroundError::NotFound)
    }

    async fn update(
        &self,
        id: &str,
        changes: CampgroundChanges,
    ) -> Result<Campground, CampgroundError> {
        let id = parse_campground_id(id)?;
        let mut campgrounds = self.campgrounds.write().await;
        let campground = campgrounds
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CampgroundError::NotFound)?;
        changes.apply_to(campground);
        Ok(campground.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), CampgroundError> {
        let id = parse_campground_id(id)?;
        let mut campgrounds = self.campgrounds.write().await;
        let index = campgrounds
            .iter()
            .position(|c| c.id == id)
            .ok_or(CampgroundError::NotFound)?;
        campgrounds.remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, CampgroundError> {
        let mut campgrounds = self.campgrounds.write().await;
        let count = campgrounds.len() as u64;
        campgrounds.clear();
        Ok(count)
    }
}
