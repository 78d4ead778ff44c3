use async_trait::async_trait;
use sqlx::PgPool;

use crate::store::CampgroundStore;
use crate::types::*;

/// Campground store backed by the `campgrounds` table in PostgreSQL
#[derive(Clone)]
pub struct PgCampgroundStore {
    pool: PgPool,
}

impl PgCampgroundStore {
    /// Creates a new instance of `PgCampgroundStore` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampgroundStore for PgCampgroundStore {
    async fn list(&self) -> Result<Vec<Campground>, CampgroundError> {
        let campgrounds = sqlx::query_as::<_, Campground>(
            r#"
            SELECT id, title, location, image, description, price
            FROM campgrounds
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        log::debug!("Listed {} campgrounds", campgrounds.len());
        Ok(campgrounds)
    }

    async fn create(&self, campground: NewCampground) -> Result<Campground, CampgroundError> {
        let created = sqlx::query_as::<_, Campground>(
            r#"
            INSERT INTO campgrounds (title, location, image, description, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, location, image, description, price
            "#,
        )
        .bind(&campground.title)
        .bind(&campground.location)
        .bind(&campground.image)
        .bind(&campground.description)
        .bind(campground.price)
        .fetch_one(&self.pool)
        .await?;

        log::debug!("Created campground {}", created.id);
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Campground, CampgroundError> {
        let id = parse_campground_id(id)?;

        sqlx::query_as::<_, Campground>(
            r#"
            SELECT id, title, location, image, description, price
            FROM campgrounds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CampgroundError::NotFound)
    }

    async fn update(
        &self,
        id: &str,
        changes: CampgroundChanges,
    ) -> Result<Campground, CampgroundError> {
        let id = parse_campground_id(id)?;

        // NULL parameters keep the stored value.
        let updated = sqlx::query_as::<_, Campground>(
            r#"
            UPDATE campgrounds SET
                title = COALESCE($2, title),
                location = COALESCE($3, location),
                image = COALESCE($4, image),
                description = COALESCE($5, description),
                price = COALESCE($6, price)
            WHERE id = $1
            RETURNING id, title, location, image, description, price
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.location)
        .bind(&changes.image)
        .bind(&changes.description)
        .bind(changes.price)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CampgroundError::NotFound)?;

        log::debug!("Updated campground {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), CampgroundError> {
        let id = parse_campground_id(id)?;

        let result = sqlx::query("DELETE FROM campgrounds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CampgroundError::NotFound);
        }

        log::debug!("Deleted campground {}", id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, CampgroundError> {
        let result = sqlx::query("DELETE FROM campgrounds")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
