use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::models::ImageUsage;
use crate::features::images::registry::{OwnerKind, UsageRegistry};
use crate::shared::constants::MAX_USAGE_LIST_SIZE;

/// Keeps `image_usage` rows in step with the content that references images.
///
/// Owning services call `sync` after every save and `forget` on every
/// delete. Both are deliberately infallible: a content save or delete must
/// never be rolled back because bookkeeping failed, so every error ends up
/// as a warning in the log instead of at the caller.
pub struct UsageTracker {
    pool: PgPool,
    registry: Arc<UsageRegistry>,
}

impl UsageTracker {
    pub fn new(pool: PgPool, registry: Arc<UsageRegistry>) -> Self {
        Self { pool, registry }
    }

    pub fn registry(&self) -> &UsageRegistry {
        &self.registry
    }

    /// Record the image currently referenced by an owner.
    ///
    /// `Some(image_id)` upserts the single usage row keyed on
    /// `(owner_type, owner_id)`; `None` clears it. Owners of an
    /// unregistered kind are skipped with a warning.
    pub async fn sync(
        &self,
        kind: OwnerKind,
        owner_id: Uuid,
        image_id: Option<Uuid>,
        owner_label: Option<&str>,
    ) {
        let Some(field_name) = self.registry.field_name(kind) else {
            tracing::warn!(
                "Usage sync skipped: owner kind '{}' is not registered",
                kind
            );
            return;
        };

        let outcome = match image_id {
            Some(image_id) => self
                .upsert_usage(kind, owner_id, image_id, field_name, owner_label)
                .await,
            None => self.delete_usage(kind, owner_id).await,
        };

        if let Err(e) = outcome {
            tracing::warn!(
                "Usage sync failed for {}/{} (image {:?}): {:?}",
                kind,
                owner_id,
                image_id,
                e
            );
        }
    }

    /// Drop the usage row of a deleted owner, if one exists.
    pub async fn forget(&self, kind: OwnerKind, owner_id: Uuid) {
        if let Err(e) = self.delete_usage(kind, owner_id).await {
            tracing::warn!("Usage cleanup failed for {}/{}: {:?}", kind, owner_id, e);
        }
    }

    /// Drop the usage rows of a batch of deleted owners (cascade deletes).
    pub async fn forget_many(&self, kind: OwnerKind, owner_ids: &[Uuid]) {
        if owner_ids.is_empty() {
            return;
        }

        let result = sqlx::query("DELETE FROM image_usage WHERE owner_type = $1 AND owner_id = ANY($2)")
            .bind(kind)
            .bind(owner_ids)
            .execute(&self.pool)
            .await;

        if let Err(e) = result {
            tracing::warn!(
                "Usage cleanup failed for {} owners of kind {}: {:?}",
                owner_ids.len(),
                kind,
                e
            );
        }
    }

    async fn upsert_usage(
        &self,
        kind: OwnerKind,
        owner_id: Uuid,
        image_id: Uuid,
        field_name: &str,
        owner_label: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO image_usage (owner_type, owner_id, image_id, field_name, owner_label)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (owner_type, owner_id)
            DO UPDATE SET
                image_id = EXCLUDED.image_id,
                field_name = EXCLUDED.field_name,
                owner_label = EXCLUDED.owner_label,
                updated_at = NOW()
            "#,
        )
        .bind(kind)
        .bind(owner_id)
        .bind(image_id)
        .bind(field_name)
        .bind(owner_label)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(())
    }

    async fn delete_usage(&self, kind: OwnerKind, owner_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM image_usage WHERE owner_type = $1 AND owner_id = $2")
            .bind(kind)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }

    /// Number of content records currently referencing an image.
    pub async fn usage_count(&self, image_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM image_usage WHERE image_id = $1")
                .bind(image_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(count)
    }

    /// Distinct owner kind names referencing an image, alphabetical.
    pub async fn owner_type_names(&self, image_id: Uuid) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT owner_type::TEXT FROM image_usage WHERE image_id = $1 ORDER BY 1",
        )
        .bind(image_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(names)
    }

    /// Detailed usage rows for an image, most recently touched first.
    ///
    /// Capped at `MAX_USAGE_LIST_SIZE` rows; `usage_count` carries the
    /// full total.
    pub async fn list_for_image(&self, image_id: Uuid) -> Result<Vec<ImageUsage>> {
        let usages = sqlx::query_as::<_, ImageUsage>(
            r#"
            SELECT id, owner_type, owner_id, image_id, field_name, owner_label,
                   created_at, updated_at
            FROM image_usage
            WHERE image_id = $1
            ORDER BY updated_at DESC
            LIMIT $2
            "#,
        )
        .bind(image_id)
        .bind(MAX_USAGE_LIST_SIZE)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(usages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::images::registry::default_registry;

    async fn migrated_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a Postgres instance");
        let pool = PgPool::connect(&url).await.expect("connect to Postgres");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        pool
    }

    async fn insert_image(pool: &PgPool, alt_text: &str) -> Uuid {
        sqlx::query_scalar("INSERT INTO images (alt_text) VALUES ($1) RETURNING id")
            .bind(alt_text)
            .fetch_one(pool)
            .await
            .expect("insert image")
    }

    #[tokio::test]
    #[ignore = "needs Postgres; set DATABASE_URL and run with --ignored"]
    async fn test_usage_rows_follow_saves_switches_and_deletes() {
        let pool = migrated_pool().await;
        let tracker = UsageTracker::new(pool.clone(), Arc::new(default_registry()));

        let first = insert_image(&pool, "tracker test first").await;
        let second = insert_image(&pool, "tracker test second").await;
        let owner = Uuid::new_v4();

        // First save records exactly one row for the owner.
        tracker
            .sync(OwnerKind::HeroSection, owner, Some(first), Some("Hero"))
            .await;
        assert_eq!(tracker.usage_count(first).await.unwrap(), 1);

        // Saving again without changes stays at one row.
        tracker
            .sync(OwnerKind::HeroSection, owner, Some(first), Some("Hero"))
            .await;
        assert_eq!(tracker.usage_count(first).await.unwrap(), 1);

        // Switching images moves the row instead of adding one.
        tracker
            .sync(OwnerKind::HeroSection, owner, Some(second), Some("Hero"))
            .await;
        assert_eq!(tracker.usage_count(first).await.unwrap(), 0);
        assert_eq!(tracker.usage_count(second).await.unwrap(), 1);

        let usages = tracker.list_for_image(second).await.unwrap();
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].owner_id, owner);
        assert_eq!(usages[0].owner_type, OwnerKind::HeroSection);

        // Clearing the reference removes the row.
        tracker.sync(OwnerKind::HeroSection, owner, None, None).await;
        assert_eq!(tracker.usage_count(second).await.unwrap(), 0);

        // Deleting the owner removes the row too.
        tracker
            .sync(OwnerKind::HeroSection, owner, Some(second), Some("Hero"))
            .await;
        tracker.forget(OwnerKind::HeroSection, owner).await;
        assert_eq!(tracker.usage_count(second).await.unwrap(), 0);

        for image_id in [first, second] {
            sqlx::query("DELETE FROM images WHERE id = $1")
                .bind(image_id)
                .execute(&pool)
                .await
                .expect("clean up image");
        }
    }
}
