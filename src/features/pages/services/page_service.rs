use std::collections::HashMap;
use std::sync::Arc;

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::registry::OwnerKind;
use crate::features::images::tracker::UsageTracker;
use crate::features::pages::dtos::{CreatePageDto, MenuItemDto, UpdatePageDto};
use crate::features::pages::models::{Page, PageKind, PagePayload};
use crate::shared::text::slugify;
use crate::shared::validation::SLUG_REGEX;

const PAGE_COLUMNS: &str = "id, parent_id, kind, title, slug, meta_title, meta_description, \
     show_in_menus, menu_order, is_published, go_live_at, expire_at, payload, revision, \
     created_at, updated_at";

/// SQL condition for pages that should be served publicly right now
const LIVE_CONDITION: &str = "is_published \
     AND (go_live_at IS NULL OR go_live_at <= NOW()) \
     AND (expire_at IS NULL OR expire_at > NOW())";

/// Section tables owning tracked image references, keyed by page.
/// Consulted when a page subtree is deleted so stale usage rows go with it.
const TRACKED_SECTION_TABLES: &[(&str, OwnerKind)] = &[
    ("hero_sections", OwnerKind::HeroSection),
    ("diaspora_sections", OwnerKind::DiasporaSection),
    ("who_we_are_sections", OwnerKind::WhoWeAreSection),
    ("stats_sections", OwnerKind::StatsSection),
];

/// Service for the page tree
pub struct PageService {
    pool: PgPool,
    tracker: Arc<UsageTracker>,
}

impl PageService {
    pub fn new(pool: PgPool, tracker: Arc<UsageTracker>) -> Self {
        Self { pool, tracker }
    }

    pub async fn create(&self, dto: CreatePageDto) -> Result<Page> {
        let slug = resolve_slug(dto.slug.as_deref(), &dto.title)?;

        if let Some(parent_id) = dto.parent_id {
            // Parent must exist; the FK would catch it but this gives a 404
            self.fetch(parent_id).await?;
        }

        // Normalize the payload through the typed variant so malformed or
        // foreign fields never reach storage
        let payload = PagePayload::from_value(
            dto.kind,
            dto.payload.as_ref().unwrap_or(&serde_json::json!({})),
        )
        .to_value();

        let page = sqlx::query_as::<_, Page>(&format!(
            r#"
            INSERT INTO pages (parent_id, kind, title, slug, meta_title, meta_description,
                               show_in_menus, menu_order, is_published, go_live_at, expire_at,
                               payload)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {PAGE_COLUMNS}
            "#
        ))
        .bind(dto.parent_id)
        .bind(dto.kind)
        .bind(&dto.title)
        .bind(&slug)
        .bind(dto.meta_title.unwrap_or_default())
        .bind(dto.meta_description.unwrap_or_default())
        .bind(dto.show_in_menus)
        .bind(dto.menu_order)
        .bind(dto.is_published)
        .bind(dto.go_live_at)
        .bind(dto.expire_at)
        .bind(Json(payload))
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        info!("Page created: id={}, kind={}, slug={}", page.id, page.kind, page.slug);

        Ok(page)
    }

    pub async fn get(&self, id: Uuid) -> Result<Page> {
        self.fetch(id).await
    }

    /// All pages, tree-friendly order (roots and siblings by menu order).
    pub async fn list(&self) -> Result<Vec<Page>> {
        let pages = sqlx::query_as::<_, Page>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages ORDER BY parent_id NULLS FIRST, menu_order, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(pages)
    }

    /// Update a page; every save bumps the revision counter.
    pub async fn update(&self, id: Uuid, dto: UpdatePageDto) -> Result<Page> {
        let current = self.fetch(id).await?;

        let slug = match dto.slug.as_deref() {
            Some(slug) => Some(resolve_slug(Some(slug), &current.title)?),
            None => None,
        };

        let payload = dto
            .payload
            .as_ref()
            .map(|value| Json(PagePayload::from_value(current.kind, value).to_value()));

        // The publish window is applied unconditionally so a scheduled
        // go-live or expiry can be cleared.
        let page = sqlx::query_as::<_, Page>(&format!(
            r#"
            UPDATE pages
            SET title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                meta_title = COALESCE($4, meta_title),
                meta_description = COALESCE($5, meta_description),
                show_in_menus = COALESCE($6, show_in_menus),
                menu_order = COALESCE($7, menu_order),
                is_published = COALESCE($8, is_published),
                go_live_at = $9,
                expire_at = $10,
                payload = COALESCE($11, payload),
                revision = revision + 1,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PAGE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.title)
        .bind(slug)
        .bind(dto.meta_title)
        .bind(dto.meta_description)
        .bind(dto.show_in_menus)
        .bind(dto.menu_order)
        .bind(dto.is_published)
        .bind(dto.go_live_at)
        .bind(dto.expire_at)
        .bind(payload)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(page)
    }

    /// Delete a page and its subtree.
    ///
    /// Sections cascade in the database; their usage rows are cleared
    /// explicitly first so the reverse index never outlives its owners.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.fetch(id).await?;

        let page_ids = self.collect_subtree_ids(id).await?;

        for (table, kind) in TRACKED_SECTION_TABLES {
            let owner_ids: Vec<Uuid> = sqlx::query_scalar(&format!(
                "SELECT id FROM {table} WHERE page_id = ANY($1)"
            ))
            .bind(&page_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

            self.tracker.forget_many(*kind, &owner_ids).await;
        }

        sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Page deleted: id={} ({} pages in subtree)", id, page_ids.len());

        Ok(())
    }

    /// Resolve a public path ("process", "guides/diaspora") down the slug
    /// chain. Only live pages resolve; a draft anywhere in the chain is a
    /// 404.
    pub async fn resolve_path(&self, path: &str) -> Result<Page> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return self.root_page().await;
        }

        let mut page = self
            .fetch_live_child(None, segments[0])
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page not found: {}", path)))?;

        for segment in &segments[1..] {
            page = self
                .fetch_live_child(Some(page.id), segment)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Page not found: {}", path)))?;
        }

        Ok(page)
    }

    /// The site's root page: a live root of kind `home` when one exists,
    /// else any live root.
    pub async fn root_page(&self) -> Result<Page> {
        let home = sqlx::query_as::<_, Page>(&format!(
            r#"
            SELECT {PAGE_COLUMNS} FROM pages
            WHERE parent_id IS NULL AND kind = 'home' AND {LIVE_CONDITION}
            ORDER BY created_at
            LIMIT 1
            "#
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if let Some(page) = home {
            return Ok(page);
        }

        sqlx::query_as::<_, Page>(&format!(
            r#"
            SELECT {PAGE_COLUMNS} FROM pages
            WHERE parent_id IS NULL AND {LIVE_CONDITION}
            ORDER BY menu_order, created_at
            LIMIT 1
            "#
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("No root page found".to_string()))
    }

    /// Navigation menu: live pages flagged for menus, with their full
    /// slug-chain paths.
    pub async fn menu(&self) -> Result<Vec<MenuItemDto>> {
        let live_pages = sqlx::query_as::<_, Page>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE {LIVE_CONDITION}"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let by_id: HashMap<Uuid, &Page> = live_pages.iter().map(|p| (p.id, p)).collect();

        let mut items: Vec<MenuItemDto> = live_pages
            .iter()
            .filter(|p| p.show_in_menus)
            .filter_map(|page| {
                build_path(page, &by_id).map(|path| MenuItemDto {
                    title: page.title.clone(),
                    path,
                    kind: page.kind,
                    menu_order: page.menu_order,
                })
            })
            .collect();

        items.sort_by(|a, b| (a.menu_order, &a.title).cmp(&(b.menu_order, &b.title)));

        Ok(items)
    }

    async fn fetch(&self, id: Uuid) -> Result<Page> {
        sqlx::query_as::<_, Page>(&format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Page with id {} not found", id)))
    }

    async fn fetch_live_child(
        &self,
        parent_id: Option<Uuid>,
        slug: &str,
    ) -> Result<Option<Page>> {
        match parent_id {
            Some(parent_id) => sqlx::query_as::<_, Page>(&format!(
                "SELECT {PAGE_COLUMNS} FROM pages WHERE parent_id = $1 AND slug = $2 AND {LIVE_CONDITION}"
            ))
            .bind(parent_id)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database),
            None => sqlx::query_as::<_, Page>(&format!(
                "SELECT {PAGE_COLUMNS} FROM pages WHERE parent_id IS NULL AND slug = $1 AND {LIVE_CONDITION}"
            ))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database),
        }
    }

    /// The page and all its descendants, walked level by level.
    async fn collect_subtree_ids(&self, root: Uuid) -> Result<Vec<Uuid>> {
        let mut all = vec![root];
        let mut frontier = vec![root];

        while !frontier.is_empty() {
            let children: Vec<Uuid> =
                sqlx::query_scalar("SELECT id FROM pages WHERE parent_id = ANY($1)")
                    .bind(&frontier)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)?;

            frontier = children.clone();
            all.extend(children);
        }

        Ok(all)
    }
}

/// A provided slug must match the slug format; a missing one is generated
/// from the title.
fn resolve_slug(provided: Option<&str>, title: &str) -> Result<String> {
    match provided {
        Some(slug) if !slug.trim().is_empty() => {
            let slug = slug.trim();
            if !SLUG_REGEX.is_match(slug) {
                return Err(AppError::Validation(format!(
                    "Invalid slug '{}': use lowercase letters, digits and single hyphens",
                    slug
                )));
            }
            Ok(slug.to_string())
        }
        _ => {
            let slug = slugify(title);
            if slug.is_empty() {
                return Err(AppError::Validation(
                    "Cannot derive a slug from the title; provide one explicitly".to_string(),
                ));
            }
            Ok(slug)
        }
    }
}

/// Slug chain from the root to this page, or None when an ancestor is not
/// live (the page is unreachable and should not appear in menus).
fn build_path(page: &Page, by_id: &HashMap<Uuid, &Page>) -> Option<String> {
    let mut segments = vec![page.slug.clone()];
    let mut current = page;

    while let Some(parent_id) = current.parent_id {
        current = by_id.get(&parent_id)?;
        segments.push(current.slug.clone());
    }

    segments.reverse();
    Some(segments.join("/"))
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(
                "A sibling page with this slug already exists".to_string(),
            );
        }
    }
    AppError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn page_with(id: Uuid, parent_id: Option<Uuid>, slug: &str) -> Page {
        Page {
            id,
            parent_id,
            kind: PageKind::Generic,
            title: slug.to_string(),
            slug: slug.to_string(),
            meta_title: String::new(),
            meta_description: String::new(),
            show_in_menus: true,
            menu_order: 0,
            is_published: true,
            go_live_at: None,
            expire_at: None,
            payload: Json(serde_json::json!({})),
            revision: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_slug_accepts_valid_input() {
        assert_eq!(resolve_slug(Some("our-process"), "ignored").unwrap(), "our-process");
    }

    #[test]
    fn test_resolve_slug_rejects_invalid_input() {
        assert!(resolve_slug(Some("Our Process"), "ignored").is_err());
        assert!(resolve_slug(Some("-bad-"), "ignored").is_err());
    }

    #[test]
    fn test_resolve_slug_generates_from_title() {
        assert_eq!(resolve_slug(None, "Available Homes").unwrap(), "available-homes");
        assert_eq!(resolve_slug(Some("  "), "Available Homes").unwrap(), "available-homes");
        assert!(resolve_slug(None, "!!!").is_err());
    }

    #[test]
    fn test_build_path_walks_ancestors() {
        let root_id = Uuid::new_v4();
        let child_id = Uuid::new_v4();
        let root = page_with(root_id, None, "guides");
        let child = page_with(child_id, Some(root_id), "diaspora");

        let by_id: HashMap<Uuid, &Page> = [(root_id, &root), (child_id, &child)].into();

        assert_eq!(build_path(&child, &by_id), Some("guides/diaspora".to_string()));
        assert_eq!(build_path(&root, &by_id), Some("guides".to_string()));
    }

    #[test]
    fn test_build_path_none_when_ancestor_missing() {
        let child = page_with(Uuid::new_v4(), Some(Uuid::new_v4()), "orphan");
        let by_id: HashMap<Uuid, &Page> = [(child.id, &child)].into();

        assert_eq!(build_path(&child, &by_id), None);
    }

    fn empty_update() -> UpdatePageDto {
        UpdatePageDto {
            title: None,
            slug: None,
            meta_title: None,
            meta_description: None,
            show_in_menus: None,
            menu_order: None,
            is_published: None,
            go_live_at: None,
            expire_at: None,
            payload: None,
        }
    }

    #[tokio::test]
    #[ignore = "needs Postgres; set DATABASE_URL and run with --ignored"]
    async fn test_update_clears_the_publish_window() {
        use crate::features::images::registry::default_registry;

        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must point at a Postgres instance");
        let pool = PgPool::connect(&url).await.expect("connect to Postgres");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");

        let tracker = Arc::new(UsageTracker::new(pool.clone(), Arc::new(default_registry())));
        let service = PageService::new(pool, tracker);

        let created = service
            .create(CreatePageDto {
                kind: PageKind::Generic,
                title: "Publish window".to_string(),
                slug: Some(format!("publish-window-{}", Uuid::new_v4().simple())),
                parent_id: None,
                meta_title: None,
                meta_description: None,
                show_in_menus: false,
                menu_order: 0,
                is_published: true,
                go_live_at: Some(Utc::now()),
                expire_at: Some(Utc::now() + chrono::Duration::days(30)),
                payload: None,
            })
            .await
            .expect("create page");
        assert!(created.go_live_at.is_some());
        assert!(created.expire_at.is_some());

        let updated = service
            .update(created.id, empty_update())
            .await
            .expect("update page");

        assert!(updated.go_live_at.is_none());
        assert!(updated.expire_at.is_none());
        assert_eq!(updated.revision, created.revision + 1);

        service.delete(created.id).await.expect("clean up page");
    }
}
