use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::pages::models::payload::PagePayload;

/// Marketing page kinds, matching the `page_kind` database enum.
///
/// The kind selects which payload variant a page carries and how the
/// public endpoint assembles it: `home` and `available_homes` pull their
/// content from section tables, everything else renders its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "page_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    About,
    Contact,
    AvailableHomes,
    Process,
    Services,
    Portfolio,
    Blog,
    Guide,
    Generic,
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Contact => "contact",
            PageKind::AvailableHomes => "available_homes",
            PageKind::Process => "process",
            PageKind::Services => "services",
            PageKind::Portfolio => "portfolio",
            PageKind::Blog => "blog",
            PageKind::Guide => "guide",
            PageKind::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}

/// Publication status derived from the publishing fields; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Draft,
    Scheduled,
    Published,
    Expired,
}

/// Database model for a page in the site tree.
///
/// Pages form a tree via `parent_id`; the slug chain from the root to a
/// page is its public path. Kind-specific content lives in `payload`
/// (JSONB) except for the `home` and `available_homes` kinds, whose
/// content is edited piecewise in section tables.
#[derive(Debug, Clone, FromRow)]
pub struct Page {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub kind: PageKind,
    pub title: String,
    pub slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub show_in_menus: bool,
    pub menu_order: i32,
    pub is_published: bool,
    pub go_live_at: Option<DateTime<Utc>>,
    pub expire_at: Option<DateTime<Utc>>,
    pub payload: Json<serde_json::Value>,
    /// Bumped on every update
    pub revision: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Derive the publication status at `now`.
    ///
    /// Unpublished pages are drafts regardless of their dates; published
    /// pages are scheduled before `go_live_at` and expired from
    /// `expire_at` on.
    pub fn status_at(&self, now: DateTime<Utc>) -> PageStatus {
        if !self.is_published {
            return PageStatus::Draft;
        }
        if let Some(go_live_at) = self.go_live_at {
            if go_live_at > now {
                return PageStatus::Scheduled;
            }
        }
        if let Some(expire_at) = self.expire_at {
            if expire_at <= now {
                return PageStatus::Expired;
            }
        }
        PageStatus::Published
    }

    pub fn status(&self) -> PageStatus {
        self.status_at(Utc::now())
    }

    /// Whether the page should be served publicly right now.
    pub fn is_live(&self) -> bool {
        self.status() == PageStatus::Published
    }

    /// Decode the stored payload for this page's kind.
    pub fn decoded_payload(&self) -> PagePayload {
        PagePayload::from_value(self.kind, &self.payload.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn page(is_published: bool) -> Page {
        Page {
            id: Uuid::new_v4(),
            parent_id: None,
            kind: PageKind::Generic,
            title: "Test".to_string(),
            slug: "test".to_string(),
            meta_title: String::new(),
            meta_description: String::new(),
            show_in_menus: false,
            menu_order: 0,
            is_published,
            go_live_at: None,
            expire_at: None,
            payload: Json(serde_json::json!({})),
            revision: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_draft_when_unpublished() {
        let mut p = page(false);
        // dates are irrelevant for drafts
        p.go_live_at = Some(Utc::now() - Duration::days(1));
        assert_eq!(p.status(), PageStatus::Draft);
    }

    #[test]
    fn test_status_scheduled_before_go_live() {
        let mut p = page(true);
        p.go_live_at = Some(Utc::now() + Duration::hours(2));
        assert_eq!(p.status(), PageStatus::Scheduled);
        assert!(!p.is_live());
    }

    #[test]
    fn test_status_expired_after_expire_at() {
        let mut p = page(true);
        p.expire_at = Some(Utc::now() - Duration::hours(1));
        assert_eq!(p.status(), PageStatus::Expired);
    }

    #[test]
    fn test_status_published_inside_window() {
        let mut p = page(true);
        p.go_live_at = Some(Utc::now() - Duration::days(1));
        p.expire_at = Some(Utc::now() + Duration::days(1));
        assert_eq!(p.status(), PageStatus::Published);
        assert!(p.is_live());
    }

    #[test]
    fn test_page_kind_display_matches_database_labels() {
        assert_eq!(PageKind::AvailableHomes.to_string(), "available_homes");
        assert_eq!(PageKind::Home.to_string(), "home");
    }
}
