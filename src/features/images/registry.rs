use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Content records that can hold an image reference, matching the
/// `owner_kind` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "owner_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    HeroSection,
    DiasporaSection,
    WhoWeAreSection,
    StatsSection,
    HomeImage,
    ContactPerson,
}

impl std::fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnerKind::HeroSection => write!(f, "hero_section"),
            OwnerKind::DiasporaSection => write!(f, "diaspora_section"),
            OwnerKind::WhoWeAreSection => write!(f, "who_we_are_section"),
            OwnerKind::StatsSection => write!(f, "stats_section"),
            OwnerKind::HomeImage => write!(f, "home_image"),
            OwnerKind::ContactPerson => write!(f, "contact_person"),
        }
    }
}

/// Registry of owner kinds whose image references are tracked.
///
/// Built once at startup; the tracker refuses to record usages for kinds
/// that were never registered, so a new image field only becomes tracked
/// by an explicit entry here.
#[derive(Debug, Default)]
pub struct UsageRegistry {
    fields: HashMap<OwnerKind, &'static str>,
}

impl UsageRegistry {
    pub fn builder() -> UsageRegistryBuilder {
        UsageRegistryBuilder {
            fields: HashMap::new(),
        }
    }

    /// Name of the image reference field on the given owner kind,
    /// or None when the kind is not registered.
    pub fn field_name(&self, kind: OwnerKind) -> Option<&'static str> {
        self.fields.get(&kind).copied()
    }

    pub fn is_registered(&self, kind: OwnerKind) -> bool {
        self.fields.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub struct UsageRegistryBuilder {
    fields: HashMap<OwnerKind, &'static str>,
}

impl UsageRegistryBuilder {
    /// Register an owner kind and the name of its image reference field.
    pub fn register(mut self, kind: OwnerKind, field_name: &'static str) -> Self {
        self.fields.insert(kind, field_name);
        self
    }

    pub fn build(self) -> UsageRegistry {
        UsageRegistry {
            fields: self.fields,
        }
    }
}

/// The registry used by the running service: every content model with an
/// image reference, paired with its field name.
pub fn default_registry() -> UsageRegistry {
    UsageRegistry::builder()
        .register(OwnerKind::HeroSection, "background_image")
        .register(OwnerKind::DiasporaSection, "featured_image")
        .register(OwnerKind::WhoWeAreSection, "background_image")
        .register(OwnerKind::StatsSection, "background_pattern")
        .register(OwnerKind::HomeImage, "image")
        .register(OwnerKind::ContactPerson, "portrait")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = UsageRegistry::builder()
            .register(OwnerKind::HomeImage, "image")
            .build();

        assert_eq!(registry.field_name(OwnerKind::HomeImage), Some("image"));
        assert_eq!(registry.field_name(OwnerKind::HeroSection), None);
        assert!(registry.is_registered(OwnerKind::HomeImage));
        assert!(!registry.is_registered(OwnerKind::ContactPerson));
    }

    #[test]
    fn test_default_registry_covers_all_owner_kinds() {
        let registry = default_registry();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.field_name(OwnerKind::HeroSection),
            Some("background_image")
        );
        assert_eq!(
            registry.field_name(OwnerKind::StatsSection),
            Some("background_pattern")
        );
        assert_eq!(
            registry.field_name(OwnerKind::ContactPerson),
            Some("portrait")
        );
    }

    #[test]
    fn test_owner_kind_display_matches_database_labels() {
        assert_eq!(OwnerKind::WhoWeAreSection.to_string(), "who_we_are_section");
        assert_eq!(OwnerKind::HomeImage.to_string(), "home_image");
    }
}
