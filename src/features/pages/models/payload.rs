use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::pages::models::PageKind;

/// Kind-specific page content, stored in the `pages.payload` JSONB column.
///
/// Dispatch is keyed by the `page_kind` column rather than a serde tag, so
/// the stored JSON is just the variant's fields. Unknown or missing fields
/// decode to their defaults, which keeps old rows readable after a field
/// is added.
#[derive(Debug, Clone, PartialEq)]
pub enum PagePayload {
    /// Content lives in the home-page section tables
    Home,
    /// Content lives in the listings tables
    AvailableHomes,
    About(AboutPayload),
    Contact(ContactPayload),
    Process(ProcessPayload),
    Services(ServicesPayload),
    Portfolio(PortfolioPayload),
    Blog(BlogPayload),
    Guide(GuidePayload),
    Generic,
}

impl PagePayload {
    /// Decode a stored payload for the given kind. Malformed JSON decodes
    /// to the variant's defaults instead of failing the page load.
    pub fn from_value(kind: PageKind, value: &serde_json::Value) -> Self {
        fn decode<T: Default + for<'de> Deserialize<'de>>(value: &serde_json::Value) -> T {
            serde_json::from_value(value.clone()).unwrap_or_default()
        }

        match kind {
            PageKind::Home => PagePayload::Home,
            PageKind::AvailableHomes => PagePayload::AvailableHomes,
            PageKind::About => PagePayload::About(decode(value)),
            PageKind::Contact => PagePayload::Contact(decode(value)),
            PageKind::Process => PagePayload::Process(decode(value)),
            PageKind::Services => PagePayload::Services(decode(value)),
            PageKind::Portfolio => PagePayload::Portfolio(decode(value)),
            PageKind::Blog => PagePayload::Blog(decode(value)),
            PageKind::Guide => PagePayload::Guide(decode(value)),
            PageKind::Generic => PagePayload::Generic,
        }
    }

    /// Encode for storage: the variant's fields as a JSON object.
    pub fn to_value(&self) -> serde_json::Value {
        fn encode<T: Serialize>(payload: &T) -> serde_json::Value {
            serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({}))
        }

        match self {
            PagePayload::Home
            | PagePayload::AvailableHomes
            | PagePayload::Generic => serde_json::json!({}),
            PagePayload::About(p) => encode(p),
            PagePayload::Contact(p) => encode(p),
            PagePayload::Process(p) => encode(p),
            PagePayload::Services(p) => encode(p),
            PagePayload::Portfolio(p) => encode(p),
            PagePayload::Blog(p) => encode(p),
            PagePayload::Guide(p) => encode(p),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            PagePayload::Home => PageKind::Home,
            PagePayload::AvailableHomes => PageKind::AvailableHomes,
            PagePayload::About(_) => PageKind::About,
            PagePayload::Contact(_) => PageKind::Contact,
            PagePayload::Process(_) => PageKind::Process,
            PagePayload::Services(_) => PageKind::Services,
            PagePayload::Portfolio(_) => PageKind::Portfolio,
            PagePayload::Blog(_) => PageKind::Blog,
            PagePayload::Guide(_) => PageKind::Guide,
            PagePayload::Generic => PageKind::Generic,
        }
    }
}

/// "Our story" content for the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPayload {
    pub story_eyebrow: String,
    pub story_heading: String,
    pub story_description_1: String,
    pub story_description_2: String,
    pub story_image_url: String,
    pub story_quote: String,
    pub years_experience_value: String,
    pub projects_completed_value: String,
}

/// Header copy and contact details for the contact page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    pub contact_eyebrow: String,
    pub contact_heading: String,
    pub contact_description: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub map_image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessPayload {
    pub process_eyebrow: String,
    pub process_heading: String,
    pub process_description: String,
    pub quality_gate_label: String,
    pub quality_gate_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesPayload {
    pub services_eyebrow: String,
    pub services_heading: String,
    pub services_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioPayload {
    pub portfolio_heading: String,
    pub portfolio_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPayload {
    pub blog_eyebrow: String,
    pub blog_heading: String,
    pub blog_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidePayload {
    pub guide_eyebrow: String,
    pub guide_heading: String,
    pub guide_description: String,
    pub guide_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip_per_kind() {
        let payload = PagePayload::About(AboutPayload {
            story_eyebrow: "Our Story".to_string(),
            story_heading: "Built on trust".to_string(),
            years_experience_value: "15+".to_string(),
            ..Default::default()
        });

        let value = payload.to_value();
        assert_eq!(value["storyEyebrow"], "Our Story");

        let decoded = PagePayload::from_value(PageKind::About, &value);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_sectionless_kinds_encode_empty_objects() {
        assert_eq!(PagePayload::Home.to_value(), serde_json::json!({}));
        assert_eq!(
            PagePayload::AvailableHomes.to_value(),
            serde_json::json!({})
        );
        assert_eq!(PagePayload::Generic.to_value(), serde_json::json!({}));
    }

    #[test]
    fn test_malformed_payload_decodes_to_defaults() {
        let decoded = PagePayload::from_value(PageKind::Guide, &serde_json::json!("not an object"));
        assert_eq!(decoded, PagePayload::Guide(GuidePayload::default()));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let value = serde_json::json!({
            "blogHeading": "From the site office",
            "legacyField": 42
        });
        let decoded = PagePayload::from_value(PageKind::Blog, &value);
        assert_eq!(
            decoded,
            PagePayload::Blog(BlogPayload {
                blog_heading: "From the site office".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            PagePayload::Contact(ContactPayload::default()).kind(),
            PageKind::Contact
        );
        assert_eq!(PagePayload::AvailableHomes.kind(), PageKind::AvailableHomes);
    }
}
