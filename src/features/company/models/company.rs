//! Company profile models: the singleton-style `companies` row plus named
//! contact persons. One company row is expected but not enforced.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub trading_name: String,
    pub tagline: String,
    pub registration_number: String,
    pub tax_identification_number: String,
    pub vat_number: String,
    pub year_founded: Option<i32>,
    pub company_type: String,
    pub country_of_incorporation: String,
    pub physical_address: String,
    pub city: String,
    pub county: String,
    pub country: String,
    pub postal_code: String,
    pub po_box: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub whatsapp_number: String,
    pub primary_email: String,
    pub support_email: String,
    pub website: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub youtube_url: String,
    pub tiktok_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Display name, preferring the trading name over the legal name.
    pub fn display_name(&self) -> &str {
        if self.trading_name.is_empty() {
            &self.name
        } else {
            &self.trading_name
        }
    }

    /// OpenStreetMap iframe src for the office/HQ location.
    pub fn osm_embed_url(&self) -> String {
        osm_embed_url(self.latitude, self.longitude, &self.city, &self.country)
    }

    /// OpenStreetMap link for "View larger map".
    pub fn osm_full_url(&self) -> String {
        osm_full_url(self.latitude, self.longitude, &self.city, &self.country)
    }
}

/// OSM embed URL from a GPS pin, with a ~900 m bounding box. Falls back to
/// a text search on city + country when the pin is missing.
pub fn osm_embed_url(
    latitude: Option<Decimal>,
    longitude: Option<Decimal>,
    city: &str,
    country: &str,
) -> String {
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        let delta = Decimal::new(8, 3);
        return format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={},{}",
            lon - delta,
            lat - delta,
            lon + delta,
            lat + delta,
            lat,
            lon
        );
    }
    match location_text(city, country) {
        Some(text) => format!(
            "https://www.openstreetmap.org/export/embed.html?mlat=0&mlon=0#map=14/0/0&query={}",
            urlencoding::encode(&text)
        ),
        None => String::new(),
    }
}

/// Full OSM URL from a GPS pin, falling back to a text search, then to the
/// bare OSM homepage.
pub fn osm_full_url(
    latitude: Option<Decimal>,
    longitude: Option<Decimal>,
    city: &str,
    country: &str,
) -> String {
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        return format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=16/{lat}/{lon}"
        );
    }
    match location_text(city, country) {
        Some(text) => format!(
            "https://www.openstreetmap.org/search?query={}",
            urlencoding::encode(&text)
        ),
        None => "https://www.openstreetmap.org/".to_string(),
    }
}

fn location_text(city: &str, country: &str) -> Option<String> {
    let text = [city, country]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Role of a named contact, matching the `contact_role` database enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "contact_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    Ceo,
    Coo,
    Cfo,
    Sales,
    Legal,
    CustomerService,
    Technical,
    Admin,
    #[default]
    Other,
}

impl ContactRole {
    pub fn label(&self) -> &'static str {
        match self {
            ContactRole::Ceo => "CEO / Managing Director",
            ContactRole::Coo => "COO / Operations Director",
            ContactRole::Cfo => "CFO / Finance Director",
            ContactRole::Sales => "Sales & Marketing",
            ContactRole::Legal => "Legal & Compliance",
            ContactRole::CustomerService => "Customer Service",
            ContactRole::Technical => "Technical / Engineering",
            ContactRole::Admin => "Administration",
            ContactRole::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ContactPerson {
    pub id: Uuid,
    pub company_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: ContactRole,
    pub title: String,
    pub portrait_image_id: Option<Uuid>,
    pub bio: String,
    pub is_public: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactPerson {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_osm_embed_url_with_pin() {
        let lat = Decimal::from_str("-1.286389").unwrap();
        let lon = Decimal::from_str("36.817223").unwrap();
        let url = osm_embed_url(Some(lat), Some(lon), "Nairobi", "Kenya");
        assert_eq!(
            url,
            "https://www.openstreetmap.org/export/embed.html\
             ?bbox=36.809223,-1.294389,36.825223,-1.278389\
             &layer=mapnik&marker=-1.286389,36.817223"
        );
    }

    #[test]
    fn test_osm_embed_url_falls_back_to_search() {
        let url = osm_embed_url(None, None, "Nairobi", "Kenya");
        assert!(url.contains("query=Nairobi%2C%20Kenya"));

        assert_eq!(osm_embed_url(None, None, "", ""), "");
    }

    #[test]
    fn test_osm_full_url() {
        let lat = Decimal::from_str("-1.286389").unwrap();
        let lon = Decimal::from_str("36.817223").unwrap();
        let url = osm_full_url(Some(lat), Some(lon), "", "");
        assert_eq!(
            url,
            "https://www.openstreetmap.org/?mlat=-1.286389&mlon=36.817223#map=16/-1.286389/36.817223"
        );

        assert_eq!(
            osm_full_url(None, None, "", ""),
            "https://www.openstreetmap.org/"
        );
    }

    #[test]
    fn test_full_name_trims() {
        let mut person = sample_person();
        assert_eq!(person.full_name(), "Grace Wanjiru");

        person.last_name = String::new();
        assert_eq!(person.full_name(), "Grace");
    }

    fn sample_person() -> ContactPerson {
        ContactPerson {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Wanjiru".to_string(),
            email: "grace@example.com".to_string(),
            phone: String::new(),
            role: ContactRole::Sales,
            title: "Head of Sales".to_string(),
            portrait_image_id: None,
            bio: String::new(),
            is_public: true,
            position: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
