mod company;

pub use company::{osm_embed_url, osm_full_url, Company, ContactPerson, ContactRole};
