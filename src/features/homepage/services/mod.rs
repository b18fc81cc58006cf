mod home_assembly;
mod homepage_service;

pub use home_assembly::HomeAssemblyService;
pub use homepage_service::{HomepageService, SectionSlot};
