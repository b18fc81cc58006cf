mod home;

pub use home::{
    DetailSection, Home, HomeDetail, HomeImage, HomeStatus, ListingsCtaSection,
    ListingsHeroSection,
};
