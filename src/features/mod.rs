pub mod ai;
pub mod company;
pub mod homepage;
pub mod images;
pub mod leads;
pub mod listings;
pub mod pages;
