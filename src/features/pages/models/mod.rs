mod page;
mod payload;

pub use page::{Page, PageKind, PageStatus};
pub use payload::{
    AboutPayload, BlogPayload, ContactPayload, GuidePayload, PagePayload, PortfolioPayload,
    ProcessPayload, ServicesPayload,
};
