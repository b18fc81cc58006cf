mod lead;

pub use lead::{
    ContactSubject, ContactSubmission, FinancingType, OfferStatus, PreferredTime, PropertyOffer,
    ShowingRequest, ShowingStatus, SubmissionStatus,
};
