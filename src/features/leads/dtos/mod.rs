mod lead_dto;

pub use lead_dto::{
    ContactSubmissionDto, CreateContactSubmissionDto, CreatePropertyOfferDto,
    CreateShowingRequestDto, LeadListQuery, LeadReceivedDto, PropertyOfferDto, ShowingRequestDto,
    UpdateOfferStatusDto, UpdateShowingStatusDto, UpdateSubmissionStatusDto,
};
