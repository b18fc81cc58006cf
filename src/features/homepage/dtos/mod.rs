mod home_dto;
mod section_dto;

pub use home_dto::{
    ButtonViewDto, ChallengeViewDto, ClientReviewViewDto, DiasporaViewDto, FeatureViewDto,
    FeaturesViewDto, HeroViewDto, HomePayloadDto, NewsletterViewDto, PortfolioViewDto,
    ServiceViewDto, ServicesViewDto, StatViewDto, StatsViewDto, StepViewDto, StepsViewDto,
    WhoWeAreViewDto,
};
pub use section_dto::{
    ButtonDto, ChallengeDto, DeleteSectionResponseDto, FeatureDto, SectionSavedDto,
    ServiceItemDto, StatItemDto, StepDto, UpsertClientReviewDto, UpsertDiasporaDto, UpsertFeaturesDto, UpsertHeroDto,
    UpsertNewsletterDto, UpsertPortfolioDto, UpsertServicesDto, UpsertStatsDto, UpsertStepsDto,
    UpsertWhoWeAreDto,
};
