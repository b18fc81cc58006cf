mod listing_dto;

pub use listing_dto::{
    CreateHomeDto, DeleteHomeResponseDto, DetailGroupDto, DetailItemDto, DetailItemViewDto,
    GalleryEntryDto, GalleryImageDto, HomeCardDto, HomeDetailPageDto, HomeListQuery,
    HomeResponseDto, ListingsCtaViewDto, ListingsHeroViewDto, ListingsPageDto, ReplaceDetailsDto,
    ReplaceGalleryDto, UpdateHomeDto, UpsertListingsCtaDto, UpsertListingsHeroDto,
};
