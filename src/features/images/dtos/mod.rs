mod image_dto;

pub use image_dto::{
    CreateImageFromUrlDto, DeleteImageResponseDto, ImageDetailDto, ImageListItemDto,
    ImageListQuery, ImageResponseDto, ImageUsageDto, UpdateImageDto, UploadImageDto,
};
