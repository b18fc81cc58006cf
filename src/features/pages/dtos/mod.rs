mod page_dto;

pub use page_dto::{
    CreatePageDto, DeletePageResponseDto, MenuItemDto, PageResponseDto, PublicPageDto,
    UpdatePageDto,
};
