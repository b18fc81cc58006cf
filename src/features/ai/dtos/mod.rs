mod ai_dto;

pub use ai_dto::{GenerateContentDto, GeneratedContentDto};
