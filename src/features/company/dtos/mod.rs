mod company_dto;

pub use company_dto::{
    CompanyDto, CompanyInfoDto, ContactPersonDto, CreateContactPersonDto,
    DeletePersonResponseDto, TeamMemberDto, UpdateContactPersonDto, UpsertCompanyDto,
};
