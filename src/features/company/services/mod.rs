mod company_service;

pub use company_service::CompanyService;
