pub mod organize;
pub mod service;

pub use organize::OrganizeService;
pub use service::DirectoryService;
