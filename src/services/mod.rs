pub mod departments_service;
pub mod items_service;

pub use departments_service::DepartmentsService;
pub use items_service::ItemsService;
