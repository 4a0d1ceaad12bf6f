pub mod crud;
pub mod facade;
pub mod validation;

pub use crud::Page;
pub use facade::CrudService;
pub use validation::{RequestValidator, ValidationRule};
