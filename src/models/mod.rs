pub mod department;
pub mod item;

pub use department::{Department, DepartmentPayload};
pub use item::{Item, ItemPayload};
