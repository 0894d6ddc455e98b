pub mod app;
pub mod capture;
pub mod console;
pub mod inventory;
pub mod report;

pub use crate::domain::model::Shoe;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
