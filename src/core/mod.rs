pub mod services;
pub mod store;
pub mod timestamp;

pub use store::{ProjectSource, ProjectStore};
