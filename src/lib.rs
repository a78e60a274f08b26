pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod models;
pub mod pages;

pub use crate::core::{ProjectSource, ProjectStore};
pub use error::{FormError, LoadError, StoreError};
pub use models::{Project, SortCriterion};
