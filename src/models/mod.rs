pub mod form;
pub mod project;
pub mod sort;

pub use form::{DraftField, FormVisibility, ProjectDraft};
pub use project::Project;
pub use sort::SortCriterion;
