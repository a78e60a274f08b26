pub mod project_card;
pub mod project_form;
pub mod project_list;
pub mod search_bar;
pub mod sort_select;

pub use project_card::ProjectCard;
pub use project_form::ProjectForm;
pub use project_list::ProjectList;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
