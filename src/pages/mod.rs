pub mod projects;

pub use projects::Projects;
