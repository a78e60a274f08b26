pub mod data_source;
pub mod notify;

pub use data_source::*;
pub use notify::*;
