pub mod path;
pub mod style;
