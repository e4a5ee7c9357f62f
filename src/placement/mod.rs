pub(crate) mod candidates;
pub mod request;
pub mod result;
pub mod side;
pub mod solver;
