pub mod vector;

pub use vector::{dot, squared_error};
