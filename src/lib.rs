pub mod application;
pub mod domain;

pub use domain::*;
