// Application layer - string-facing helpers over the domain ledger.
// The domain stays infallible; parsing and rendering live here.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
