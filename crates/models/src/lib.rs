pub mod team;
pub mod matches;
pub mod form;
pub mod predictions;
pub mod error;

pub use team::*;
pub use matches::*;
pub use form::*;
pub use predictions::*;
pub use error::*;
