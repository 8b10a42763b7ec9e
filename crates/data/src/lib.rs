pub mod dates;
pub mod loader;
pub mod repository;
pub mod assets;

pub use dates::*;
pub use loader::*;
pub use repository::*;
pub use assets::*;
