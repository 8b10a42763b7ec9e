pub mod models;
pub mod features;
pub mod training;
pub mod evaluation;

pub use models::*;
pub use features::*;
pub use training::*;
pub use evaluation::*;
