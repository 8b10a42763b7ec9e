pub mod form;
pub mod comparison;
pub mod predictor;
pub mod presenter;

pub use form::*;
pub use comparison::*;
pub use predictor::*;
pub use presenter::*;
