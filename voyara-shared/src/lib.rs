pub mod pii;
pub mod trip;

pub use pii::Masked;
pub use trip::{Trip, TripCategory};
