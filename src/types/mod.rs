pub mod element;
pub mod period;
pub mod rounding;
pub mod traits;
