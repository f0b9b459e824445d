pub mod column;
pub mod error;
pub mod normalize;
pub mod ranking;
pub mod running;
pub mod statistics;
pub mod summary;
