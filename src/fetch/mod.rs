pub mod error;
pub mod frame;
pub mod loader;
pub mod request;
