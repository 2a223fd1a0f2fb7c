pub mod carousel;
pub mod config;
pub mod types;
