pub mod index;
pub mod time;
