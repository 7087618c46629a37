pub mod filter;
pub mod input;
pub mod summary;
