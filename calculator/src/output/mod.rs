pub mod bridge;
pub mod summary;
