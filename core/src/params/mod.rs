pub mod loader;
pub mod vehicle;

pub use vehicle::ParameterSet;
