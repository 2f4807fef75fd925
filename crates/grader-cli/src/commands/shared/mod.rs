pub mod limit;
pub mod store;
