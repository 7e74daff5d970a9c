pub mod aggregate;
pub mod catalog;
pub mod persistence;
pub mod store;
