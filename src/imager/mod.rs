//! Imager dataset access rooted at the resolved data directory

pub mod store;

pub use store::ImagerStore;
