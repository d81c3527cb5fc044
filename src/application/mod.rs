//! Application Layer
//!
//! - `store` - walks the asset graph and memoizes generated states

pub mod store;

pub use store::Store;
