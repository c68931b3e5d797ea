//! # Storage Module
//!
//! Owns the identity state behind storage traits so the domain layer never
//! touches the containers directly.
//!
//! - **traits**: the `ChildStorage`, `ActivityLogStorage` and `SessionStorage` seams
//! - **memory**: the process-memory implementation (everything resets on restart)
//! - **seed**: the mock data a fresh store starts with

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::StoreError;
pub use memory::*;
pub use traits::*;
