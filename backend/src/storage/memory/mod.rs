//! In-memory storage implementation. All repositories share one
//! [`MemoryConnection`], so every mutation is serialised by its write lock.

pub mod activity_log_repository;
pub mod child_repository;
pub mod connection;
pub mod session_repository;

pub use activity_log_repository::ActivityLogRepository;
pub use child_repository::ChildRepository;
pub use connection::MemoryConnection;
pub use session_repository::SessionRepository;
