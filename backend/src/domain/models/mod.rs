pub mod activity_log;
pub mod auth_policy;
pub mod child;
pub mod credential;
pub mod linked_app;
pub mod presentation;
pub mod user;
