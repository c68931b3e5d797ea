pub mod activity_log_mapper;
pub mod child_mapper;
pub mod linked_app_mapper;
pub mod user_mapper;
pub mod verification_mapper;
