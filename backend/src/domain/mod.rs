//! # Domain Module
//!
//! Business logic of the identity vault, independent of the REST surface and
//! of how state is stored.
//!
//! ## Module Organization
//!
//! - **models**: children, credentials, policies, linked apps, ledger entries, users
//! - **commands**: typed inputs and patches for the mutating operations
//! - **credential_issuer**: builds QR credentials from an authentication policy
//! - **child_service**: child CRUD, credential regeneration and status
//! - **linked_app_service**: linking, updating and blocking apps
//! - **session_service**: mock parent login/logout
//! - **activity_log_service**: read access to the mock ledger
//! - **verification_service**: simulated ZKP verification of a scanned token
//! - **countdown**: per-second credential expiry ticker
//!
//! ## Business Rules
//!
//! - A credential lives for exactly five minutes; expiry is displayed, never enforced
//! - A credential's required factors always mirror the policy it was issued from
//! - Any update that carries a policy reissues the credential
//! - Unknown ids are silent no-ops, never errors
//! - Linked apps are blocked rather than removed
//! - Ledger entries are seeded and immutable

pub mod activity_log_service;
pub mod app_catalog;
pub mod child_service;
pub mod commands;
pub mod countdown;
pub mod credential_issuer;
pub mod linked_app_service;
pub mod models;
pub mod session_service;
pub mod verification_service;

pub use activity_log_service::*;
pub use child_service::*;
pub use countdown::*;
pub use linked_app_service::*;
pub use session_service::*;
pub use verification_service::*;
