//! Domain layer containing the URL record entity and the storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Services in [`crate::application::services`] consume the
//! repository trait defined here; implementations live in
//! [`crate::infrastructure::persistence`].
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
