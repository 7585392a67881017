//! Domain layer containing the shortener's entities and contracts.
//!
//! - [`entities`] - URL records and the click events they own
//! - [`repositories`] - The [`repositories::CodeStore`] contract
//! - [`events`] - Structured events for the external logging collaborator
//! - [`clock`] - Timestamp source shared by every lifecycle transition
//!
//! The domain layer has no dependency on HTTP, storage engines, or
//! transports. Implementations live in [`crate::infrastructure`].

pub mod clock;
pub mod entities;
pub mod events;
pub mod repositories;
