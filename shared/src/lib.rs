//! ==============================================================================
//! lib.rs - activity signup core
//! ==============================================================================
//!
//! purpose:
//!     framework-agnostic core of the activity signup board: the data model,
//!     the state store, backend calls, notifications and the mutation
//!     controller that keeps the rendered list in step with the server.
//!
//! relationships:
//!     - used by: dashboard (leptos front end; supplies Transport, Renderer
//!       and Notifier implementations)
//!
//! design rationale:
//!     nothing in here touches the dom or the network directly. the three
//!     traits (Transport, Renderer, Notifier) are the only seams, so the
//!     whole signup/unregister flow runs natively under `cargo test`.
//!
//! ==============================================================================

pub mod client;
pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod notice;
pub mod render;
pub mod store;

#[cfg(test)]
mod testing;

pub use client::{ActivitiesClient, Ack, HttpReply, Transport};
pub use config::ClientConfig;
pub use controller::{MutationController, MutationPhase};
pub use endpoints::{Endpoint, Method};
pub use error::{ClientError, MissingField, RenderError};
pub use model::{Activity, ActivityDetails, Capacity, Snapshot};
pub use notice::{Notice, NoticeKind, NoticeSlot, Notifier, NOTICE_DISMISS_MS};
pub use render::{badge_for, ListView, Placeholder, Renderer};
pub use store::StateStore;
