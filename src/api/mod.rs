//! REST Collaborator
//!
//! Backend bindings for the reorderable admin screens. One generic client
//! serves every entity kind; screens differ only by endpoint.

mod client;
mod collaborator;

pub use client::ApiClient;
pub use collaborator::RestCollaborator;
