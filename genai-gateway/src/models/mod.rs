//! Domain models for the gateway.

pub mod upload;

pub use upload::{UploadKind, UploadedFile};
