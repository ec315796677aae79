//! Functional core for the todos backend.
//!
//! Pure types, validation and the storage/attachment contracts live here,
//! together with [`service::TodoService`], which orchestrates the user-facing
//! operations over injected collaborators. No I/O happens in this crate
//! except through the traits it defines.

pub mod attachment;
pub mod service;
pub mod storage;
pub mod todo;
