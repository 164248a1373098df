//! Presentation Layer
//!
//! HTTP handlers, DTOs and the router for the combo API.

pub mod dto;
pub mod handlers;
pub mod router;
