//! # Scribe Shared
//!
//! Wire types shared between the server and its clients: the request DTO
//! for the posts resource and the RFC 7807 error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
