//! Presentation Layer - HTTP transport

pub mod dto;
pub mod handlers;
pub mod router;
