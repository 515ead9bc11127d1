//! Infrastructure Layer - Store implementations

pub mod postgres;
