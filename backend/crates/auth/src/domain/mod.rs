//! Domain Layer
//!
//! Entities, value objects and the store capability contracts.

pub mod entity;
pub mod repository;
pub mod value_object;
