//! Platform - Cross-cutting technical services
//!
//! Infrastructure-level building blocks with no domain knowledge.

pub mod password;
