//! HTTP request handlers.
//!
//! Each handler authenticates through a guard, converts DTOs into params, calls a service
//! and converts the returned domain model back into a DTO.

pub mod auth;
pub mod bot_gateway;
pub mod guild;
pub mod health;
pub mod permission;
pub mod user;
