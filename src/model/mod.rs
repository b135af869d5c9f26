//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON request and response bodies. Field names follow the
//! dashboard contract: snake_case except where a field is explicitly renamed.

pub mod api;
pub mod auth;
pub mod bot_gateway;
pub mod guild;
pub mod permission;
pub mod user;
