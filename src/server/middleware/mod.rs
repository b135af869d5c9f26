//! Request guards invoked at the start of each handler.

pub mod auth;
pub mod bot_gateway;
