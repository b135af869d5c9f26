//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Resolving sessions, deriving guild access and applying grants
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod access_control;
pub mod auth;
pub mod bot_gateway;
pub mod discord;
pub mod guild;
pub mod user;

#[cfg(test)]
mod test;
