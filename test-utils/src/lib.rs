//! Guildboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildboard
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for inserting entities with sensible defaults, and a builder for
//! signing identity provider tokens.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for user profiles, guilds, members and permissions
//! - **token**: Signed HS256 token builder shaped like identity provider access tokens
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::UserProfile;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(UserProfile)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod token;
