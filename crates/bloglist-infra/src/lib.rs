//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`:
//! SeaORM-backed PostgreSQL repositories (with in-memory fallbacks for
//! database-less runs), JWT token issuing and Argon2 password hashing.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryBlogRepository, InMemoryUserRepository, PostgresBlogRepository,
    PostgresUserRepository,
};
