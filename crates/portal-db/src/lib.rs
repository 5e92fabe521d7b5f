//! # portal-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `portal-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives and entity conversions
//! - Repository implementations, including the transactional admission
//!   transitions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portal_db::pool::{create_pool, DatabaseConfig};
//! use portal_db::repositories::PgIntentionRepository;
//! use portal_core::IntentionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let intention_repo = PgIntentionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAttendanceRepository, PgIntentionRepository, PgMeetingRepository, PgMemberRepository,
    PgMembershipRepository, PgThankRepository,
};
