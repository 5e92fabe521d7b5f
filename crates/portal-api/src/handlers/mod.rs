//! Request handlers

pub mod attendances;
pub mod dashboard;
pub mod health;
pub mod intentions;
pub mod members;
pub mod memberships;
