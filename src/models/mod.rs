//! Data models for API entities

pub mod borrowing;
pub mod material;
pub mod person;
