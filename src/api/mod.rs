//! Source site access.
//!
//! This module provides:
//! - Cookie-carrying HTTP session
//! - Administrator login

pub mod auth;
pub mod client;

pub use auth::login;
pub use client::SiteClient;
