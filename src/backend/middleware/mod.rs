//! Middleware Module
//!
//! This module contains the HTTP middleware and extractors that guard
//! protected routes.
//!
//! - **`auth`** - Bearer token verification plus the `AuthUser` and
//!   `AdminUser` extractors

pub mod auth;

pub use auth::{auth_middleware, AdminUser, AuthUser, AuthenticatedUser};
