//! Reusable UI components shared across pages.

pub mod navbar;
pub mod route_guard;
pub mod toast;
