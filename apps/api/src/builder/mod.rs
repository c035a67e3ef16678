//! The builder API surface: per-user sessions over the section editor.

pub mod handlers;
pub mod session;
