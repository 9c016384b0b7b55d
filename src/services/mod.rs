//! Domain services behind the HTTP routes.
//!
//! Service modules own the relay logic so route handlers can stay focused
//! on protocol translation.

pub mod chat;
