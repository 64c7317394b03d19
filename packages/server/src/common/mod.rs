//! Shared helpers used across domains.

pub mod html;
