//! Core types shared across gengrid facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the logging facility and error reporting.

pub mod schema;
