//! Snippetbox CLI - presentation layer over the snippet store
//!
//! - `config`: layered settings (defaults, file, environment, flags)
//! - `forms`: untrusted-input boundary (create form, id and expiry parsing)
//! - `commands`: the `create`, `view` and `latest` entry points

pub mod commands;
pub mod config;
pub mod forms;
