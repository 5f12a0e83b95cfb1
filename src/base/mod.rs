//! Base types and error handling.
//!
//! - [`LucidaError`](error::LucidaError): the error taxonomy of every manager
//! - [`LucidaConfig`](config::LucidaConfig): debug flag and cookie defaults

pub mod config;
pub mod error;
