//! Chat relay service.
//!
//! Receives a chat message over an HTTP-triggered serverless invocation,
//! forwards it to a remote text-generation API, and returns the generated
//! reply alongside the updated conversation history.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
