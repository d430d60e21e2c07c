//! mctl CLI - view applications held by the management service.

pub mod auth;
pub mod client;
pub mod commands;
pub mod identifier;
pub mod output;
pub mod project;
pub mod query;
pub mod view;
