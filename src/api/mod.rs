//! Remote Access Layer
//!
//! Stateless functions over the MentorMatch REST API.

pub mod client;

pub use client::*;
