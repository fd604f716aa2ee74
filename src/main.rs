//! MentorMatch Dashboard
//!
//! Hackathon team formation and mentorship matching, built with Leptos (WASM).
//!
//! # Features
//!
//! - Event registration with per-event flip cards
//! - Team requests and teammate matching
//! - Mentorship requests and feedback threads
//! - Admin event management and registration overview
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the MentorMatch REST API over HTTP; all
//! collections are transient mirrors of server state, refreshed after each
//! successful mutation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
