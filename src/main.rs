//! SUP Dashboard
//!
//! Duty-scheduling and mission-planning front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Duty roster and daily mission plan views
//! - Personnel, vacation and equipment reference data
//! - Role-gated creation forms for planners and admins
//! - Duty and workload analytics
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the SUP REST API via HTTP; the backend
//! owns all data and validation.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
