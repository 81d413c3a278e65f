//! Subs Portal
//!
//! Browser front end for the Sam's Subs customer portal, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Phone number login
//! - Year-in-review metrics dashboard
//! - Operator customer picker
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Screen state lives in the `subs-portal` view state machines;
//! this crate only renders them, performs the fetches and keeps the session
//! in local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
