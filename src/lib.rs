//! Interaction layer for the Nebula marketing site.
//!
//! This crate is compiled to WebAssembly and wired into static markup it does
//! not own. Each feature is a small controller that receives the elements it
//! needs up front and reacts to browser events afterwards. The controllers
//! only talk to the page through the capability traits in [`dom`], so the
//! whole core runs natively under `cargo test` with in-memory fakes; the
//! `browser` feature adds the `web-sys` shell that binds them to a real page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Capability traits for nodes, forms, lookup, and viewport watching |
//! | [`store`] | Failure-absorbing preference store over a key-value backend |
//! | [`theme`] | Light/dark mode on the root element and toggle controls |
//! | [`menu`] | Open/closed state machine for the mobile navigation panel |
//! | [`reveal`] | One-shot scroll reveal latch per tagged element |
//! | [`form`] | Email validation and status reporting on form submit |
//! | [`hash_focus`] | Moves keyboard focus to the fragment target |
//! | [`footer`] | Current-year stamp in the footer |
//! | [`site`] | Composition of all controllers and the start sequence |
//! | [`config`] | Element ids, class names, and policies |
//! | [`consts`] | Attribute names, messages, and default values |
//! | `web` | Browser bindings (`browser` feature only) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod footer;
pub mod form;
pub mod hash_focus;
pub mod menu;
pub mod reveal;
pub mod site;
pub mod store;
pub mod theme;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod fake;
