//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on position, pagination and input state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A tween-driven controller for hosts without native transition events
//! - Synced carousels (e.g. a thumbnail strip following the main carousel)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod sync;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use sync::SyncGroup;
pub use tween::{Easing, Tween};
