//! A headless carousel engine.
//!
//! For adapter-level utilities (transition driving, tweens, synced carousels), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the position and pagination logic behind a "show N, scroll by M"
//! carousel: partitioning items into dots (with infinite looping and centering), the
//! single-flight transition lock, drag-gesture commit/cancel decisions, and an
//! adapter-clocked autoplay timer.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - user input (buttons, dots, item clicks, pointer samples, hover)
//! - the viewport extent along the carousel axis
//! - "transition started/ended" acknowledgements for every animated move
//!
//! and to render the [`Notification`]s drained from the engine.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod emitter;
mod engine;
mod error;
mod gesture;
mod options;
mod state;
mod table;
mod translator;
mod types;


pub use autoplay::{AutoplayScheduler, AutoplayState, AutoplayTimer};
pub use emitter::Outbox;
pub use engine::CarouselEngine;
pub use error::{CarouselError, IndexKind, Result};
pub use gesture::{
    GestureDecision, GestureInterpreter, GesturePhase, GestureSample, PreviewGeometry,
};
pub use options::{
    Adjustment, CarouselOptions, Configuration, DEFAULT_AUTOPLAY_INTERVAL_MS,
    DEFAULT_SWIPE_THRESHOLD, Resolution,
};
pub use state::{Phase, PositionSnapshot, PositionState};
pub use table::PaginationTable;
pub use translator::IndexTranslator;
pub use types::{
    Axis, Boundary, Ignored, ItemRef, Notification, SlideEvent, Transition, Window,
};
