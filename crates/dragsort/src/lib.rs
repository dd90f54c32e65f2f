#![forbid(unsafe_code)]

//! Drag-to-reorder for linear lists.
//!
//! # Role in dragsort
//! This crate is the gesture layer. It consumes pointer events and frame
//! ticks, animates neighbouring items out of the way while one is dragged,
//! auto-scrolls near viewport edges, and commits a single `move_element`
//! to the host when the pointer is released.
//!
//! # How it fits
//! - `dragsort-core` supplies geometry, pointer events, tweens, and the
//!   observable cell.
//! - The host implements [`Surface`] (measure, displace, scroll, capture)
//!   and [`ReorderHost`] (owns the sequence, receives callbacks).
//! - `dragsort-harness` provides in-memory implementations of both for
//!   tests and benchmarks.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = ReorderController::new(ReorderConfig::default(), surface, host)?;
//! controller.process(&event, Instant::now());
//! while controller.needs_frame() {
//!     controller.tick(Instant::now());
//! }
//! ```

pub mod autoscroll;
pub mod capture;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod guard;
pub mod host;
pub mod reflow;
pub mod snapshot;
pub mod surface;
pub mod view;

pub use autoscroll::ScrollDirection;
pub use config::{AutoScrollConfig, ReflowConfig, ReorderConfig};
pub use controller::ReorderController;
pub use dispatch::{
    CancelReason, DragTrigger, GesturePhase, IgnoredReason, InputPhase, ReorderDispatch,
    ReorderEffect,
};
pub use error::{CaptureError, ConfigError};
pub use host::ReorderHost;
pub use snapshot::BoundsSnapshot;
pub use surface::Surface;

pub use dragsort_core::{
    Axis, ObservableProperty, Offset, Point, PointerButton, PointerEvent, PointerKind,
    PointerPhase, Rect, Size, Subscription,
};
