#![forbid(unsafe_code)]

//! Core: geometry, pointer input, tweening, and observable primitives.
//!
//! # Role in dragsort
//! `dragsort-core` is the leaf layer. It defines the toolkit-neutral
//! vocabulary that the gesture controller (`dragsort`) and host adapters
//! share: rectangles in content space, viewport pointer events, pure
//! time-based tweens, and a small observable cell for host bindings.
//!
//! # Primary responsibilities
//! - **Geometry**: `Rect`, `Point`, `Offset`, `Size`, and the `Axis` helper
//!   that lets list math be written once for vertical and horizontal lists.
//! - **Pointer input**: device kind, buttons, and lifecycle phases.
//! - **Animation**: easing curves and the clock-free [`animation::Tween`].
//! - **Observable**: [`observable::ObservableProperty`] with drop-guard
//!   subscriptions.
//! - **Sequence**: applying a reorder command to a backing `Vec`.

pub mod animation;
pub mod geometry;
pub mod logging;
pub mod observable;
pub mod pointer;
pub mod sequence;

pub use geometry::{Axis, Offset, Point, Rect, Size};
pub use observable::{ObservableProperty, Subscription};
pub use pointer::{PointerButton, PointerEvent, PointerKind, PointerPhase};
pub use sequence::{ReorderCommand, move_item};
