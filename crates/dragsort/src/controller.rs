#![forbid(unsafe_code)]

//! The reorder gesture state machine.
//!
//! [`ReorderController`] turns raw pointer events and frame ticks into a
//! reorder of the host's sequence. It owns no items: it measures and
//! displaces them through a [`Surface`] and reports through a
//! [`ReorderHost`].
//!
//! # State machine
//!
//! ```text
//!            down on item           threshold / long press
//!   Idle ─────────────────▶ Pressed ───────────────────────▶ Dragging
//!    ▲                        │  up (click)                    │  up: commit
//!    │                        │  touch travel (scroll)         │  cancel / count change
//!    └────────────────────────┴────────────────────────────────┘
//! ```
//!
//! Every input returns a [`ReorderDispatch`] describing what happened.
//!
//! # Invariants
//!
//! 1. At most one gesture is active; a new pointer-down cancels it first.
//! 2. Index computation only reads the bounds snapshot taken at drag start.
//! 3. `move_element` is called at most once per drag, and only when the
//!    final index differs from the start index.
//! 4. Teardown (capture release, offsets reset, lifted flag cleared) runs
//!    exactly once per started drag, on commit or cancel.
//! 5. Touch never starts a drag by travel alone.
//!
//! # Time
//!
//! The controller never reads a clock. Callers pass `now` with each input,
//! and must call [`ReorderController::tick`] once per frame while
//! [`ReorderController::needs_frame`] is true so long presses fire,
//! auto-scroll steps, and reflow animations advance.

use std::mem;

use tracing::{debug, trace, warn};
use web_time::Instant;

use dragsort_core::logging::{TARGET_AUTOSCROLL, TARGET_GESTURE};
use dragsort_core::{
    ObservableProperty, Offset, Point, PointerEvent, PointerKind, PointerPhase, Rect,
};

use crate::autoscroll::{AutoScroll, clamped_step, edge_direction};
use crate::capture::PointerCapture;
use crate::config::ReorderConfig;
use crate::dispatch::{
    CancelReason, DragTrigger, GesturePhase, IgnoredReason, InputPhase, ReorderDispatch,
    ReorderEffect,
};
use crate::error::ConfigError;
use crate::guard::PressGuard;
use crate::host::ReorderHost;
use crate::reflow::{AnimationEntry, ReflowAnimator, reflow_targets};
use crate::snapshot::BoundsSnapshot;
use crate::surface::{Surface, content_bounds, scroll_extent};
use crate::view::reveal_delta;

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer_id: u32,
    kind: PointerKind,
    index: usize,
    /// Viewport position of the pointer-down.
    origin: Point,
    /// Content position of the pointer-down.
    content: Point,
    position: Point,
    pressed_at: Instant,
}

impl Press {
    fn long_press_due(&self, config: &ReorderConfig, now: Instant) -> bool {
        config
            .long_press
            .is_some_and(|delay| now.saturating_duration_since(self.pressed_at) >= delay)
    }

    fn travel(&self) -> f32 {
        self.position.distance(self.origin)
    }
}

#[derive(Debug, Clone)]
struct Drag {
    pointer_id: u32,
    start_index: usize,
    current_index: usize,
    /// Viewport reference point for the drag offset. Auto-scroll shifts it
    /// opposite to the scroll so the item stays under the pointer.
    origin: Point,
    position: Point,
    offset: Offset,
    snapshot: BoundsSnapshot,
    reflow: ReflowAnimator,
    auto_scroll: AutoScroll,
}

#[derive(Debug, Clone)]
enum GestureState {
    Idle,
    Pressed(Press),
    Dragging(Drag),
}

/// Drag-to-reorder controller for one list.
pub struct ReorderController<S, H> {
    config: ReorderConfig,
    surface: S,
    host: H,
    state: GestureState,
    capture: PointerCapture,
    guard: PressGuard,
    phase: ObservableProperty<GesturePhase>,
}

impl<S: std::fmt::Debug, H: std::fmt::Debug> std::fmt::Debug for ReorderController<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderController")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("host", &self.host)
            .field("state", &self.state)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, H: ReorderHost> ReorderController<S, H> {
    /// Create a controller after validating `config`.
    pub fn new(config: ReorderConfig, surface: S, host: H) -> Result<Self, ConfigError> {
        let config = config.check()?;
        Ok(Self::from_parts(config, surface, host))
    }

    /// Create a controller with the default configuration.
    #[must_use]
    pub fn with_default_config(surface: S, host: H) -> Self {
        Self::from_parts(ReorderConfig::default(), surface, host)
    }

    fn from_parts(config: ReorderConfig, surface: S, host: H) -> Self {
        debug!(target: TARGET_GESTURE, axis = ?config.axis, "reorder controller created");
        Self {
            config,
            surface,
            host,
            state: GestureState::Idle,
            capture: PointerCapture::new(),
            guard: PressGuard::new(),
            phase: ObservableProperty::new(GesturePhase::Idle),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub const fn config(&self) -> &ReorderConfig {
        &self.config
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the controller apart. An active drag is not cancelled.
    pub fn into_parts(self) -> (S, H) {
        (self.surface, self.host)
    }

    /// Settled phase of the current gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Pressed(_) => GesturePhase::Pressed,
            GestureState::Dragging(_) => GesturePhase::Dragging,
        }
    }

    /// Shared handle publishing every phase change, including the transient
    /// `Committing` and `Cancelled` phases.
    #[must_use]
    pub fn phase_property(&self) -> ObservableProperty<GesturePhase> {
        self.phase.clone()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Index of the pressed item while pressed or dragging.
    #[must_use]
    pub fn start_index(&self) -> Option<usize> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Pressed(press) => Some(press.index),
            GestureState::Dragging(drag) => Some(drag.start_index),
        }
    }

    /// Live insertion index while dragging.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.drag().map(|drag| drag.current_index)
    }

    /// Clamped offset of the dragged item while dragging.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Offset> {
        self.drag().map(|drag| drag.offset)
    }

    /// Reflow animation state of item `index` while dragging.
    #[must_use]
    pub fn reflow_entry(&self, index: usize) -> Option<&AnimationEntry> {
        self.drag().and_then(|drag| drag.reflow.entry(index))
    }

    /// Bounds snapshot of the current drag.
    #[must_use]
    pub fn snapshot(&self) -> Option<&BoundsSnapshot> {
        self.drag().map(|drag| &drag.snapshot)
    }

    /// Whether [`ReorderController::tick`] has pending work.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        match &self.state {
            GestureState::Idle => false,
            GestureState::Pressed(_) => self.config.long_press.is_some(),
            GestureState::Dragging(drag) => {
                drag.reflow.is_animating() || drag.auto_scroll.is_active()
            }
        }
    }

    /// Whether a click at `now` should be swallowed because a drag just
    /// ended.
    #[must_use]
    pub fn should_suppress_click(&self, now: Instant) -> bool {
        self.guard.suppresses_click(now, self.config.click_suppress_window)
    }

    fn drag(&self) -> Option<&Drag> {
        match &self.state {
            GestureState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// Route `event` by its phase.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> ReorderDispatch {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, now),
            PointerPhase::Move => self.pointer_move(event, now),
            PointerPhase::Up => self.pointer_up(event, now),
            PointerPhase::Cancel => self.pointer_cancel(event),
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent, now: Instant) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::PointerDown);
        if !self.host.can_drag() {
            return self.ignore(dispatch, IgnoredReason::DragDisabled);
        }
        if !event.can_begin_gesture() {
            return self.ignore(dispatch, IgnoredReason::PointerNotAccepted);
        }
        self.cancel_active(CancelReason::SupersededByPointerDown, &mut dispatch);
        let window = self.config.double_press_window;
        if !self
            .guard
            .admit_press(event.pointer_id, event.kind, now, window)
        {
            return self.ignore(dispatch, IgnoredReason::DoublePress);
        }

        let content = to_content(&self.surface.viewport(), event.position);
        let Some(index) = self.item_at(content) else {
            return self.ignore(dispatch, IgnoredReason::NoItemUnderPointer);
        };

        debug!(
            target: TARGET_GESTURE,
            pointer_id = event.pointer_id,
            kind = ?event.kind,
            index,
            "press"
        );
        self.state = GestureState::Pressed(Press {
            pointer_id: event.pointer_id,
            kind: event.kind,
            index,
            origin: event.position,
            content,
            position: event.position,
            pressed_at: now,
        });
        self.phase.set(GesturePhase::Pressed);
        dispatch.effects.push(ReorderEffect::Pressed { index });
        self.finish(dispatch)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent, now: Instant) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::PointerMove);
        if let Err(reason) = self.check_pointer(event.pointer_id) {
            return self.ignore(dispatch, reason);
        }

        if let GestureState::Pressed(press) = &mut self.state {
            press.position = event.position;
            let press = *press;
            if press.long_press_due(&self.config, now) {
                self.start_drag(press, DragTrigger::LongPress, now, &mut dispatch);
            } else if press.kind.is_touch() {
                if press.travel() > self.config.touch_drag_threshold {
                    debug!(
                        target: TARGET_GESTURE,
                        index = press.index,
                        "touch press released to scroll"
                    );
                    self.state = GestureState::Idle;
                    self.phase.set(GesturePhase::Idle);
                    dispatch
                        .effects
                        .push(ReorderEffect::ReleasedToScroll { index: press.index });
                    return self.finish(dispatch);
                }
                return self.ignore(dispatch, IgnoredReason::BelowThreshold);
            } else if press.travel() > self.config.mouse_drag_threshold
                && now.saturating_duration_since(press.pressed_at) >= self.config.min_press_duration
            {
                self.start_drag(press, DragTrigger::Motion, now, &mut dispatch);
            } else {
                return self.ignore(dispatch, IgnoredReason::BelowThreshold);
            }
        }

        self.move_drag(event.position, now, &mut dispatch);
        self.finish(dispatch)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent, now: Instant) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::PointerUp);
        if let Err(reason) = self.check_pointer(event.pointer_id) {
            return self.ignore(dispatch, reason);
        }

        if let GestureState::Pressed(press) = &mut self.state {
            press.position = event.position;
            let press = *press;
            if !press.long_press_due(&self.config, now) {
                debug!(target: TARGET_GESTURE, index = press.index, "press released without drag");
                self.state = GestureState::Idle;
                self.phase.set(GesturePhase::Idle);
                dispatch.effects.push(ReorderEffect::Clicked { index: press.index });
                return self.finish(dispatch);
            }
            self.start_drag(press, DragTrigger::LongPress, now, &mut dispatch);
        }

        if !self.ensure_item_count(&mut dispatch) {
            return self.finish(dispatch);
        }
        if let GestureState::Dragging(drag) = &mut self.state {
            drag.position = event.position;
            self.refresh_drag(now);
            self.commit(now, &mut dispatch);
        }
        self.finish(dispatch)
    }

    pub fn pointer_cancel(&mut self, event: &PointerEvent) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::PointerCancel);
        if let Err(reason) = self.check_pointer(event.pointer_id) {
            return self.ignore(dispatch, reason);
        }
        if let GestureState::Dragging(drag) = &mut self.state {
            drag.position = event.position;
        }
        self.cancel_active(CancelReason::PointerCancel, &mut dispatch);
        self.finish(dispatch)
    }

    /// Cancel the active gesture, if any. Cancelling twice is the same as
    /// cancelling once.
    pub fn cancel(&mut self) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::Cancel);
        if !self.cancel_active(CancelReason::Programmatic, &mut dispatch) {
            return self.ignore(dispatch, IgnoredReason::NoActiveGesture);
        }
        self.finish(dispatch)
    }

    /// The surface revoked capture for `pointer_id`. The gesture continues;
    /// teardown will not try to release the capture again.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::LostPointerCapture);
        if !self.capture.mark_lost(pointer_id) {
            let reason = if self.capture.pointer_id().is_some() {
                IgnoredReason::PointerMismatch
            } else {
                IgnoredReason::NoActiveGesture
            };
            return self.ignore(dispatch, reason);
        }
        dispatch.effects.push(ReorderEffect::CaptureLost { pointer_id });
        self.finish(dispatch)
    }

    /// Advance time-driven work: long-press promotion, auto-scroll, and
    /// reflow animation.
    pub fn tick(&mut self, now: Instant) -> ReorderDispatch {
        let mut dispatch = self.begin(InputPhase::Tick);
        match &self.state {
            GestureState::Idle => {}
            GestureState::Pressed(press) => {
                let press = *press;
                if press.long_press_due(&self.config, now) {
                    self.start_drag(press, DragTrigger::LongPress, now, &mut dispatch);
                }
            }
            GestureState::Dragging(_) => {
                if self.ensure_item_count(&mut dispatch) {
                    self.step_auto_scroll(now, &mut dispatch);
                    self.step_reflow(now);
                }
            }
        }
        self.finish(dispatch)
    }

    /// Scroll the minimum needed to reveal the host's selected item.
    /// Only acts while idle. Returns the applied scroll.
    pub fn bring_selected_into_view(&mut self) -> Option<Offset> {
        if !matches!(self.state, GestureState::Idle) {
            return None;
        }
        let index = self.host.default_selected_index()?;
        let target = self.surface.item_bounds(index)?;
        let axis = self.config.axis;
        let viewport = self.surface.viewport();
        let extent = axis.of_size(scroll_extent(&self.surface));
        let delta = reveal_delta(&target, &viewport, extent, axis);
        if delta == 0.0 {
            return Some(Offset::ZERO);
        }
        let applied = self.surface.scroll_by(axis.offset(delta));
        debug!(
            target: TARGET_GESTURE,
            index,
            delta = axis.of_offset(applied),
            "brought selection into view"
        );
        Some(applied)
    }

    // ── Transitions ─────────────────────────────────────────────────

    fn begin(&self, input: InputPhase) -> ReorderDispatch {
        ReorderDispatch::new(input, self.phase())
    }

    fn ignore(&self, mut dispatch: ReorderDispatch, reason: IgnoredReason) -> ReorderDispatch {
        trace!(target: TARGET_GESTURE, input = ?dispatch.input, ?reason, "input ignored");
        dispatch.ignored = Some(reason);
        self.finish(dispatch)
    }

    fn finish(&self, mut dispatch: ReorderDispatch) -> ReorderDispatch {
        dispatch.to = self.phase();
        if dispatch.from != dispatch.to {
            debug!(
                target: TARGET_GESTURE,
                input = ?dispatch.input,
                from = ?dispatch.from,
                to = ?dispatch.to,
                "gesture transition"
            );
        }
        dispatch
    }

    fn check_pointer(&self, pointer_id: u32) -> Result<(), IgnoredReason> {
        let active = match &self.state {
            GestureState::Idle => return Err(IgnoredReason::NoActiveGesture),
            GestureState::Pressed(press) => press.pointer_id,
            GestureState::Dragging(drag) => drag.pointer_id,
        };
        if active == pointer_id {
            Ok(())
        } else {
            Err(IgnoredReason::PointerMismatch)
        }
    }

    fn item_at(&self, content: Point) -> Option<usize> {
        (0..self.surface.item_count()).find(|&i| {
            self.surface
                .item_bounds(i)
                .is_some_and(|bounds| bounds.contains(content))
        })
    }

    fn start_drag(
        &mut self,
        press: Press,
        trigger: DragTrigger,
        now: Instant,
        dispatch: &mut ReorderDispatch,
    ) {
        let Some(snapshot) = BoundsSnapshot::capture(&self.surface, self.config.axis) else {
            warn!(
                target: TARGET_GESTURE,
                index = press.index,
                "item bounds unavailable at drag start"
            );
            self.abort_press(press, CancelReason::MissingBounds, dispatch);
            return;
        };
        let start_index = snapshot
            .hit_test(press.content)
            .or_else(|| (press.index < snapshot.len()).then_some(press.index));
        let Some(start_index) = start_index else {
            warn!(
                target: TARGET_GESTURE,
                index = press.index,
                "pressed item vanished before drag start"
            );
            self.abort_press(press, CancelReason::MissingBounds, dispatch);
            return;
        };

        self.capture.acquire(&mut self.surface, start_index, press.pointer_id);
        self.surface.set_item_lifted(start_index, true);
        let reflow = ReflowAnimator::new(snapshot.len(), now, &self.config.reflow);
        debug!(
            target: TARGET_GESTURE,
            pointer_id = press.pointer_id,
            index = start_index,
            ?trigger,
            items = snapshot.len(),
            "drag start"
        );
        self.state = GestureState::Dragging(Drag {
            pointer_id: press.pointer_id,
            start_index,
            current_index: start_index,
            origin: press.origin,
            position: press.position,
            offset: Offset::ZERO,
            snapshot,
            reflow,
            auto_scroll: AutoScroll::new(),
        });
        self.phase.set(GesturePhase::Dragging);
        if trigger == DragTrigger::LongPress {
            self.host.on_long_press(start_index);
        }
        self.host.on_drag_start(start_index, press.position.x, press.position.y);
        dispatch.effects.push(ReorderEffect::DragStarted {
            index: start_index,
            trigger,
        });
        self.refresh_drag(now);
    }

    fn abort_press(&mut self, press: Press, reason: CancelReason, dispatch: &mut ReorderDispatch) {
        self.state = GestureState::Idle;
        self.phase.set(GesturePhase::Cancelled);
        self.phase.set(GesturePhase::Idle);
        debug!(target: TARGET_GESTURE, index = press.index, ?reason, "press aborted");
        dispatch.effects.push(ReorderEffect::Cancelled {
            reason,
            drag_started: false,
        });
    }

    fn move_drag(&mut self, position: Point, now: Instant, dispatch: &mut ReorderDispatch) {
        if !self.ensure_item_count(dispatch) {
            return;
        }
        let viewport = self.surface.viewport();
        let axis = self.config.axis;
        let auto_scroll = self.config.auto_scroll;
        let GestureState::Dragging(drag) = &mut self.state else {
            return;
        };
        drag.position = position;
        if auto_scroll.enabled {
            let direction = edge_direction(
                axis.of_point(position),
                axis.of_size(viewport.size()),
                auto_scroll.edge_band,
            );
            drag.auto_scroll.set_direction(direction, now);
        }

        let index_changed = self.refresh_drag(now);
        let Some(index) = self.current_index() else {
            return;
        };
        trace!(target: TARGET_GESTURE, x = position.x, y = position.y, index, "drag move");
        self.host.on_drag_move(index, position.x, position.y);
        dispatch.effects.push(ReorderEffect::DragMoved {
            index,
            index_changed,
        });
    }

    /// Recompute the clamped offset and insertion index from the pointer
    /// position. Returns whether the index changed.
    fn refresh_drag(&mut self, now: Instant) -> bool {
        let axis = self.config.axis;
        let bounds = content_bounds(&self.surface);
        let GestureState::Dragging(drag) = &mut self.state else {
            return false;
        };
        let Some(item) = drag.snapshot.get(drag.start_index) else {
            return false;
        };

        let raw = drag.position.delta_from(drag.origin);
        let offset = item.clamp_offset_within(raw, &bounds);
        drag.offset = offset;
        self.surface.set_item_offset(drag.start_index, offset);

        let center = axis.of_point(item.center()) + axis.of_offset(offset);
        let index = drag.snapshot.insertion_index(center);
        if index == drag.current_index {
            return false;
        }
        debug!(
            target: TARGET_GESTURE,
            from = drag.current_index,
            to = index,
            "insertion index changed"
        );
        drag.current_index = index;
        let targets = reflow_targets(&drag.snapshot, drag.start_index, index);
        drag.reflow.retarget(&targets, now);
        true
    }

    fn step_auto_scroll(&mut self, now: Instant, dispatch: &mut ReorderDispatch) {
        let axis = self.config.axis;
        let auto_scroll = self.config.auto_scroll;
        let viewport = self.surface.viewport();
        let extent = axis.of_size(scroll_extent(&self.surface));
        let GestureState::Dragging(drag) = &mut self.state else {
            return;
        };
        let Some(direction) = drag.auto_scroll.direction() else {
            return;
        };
        let steps = drag.auto_scroll.due_steps(now, auto_scroll.interval);
        if steps == 0 {
            return;
        }
        let wanted = clamped_step(
            axis.of_point(viewport.origin()),
            extent,
            direction.sign() * auto_scroll.step * steps as f32,
        );
        if wanted == 0.0 {
            return;
        }
        let applied = self.surface.scroll_by(axis.offset(wanted));
        if applied.is_zero() {
            return;
        }
        drag.origin = drag.origin.translate(-applied);
        trace!(
            target: TARGET_AUTOSCROLL,
            delta = axis.of_offset(applied),
            steps,
            "auto-scroll step"
        );
        dispatch.effects.push(ReorderEffect::AutoScrolled { delta: applied });
        self.refresh_drag(now);
    }

    fn step_reflow(&mut self, now: Instant) {
        let axis = self.config.axis;
        let GestureState::Dragging(drag) = &mut self.state else {
            return;
        };
        for (index, value) in drag.reflow.step(now) {
            if index != drag.start_index {
                self.surface.set_item_offset(index, axis.offset(value));
            }
        }
    }

    /// Cancel the drag if the host re-rendered with a different item count.
    /// Returns whether the gesture may continue.
    fn ensure_item_count(&mut self, dispatch: &mut ReorderDispatch) -> bool {
        let GestureState::Dragging(drag) = &self.state else {
            return true;
        };
        let expected = drag.snapshot.len();
        let actual = self.surface.item_count();
        if expected == actual {
            return true;
        }
        warn!(target: TARGET_GESTURE, expected, actual, "item count changed during drag");
        self.cancel_active(CancelReason::ItemCountChanged { expected, actual }, dispatch);
        false
    }

    fn commit(&mut self, now: Instant, dispatch: &mut ReorderDispatch) {
        let GestureState::Dragging(drag) = mem::replace(&mut self.state, GestureState::Idle) else {
            return;
        };
        self.phase.set(GesturePhase::Committing);
        let (from, to) = (drag.start_index, drag.current_index);
        let position = drag.position;
        self.teardown(drag);
        self.guard.record_drag_end(now);
        if from != to {
            self.host.move_element(from, to);
        }
        self.host.on_drag_end(from, to, position.x, position.y);
        debug!(target: TARGET_GESTURE, from, to, "drag committed");
        self.phase.set(GesturePhase::Idle);
        dispatch.effects.push(ReorderEffect::Committed { from, to });
    }

    /// Cancel whatever gesture is active. Returns false when idle.
    fn cancel_active(&mut self, reason: CancelReason, dispatch: &mut ReorderDispatch) -> bool {
        match mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Idle => false,
            GestureState::Pressed(press) => {
                self.abort_press(press, reason, dispatch);
                true
            }
            GestureState::Dragging(drag) => {
                self.phase.set(GesturePhase::Cancelled);
                let position = drag.position;
                let index = drag.start_index;
                self.teardown(drag);
                self.host.on_drag_cancel(position.x, position.y);
                debug!(target: TARGET_GESTURE, index, ?reason, "drag cancelled");
                self.phase.set(GesturePhase::Idle);
                dispatch.effects.push(ReorderEffect::Cancelled {
                    reason,
                    drag_started: true,
                });
                true
            }
        }
    }

    fn teardown(&mut self, mut drag: Drag) {
        self.capture.release(&mut self.surface);
        let count = self.surface.item_count();
        if drag.start_index < count {
            self.surface.set_item_lifted(drag.start_index, false);
        }
        for index in 0..count.min(drag.snapshot.len()) {
            self.surface.set_item_offset(index, Offset::ZERO);
        }
        drag.auto_scroll.stop();
    }
}

fn to_content(viewport: &Rect, position: Point) -> Point {
    Point::new(position.x + viewport.x, position.y + viewport.y)
}
