#![forbid(unsafe_code)]

//! Deterministic gesture scripts.
//!
//! A [`GestureScript`] is a timeline of pointer events, ticks, and host
//! actions, each stamped with milliseconds from the script start. Replaying
//! the same script against the same surface always yields the same
//! dispatches.
//!
//! # JSONL Schema
//!
//! ```json
//! {"at_ms":0,"input":"pointer","event":{"phase":"down","pointer_id":1,...}}
//! {"at_ms":16,"input":"tick"}
//! ```

use serde::Serialize;
use web_time::{Duration, Instant};

use dragsort::{
    Point, PointerEvent, PointerKind, ReorderController, ReorderDispatch, ReorderHost, Surface,
};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum ScriptInput {
    Pointer { event: PointerEvent },
    Tick,
    Cancel,
    LostCapture { pointer_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScriptStep {
    pub at_ms: u64,
    #[serde(flatten)]
    pub input: ScriptInput,
}

/// Builder for a single-pointer gesture timeline.
#[derive(Debug, Clone)]
pub struct GestureScript {
    pointer_id: u32,
    kind: PointerKind,
    now_ms: u64,
    last: Point,
    steps: Vec<ScriptStep>,
}

impl GestureScript {
    #[must_use]
    pub fn new(kind: PointerKind) -> Self {
        Self {
            pointer_id: 1,
            kind,
            now_ms: 0,
            last: Point::ORIGIN,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn mouse() -> Self {
        Self::new(PointerKind::Mouse)
    }

    #[must_use]
    pub fn touch() -> Self {
        Self::new(PointerKind::Touch)
    }

    /// Switch the pointer used by subsequent events.
    #[must_use]
    pub fn pointer(mut self, pointer_id: u32, kind: PointerKind) -> Self {
        self.pointer_id = pointer_id;
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn down(self, x: f32, y: f32) -> Self {
        let event = PointerEvent::down(self.pointer_id, self.kind, Point::new(x, y));
        self.push_pointer(event)
    }

    #[must_use]
    pub fn move_to(self, x: f32, y: f32) -> Self {
        let event = PointerEvent::moved(self.pointer_id, self.kind, Point::new(x, y));
        self.push_pointer(event)
    }

    #[must_use]
    pub fn up(self, x: f32, y: f32) -> Self {
        let event = PointerEvent::up(self.pointer_id, self.kind, Point::new(x, y));
        self.push_pointer(event)
    }

    /// Release at the last pointer position.
    #[must_use]
    pub fn release(self) -> Self {
        let Point { x, y } = self.last;
        self.up(x, y)
    }

    #[must_use]
    pub fn pointer_cancel(self) -> Self {
        let event = PointerEvent::cancel(self.pointer_id, self.kind, self.last);
        self.push_pointer(event)
    }

    /// Advance the clock without input.
    #[must_use]
    pub fn wait(mut self, ms: u64) -> Self {
        self.now_ms += ms;
        self
    }

    #[must_use]
    pub fn tick(self) -> Self {
        self.push(ScriptInput::Tick)
    }

    /// Advance `ms`, ticking every `frame_ms`.
    #[must_use]
    pub fn run_frames(mut self, ms: u64, frame_ms: u64) -> Self {
        let frame_ms = frame_ms.max(1);
        let end = self.now_ms + ms;
        while self.now_ms + frame_ms <= end {
            self.now_ms += frame_ms;
            self = self.tick();
        }
        self.now_ms = end;
        self
    }

    /// Move to `(x, y)` in `steps` equal increments, one frame apart.
    #[must_use]
    pub fn glide(mut self, x: f32, y: f32, steps: u32, frame_ms: u64) -> Self {
        let steps = steps.max(1);
        let start = self.last;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.now_ms += frame_ms;
            self = self
                .move_to(start.x + (x - start.x) * t, start.y + (y - start.y) * t)
                .tick();
        }
        self
    }

    #[must_use]
    pub fn cancel(self) -> Self {
        self.push(ScriptInput::Cancel)
    }

    #[must_use]
    pub fn lost_capture(self) -> Self {
        let pointer_id = self.pointer_id;
        self.push(ScriptInput::LostCapture { pointer_id })
    }

    #[must_use]
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Total scripted time.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.now_ms)
    }

    /// One JSON object per step.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for step in &self.steps {
            out.push_str(&serde_json::to_string(step)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Replay against `controller`, with step times measured from `start`.
    pub fn run<S: Surface, H: ReorderHost>(
        &self,
        controller: &mut ReorderController<S, H>,
        start: Instant,
    ) -> Vec<ReorderDispatch> {
        self.steps
            .iter()
            .map(|step| {
                let now = start + Duration::from_millis(step.at_ms);
                tracing::trace!(at_ms = step.at_ms, input = ?step.input, "script step");
                match step.input {
                    ScriptInput::Pointer { event } => controller.process(&event, now),
                    ScriptInput::Tick => controller.tick(now),
                    ScriptInput::Cancel => controller.cancel(),
                    ScriptInput::LostCapture { pointer_id } => {
                        controller.lost_pointer_capture(pointer_id)
                    }
                }
            })
            .collect()
    }

    fn push_pointer(mut self, event: PointerEvent) -> Self {
        self.last = event.position;
        self.push(ScriptInput::Pointer { event })
    }

    fn push(mut self, input: ScriptInput) -> Self {
        self.steps.push(ScriptStep {
            at_ms: self.now_ms,
            input,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_time_stamped() {
        let script = GestureScript::mouse().down(10.0, 10.0).wait(20).move_to(10.0, 40.0).release();
        let times: Vec<u64> = script.steps().iter().map(|s| s.at_ms).collect();
        assert_eq!(times, vec![0, 20, 20]);
        assert_eq!(script.duration(), Duration::from_millis(20));
    }

    #[test]
    fn run_frames_ticks_each_frame() {
        let script = GestureScript::touch().down(0.0, 0.0).run_frames(100, 16);
        let ticks = script
            .steps()
            .iter()
            .filter(|s| s.input == ScriptInput::Tick)
            .count();
        assert_eq!(ticks, 6);
        assert_eq!(script.duration(), Duration::from_millis(100));
    }

    #[test]
    fn glide_ends_at_target() {
        let script = GestureScript::mouse().down(0.0, 100.0).glide(0.0, 20.0, 4, 16);
        let last_move = script
            .steps()
            .iter()
            .rev()
            .find_map(|s| match s.input {
                ScriptInput::Pointer { event } => Some(event.position),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_move, Point::new(0.0, 20.0));
    }

    #[test]
    fn jsonl_has_one_line_per_step() {
        let script = GestureScript::mouse().down(1.0, 2.0).tick().cancel();
        let jsonl = script.to_jsonl().unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"input\":\"tick\""));
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["at_ms"], 0);
        assert_eq!(first["event"]["phase"], "down");
    }
}
