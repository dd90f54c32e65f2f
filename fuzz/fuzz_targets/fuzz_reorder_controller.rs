#![no_main]

use arbitrary::Arbitrary;
use dragsort::{GesturePhase, Point, PointerEvent, PointerKind, PointerPhase};
use dragsort_harness::{MockSurface, RecordingHost};
use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
struct Input {
    count: u8,
    extent: u8,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Pointer { phase: u8, id: u8, kind: u8, x: i16, y: i16 },
    Wait(u16),
    Tick,
    Cancel,
    LostCapture(u8),
    ToggleDrag,
    Resize(u8),
    Reveal(u8),
}

fn kind(byte: u8) -> PointerKind {
    match byte % 3 {
        0 => PointerKind::Mouse,
        1 => PointerKind::Touch,
        _ => PointerKind::Pen,
    }
}

fn phase(byte: u8) -> PointerPhase {
    match byte % 4 {
        0 => PointerPhase::Down,
        1 => PointerPhase::Move,
        2 => PointerPhase::Up,
        _ => PointerPhase::Cancel,
    }
}

fuzz_target!(|input: Input| {
    let count = usize::from(input.count % 32) + 1;
    let extent = f32::from(input.extent % 96) + 8.0;
    if input.ops.len() > 512 {
        return;
    }

    let surface = MockSurface::uniform(count, extent, 240.0);
    let host = RecordingHost::new(count);
    let mut controller = dragsort::ReorderController::with_default_config(surface, host);
    let mut now = Instant::now();
    let mut can_drag = true;

    for op in input.ops {
        match op {
            Op::Pointer { phase: p, id, kind: k, x, y } => {
                let position = Point::new(f32::from(x) / 4.0, f32::from(y) / 4.0);
                let event = PointerEvent::new(phase(p), u32::from(id % 3), kind(k), position);
                let _ = controller.process(&event, now);
            }
            Op::Wait(ms) => now += Duration::from_millis(u64::from(ms % 1000)),
            Op::Tick => {
                now += Duration::from_millis(16);
                let _ = controller.tick(now);
            }
            Op::Cancel => {
                let _ = controller.cancel();
            }
            Op::LostCapture(id) => {
                let _ = controller.lost_pointer_capture(u32::from(id % 3));
            }
            Op::ToggleDrag => {
                can_drag = !can_drag;
                controller.host_mut().set_can_drag(can_drag);
            }
            Op::Resize(n) => {
                controller.surface_mut().set_count(usize::from(n % 32) + 1);
            }
            Op::Reveal(index) => {
                controller.host_mut().set_selected(Some(usize::from(index % 32)));
                let _ = controller.bring_selected_into_view();
            }
        }

        if let Some(index) = controller.current_index() {
            assert!(controller.is_dragging());
            assert!(index < controller.snapshot().map_or(0, |s| s.len()));
        }
        assert!(matches!(
            controller.phase(),
            GesturePhase::Idle | GesturePhase::Pressed | GesturePhase::Dragging
        ));
    }

    let _ = controller.cancel();
    assert_eq!(controller.phase(), GesturePhase::Idle);
    let live = dragsort::Surface::item_count(controller.surface());
    assert!(controller.surface().lifted().is_none_or(|index| index >= live));
    assert!(controller.surface().offsets().iter().all(|o| o.is_zero()));

    let mut items = controller.host().items().to_vec();
    items.sort_unstable();
    assert_eq!(items, (0..count).collect::<Vec<_>>(), "items are no longer a permutation");
});
