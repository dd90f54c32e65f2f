#![forbid(unsafe_code)]

//! Neighbour displacement while an item is dragged.
//!
//! When the insertion index moves from `start` to `current`, every item
//! between the two slides one slot toward the vacated position. Targets are
//! a pure function of `(start, current)` and the bounds snapshot; the
//! animator only interpolates toward them.

use dragsort_core::animation::Tween;
use dragsort_core::sequence::positions_after;
use dragsort_core::ReorderCommand;
use web_time::{Duration, Instant};

use crate::config::ReflowConfig;
use crate::snapshot::BoundsSnapshot;

/// Main-axis displacement target for every item.
///
/// Items strictly between the dragged slot and the insertion index (plus the
/// item at the insertion index) shift by the dragged slot's extent; all other
/// items rest at zero. The dragged item's own entry is always zero because
/// its offset follows the pointer instead.
#[must_use]
pub fn reflow_targets(snapshot: &BoundsSnapshot, start: usize, current: usize) -> Vec<f32> {
    let len = snapshot.len();
    if start >= len {
        return vec![0.0; len];
    }
    let extent = snapshot.slot_extent(start);
    let current = current.min(len - 1);
    positions_after(len, ReorderCommand::new(start, current))
        .into_iter()
        .enumerate()
        .map(|(i, moved_to)| {
            if i == start {
                0.0
            } else if moved_to < i {
                -extent
            } else if moved_to > i {
                extent
            } else {
                0.0
            }
        })
        .collect()
}

/// Animation bookkeeping for one item.
#[derive(Debug, Clone, Copy)]
pub struct AnimationEntry {
    tween: Tween,
    current_offset: f32,
    animating: bool,
}

impl AnimationEntry {
    fn at_rest(now: Instant, config: &ReflowConfig) -> Self {
        Self {
            tween: Tween::at_rest(0.0, now).easing(config.easing.function()),
            current_offset: 0.0,
            animating: false,
        }
    }

    #[must_use]
    pub fn from_offset(&self) -> f32 {
        self.tween.from()
    }

    #[must_use]
    pub fn to_offset(&self) -> f32 {
        self.tween.to()
    }

    #[must_use]
    pub const fn current_offset(&self) -> f32 {
        self.current_offset
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }
}

/// Per-item tweens for one drag.
#[derive(Debug, Clone)]
pub struct ReflowAnimator {
    entries: Vec<AnimationEntry>,
    duration: Duration,
}

impl ReflowAnimator {
    #[must_use]
    pub fn new(len: usize, now: Instant, config: &ReflowConfig) -> Self {
        Self {
            entries: vec![AnimationEntry::at_rest(now, config); len],
            duration: config.duration,
        }
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&AnimationEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is still moving toward its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entries.iter().any(|e| e.animating)
    }

    /// Point every entry at its new target, continuing from the value it has
    /// at `now`. Entries already headed for their target keep their curve.
    ///
    /// Offsets are not applied here; the next [`ReflowAnimator::step`]
    /// reports them.
    pub fn retarget(&mut self, targets: &[f32], now: Instant) {
        for (entry, &target) in self.entries.iter_mut().zip(targets) {
            if entry.tween.to() == target {
                continue;
            }
            entry.tween.retarget(target, now, self.duration);
            entry.animating = true;
        }
    }

    /// Advance all entries to `now`. Returns the indices whose offset
    /// changed, paired with the new offset.
    pub fn step(&mut self, now: Instant) -> Vec<(usize, f32)> {
        let mut changed = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let value = entry.tween.sample_at(now);
            entry.animating = !entry.tween.is_complete_at(now);
            if value != entry.current_offset {
                entry.current_offset = value;
                changed.push((index, value));
            }
        }
        changed
    }
}
