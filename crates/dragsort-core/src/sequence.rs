#![forbid(unsafe_code)]

//! Applying reorder commands to a backing sequence.

/// A request to move the item at `from` so that it ends up at index `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReorderCommand {
    pub from: usize,
    pub to: usize,
}

impl ReorderCommand {
    /// Create a command.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether applying the command would change the order.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Move `items[from]` to index `to` (remove, then insert).
///
/// Returns `false` and leaves `items` untouched when either index is out of
/// bounds.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}

/// The display position each original index takes after `command`.
///
/// `positions[i]` is where the item originally at `i` ends up.
#[must_use]
pub fn positions_after(len: usize, command: ReorderCommand) -> Vec<usize> {
    (0..len)
        .map(|i| {
            let ReorderCommand { from, to } = command;
            if i == from {
                to
            } else if from < to && i > from && i <= to {
                i - 1
            } else if to < from && i >= to && i < from {
                i + 1
            } else {
                i
            }
        })
        .collect()
}
