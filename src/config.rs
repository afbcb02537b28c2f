/// Capacity of a freshly constructed array.
pub const DEFAULT_CAPACITY: usize = 10;

/// Construction-time settings for a [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayConfig {
    pub initial_capacity: usize,
}

impl ArrayConfig {
    pub const fn new() -> ArrayConfig {
        ArrayConfig {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    #[must_use]
    pub const fn with_initial_capacity(self, initial_capacity: usize) -> ArrayConfig {
        ArrayConfig { initial_capacity }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The 1.5x growth policy: `current + current / 2`, floored at `required`.
///
/// The floor matters for capacities 0 and 1, where the policy alone would not
/// make room, and for bulk reservations that need more than one step.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    current.saturating_add(current / 2).max(required)
}
