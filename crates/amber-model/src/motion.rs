//! Deterministic vehicle motion along a 1-D corridor.

use amber_core::Action;

/// A one-dimensional corridor of `length` cells, `[0, length)`.
///
/// Moves that would leave the corridor are absorbed at the boundary: the
/// resolved position is clamped to `[0, length - 1]`. This is the
/// corridor's edge policy, not an error.
///
/// # Examples
///
/// ```
/// use amber_core::Action;
/// use amber_model::Corridor;
///
/// let corridor = Corridor::new(11);
/// assert_eq!(corridor.resolve(4, Action::Forward), 5);
/// assert_eq!(corridor.resolve(0, Action::Reverse), 0);
/// assert_eq!(corridor.resolve(10, Action::Forward), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Corridor {
    length: u32,
}

impl Corridor {
    /// Create a corridor with `length` cells.
    ///
    /// Length is validated by the domain configuration; a zero-length
    /// corridor resolves every move to cell 0.
    pub fn new(length: u32) -> Self {
        Self { length }
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.length
    }

    /// `true` for a zero-length corridor.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `position` is a cell of this corridor.
    pub fn contains(&self, position: u32) -> bool {
        position < self.length
    }

    /// Position after applying `action` from `position`.
    pub fn resolve(&self, position: u32, action: Action) -> u32 {
        let last = i64::from(self.length.saturating_sub(1));
        let target = i64::from(position) + action.direction();
        // `last` fits in u32, so the clamped value does too.
        target.clamp(0, last) as u32
    }
}
