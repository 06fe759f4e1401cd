//! Selection cursor and its movement rules.
//!
//! Moves wrap at both ends. Which rows take part in movement is decided by
//! the [`NavigationPolicy`]: by default rows hidden by the filter are
//! skipped, so the highlighted row is always one the user can see.

use serde::{Deserialize, Serialize};

/// The highlighted row, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Nothing highlighted.
    #[default]
    None,
    /// The row at this index into the full row list is highlighted.
    At(usize),
}

impl Cursor {
    /// The highlighted index, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::At(i) => Some(i),
        }
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Option<usize>> for Cursor {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::None, Self::At)
    }
}

/// Which rows keyboard and pointer navigation may land on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPolicy {
    /// Only rows that pass the current filter.
    #[default]
    VisibleOnly,
    /// Every rendered row, including rows hidden by the filter.
    AllRows,
}

impl NavigationPolicy {
    /// Whether the row at `index` can be highlighted.
    #[must_use]
    pub fn allows(self, index: usize, visible: &[bool]) -> bool {
        match self {
            Self::VisibleOnly => visible.get(index).copied().unwrap_or(false),
            Self::AllRows => index < visible.len(),
        }
    }

    fn candidates(self, visible: &[bool]) -> impl DoubleEndedIterator<Item = usize> + '_ {
        visible
            .iter()
            .enumerate()
            .filter(move |(_, shown)| self == Self::AllRows || **shown)
            .map(|(i, _)| i)
    }
}

/// Moves the cursor to the next eligible row.
///
/// From [`Cursor::None`] this lands on the first eligible row; past the last
/// eligible row it wraps to the first. With no eligible rows the result is
/// [`Cursor::None`].
///
/// ```rust
/// use combobox::navigation::{Cursor, NavigationPolicy, move_next};
///
/// let visible = [true, true, true];
/// let policy = NavigationPolicy::VisibleOnly;
/// assert_eq!(move_next(Cursor::None, &visible, policy), Cursor::At(0));
/// assert_eq!(move_next(Cursor::At(2), &visible, policy), Cursor::At(0));
/// ```
#[must_use]
pub fn move_next(cursor: Cursor, visible: &[bool], policy: NavigationPolicy) -> Cursor {
    let next = match cursor {
        Cursor::None => policy.candidates(visible).next(),
        Cursor::At(current) => policy
            .candidates(visible)
            .find(|&i| i > current)
            .or_else(|| policy.candidates(visible).next()),
    };
    next.into()
}

/// Moves the cursor to the previous eligible row.
///
/// From [`Cursor::None`] this lands on the last eligible row; before the
/// first eligible row it wraps to the last.
#[must_use]
pub fn move_prev(cursor: Cursor, visible: &[bool], policy: NavigationPolicy) -> Cursor {
    let prev = match cursor {
        Cursor::None => policy.candidates(visible).next_back(),
        Cursor::At(current) => policy
            .candidates(visible)
            .rev()
            .find(|&i| i < current)
            .or_else(|| policy.candidates(visible).next_back()),
    };
    prev.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: NavigationPolicy = NavigationPolicy::AllRows;
    const VISIBLE: NavigationPolicy = NavigationPolicy::VisibleOnly;

    #[test]
    fn test_next_from_none_lands_on_first() {
        assert_eq!(move_next(Cursor::None, &[true, true], VISIBLE), Cursor::At(0));
        assert_eq!(move_next(Cursor::None, &[false, true], VISIBLE), Cursor::At(1));
        assert_eq!(move_next(Cursor::None, &[false, true], ALL), Cursor::At(0));
    }

    #[test]
    fn test_prev_from_none_lands_on_last() {
        assert_eq!(move_prev(Cursor::None, &[true, true], VISIBLE), Cursor::At(1));
        assert_eq!(move_prev(Cursor::None, &[true, false], VISIBLE), Cursor::At(0));
        assert_eq!(move_prev(Cursor::None, &[true, false], ALL), Cursor::At(1));
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let visible = [true; 3];
        assert_eq!(move_next(Cursor::At(2), &visible, VISIBLE), Cursor::At(0));
        assert_eq!(move_prev(Cursor::At(0), &visible, VISIBLE), Cursor::At(2));
        assert_eq!(move_next(Cursor::At(2), &visible, ALL), Cursor::At(0));
        assert_eq!(move_prev(Cursor::At(0), &visible, ALL), Cursor::At(2));
    }

    #[test]
    fn test_visible_only_skips_hidden_rows() {
        let visible = [true, false, false, true];
        assert_eq!(move_next(Cursor::At(0), &visible, VISIBLE), Cursor::At(3));
        assert_eq!(move_prev(Cursor::At(3), &visible, VISIBLE), Cursor::At(0));
    }

    #[test]
    fn test_all_rows_includes_hidden_rows() {
        let visible = [true, false, false, true];
        assert_eq!(move_next(Cursor::At(0), &visible, ALL), Cursor::At(1));
        assert_eq!(move_prev(Cursor::At(3), &visible, ALL), Cursor::At(2));
    }

    #[test]
    fn test_no_eligible_rows() {
        assert_eq!(move_next(Cursor::None, &[], VISIBLE), Cursor::None);
        assert_eq!(move_prev(Cursor::None, &[], ALL), Cursor::None);
        assert_eq!(move_next(Cursor::None, &[false, false], VISIBLE), Cursor::None);
        assert_eq!(move_prev(Cursor::At(1), &[false, false], VISIBLE), Cursor::None);
    }

    #[test]
    fn test_allows() {
        let visible = [true, false];
        assert!(VISIBLE.allows(0, &visible));
        assert!(!VISIBLE.allows(1, &visible));
        assert!(ALL.allows(1, &visible));
        assert!(!ALL.allows(2, &visible));
    }

    #[test]
    fn test_cursor_conversions() {
        assert_eq!(Cursor::from(Some(3)).index(), Some(3));
        assert!(Cursor::from(None).is_none());
    }
}
