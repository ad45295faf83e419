//! Navigation selection logic
//!
//! Pure functions for moving the file list selection.

/// Move the selection down one row, wrapping to the top
///
/// # Examples
/// ```
/// use filetui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move the selection up one row, wrapping to the bottom
///
/// ```
/// use filetui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Keep a selection valid after the list was replaced
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_selection() {
        assert_eq!(next_selection(Some(3), 0), None);
        assert_eq!(prev_selection(Some(3), 0), None);
        assert_eq!(clamp_selection(Some(3), 0), None);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(prev_selection(None, 5), Some(4));
    }

    #[test]
    fn test_stale_index_after_shrink() {
        // List went from 10 entries to 3
        assert_eq!(next_selection(Some(9), 3), Some(0));
        assert_eq!(prev_selection(Some(9), 3), Some(2));
        assert_eq!(clamp_selection(Some(9), 3), Some(2));
    }

    #[test]
    fn test_clamp_defaults_to_top() {
        assert_eq!(clamp_selection(None, 4), Some(0));
        assert_eq!(clamp_selection(Some(2), 4), Some(2));
    }
}
