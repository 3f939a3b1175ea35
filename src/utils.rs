use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// inclusive range of indices at most one step away from `n`, clipped to `[0, len)`.
pub fn clipped_window(n: usize, len: usize) -> std::ops::RangeInclusive<usize> {
    n.saturating_sub(1)..=n.saturating_add(1).min(len - 1)
}

#[test]
fn test_clipped_window() {
    assert_eq!(clipped_window(0, 5), 0..=1);
    assert_eq!(clipped_window(2, 5), 1..=3);
    assert_eq!(clipped_window(4, 5), 3..=4);
    assert_eq!(clipped_window(0, 1), 0..=0);
    assert_eq!(clipped_window(usize::MAX, 5), (usize::MAX - 1)..=4);
}
