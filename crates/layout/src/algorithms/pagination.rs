use danfe_types::DrawCursor;

/// Tolerance for floating point comparisons of vertical positions.
pub const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a block of `height` placed at the cursor ends above
/// `bottom`, the lowest usable y of the page.
pub fn check_fit(cursor: &DrawCursor, height: f32, bottom: f32) -> BreakAnalysis {
    let available = (bottom - cursor.y).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// Splits `len` items into consecutive `(start, end)` ranges of at most
/// `per_page` items. Zero items still yield one empty range, so a table
/// header is always drawn.
pub fn chunk_ranges(len: usize, per_page: usize) -> Vec<(usize, usize)> {
    let per_page = per_page.max(1);
    if len == 0 {
        return vec![(0, 0)];
    }
    (0..len)
        .step_by(per_page)
        .map(|start| (start, (start + per_page).min(len)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exactly_at_bottom() {
        let cursor = DrawCursor::new(10.0, 700.0, 575.0);
        assert!(!check_fit(&cursor, 132.0, 832.0).should_break);
        assert!(!check_fit(&cursor, 132.005, 832.0).should_break);
        assert!(check_fit(&cursor, 133.0, 832.0).should_break);
    }

    #[test]
    fn remaining_height_never_negative() {
        let cursor = DrawCursor::new(10.0, 900.0, 575.0);
        let analysis = check_fit(&cursor, 10.0, 832.0);
        assert!(analysis.should_break);
        assert_eq!(analysis.remaining_height, 0.0);
    }

    #[test]
    fn chunking_covers_every_item_once() {
        for len in 0..50 {
            for per_page in 1..12 {
                let ranges = chunk_ranges(len, per_page);
                let expected_pages = if len == 0 { 1 } else { len.div_ceil(per_page) };
                assert_eq!(ranges.len(), expected_pages);
                let flat: Vec<usize> = ranges.iter().flat_map(|&(s, e)| s..e).collect();
                assert_eq!(flat, (0..len).collect::<Vec<_>>());
            }
        }
    }
}
