//! Grid placement for swatches.
//!
//! Cells are laid out row-major in a fixed number of columns, with uniform
//! padding before the first cell and between cells on both axes.

use floem::kurbo::Rect;

/// Rectangle of the cell at 1-based `index`.
///
/// # Panics
///
/// If `index` is 0 or `column_count` is 0.
pub fn rect_for_index(index: usize, diameter: f64, padding: f64, column_count: usize) -> Rect {
    assert!(index >= 1, "swatch indices are 1-based");
    assert!(column_count >= 1, "grid needs at least one column");
    let i = index - 1;
    let column = (i % column_count) as f64;
    let row = (i / column_count) as f64;
    let x = column * diameter + padding + column * padding;
    let y = row * diameter + padding + row * padding;
    Rect::from_origin_size((x, y), (diameter, diameter))
}

/// Number of rows needed for `count` cells.
pub fn row_count(count: usize, column_count: usize) -> usize {
    assert!(column_count >= 1, "grid needs at least one column");
    count.div_ceil(column_count)
}

/// Vertical extent of a grid section holding `count` cells, padding included.
///
/// An empty section takes no space.
pub fn section_height(count: usize, diameter: f64, padding: f64, column_count: usize) -> f64 {
    let rows = row_count(count, column_count);
    if rows == 0 {
        return 0.0;
    }
    rows as f64 * diameter + (rows + 1) as f64 * padding
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: f64 = 36.0;
    const P: f64 = 14.0;

    #[test]
    fn first_cell_sits_inside_padding() {
        let rect = rect_for_index(1, D, P, 4);
        assert_eq!((rect.x0, rect.y0), (P, P));
        assert_eq!((rect.width(), rect.height()), (D, D));
    }

    #[test]
    fn wraps_after_column_count() {
        let rect = rect_for_index(5, D, P, 4);
        assert_eq!((rect.x0, rect.y0), (P, D + 2.0 * P));
    }

    #[test]
    fn columns_step_by_diameter_plus_padding() {
        let rect = rect_for_index(4, D, P, 4);
        assert_eq!(rect.x0, 3.0 * D + 4.0 * P);
        assert_eq!(rect.y0, P);
    }

    #[test]
    fn placement_is_pure() {
        assert_eq!(rect_for_index(7, D, P, 3), rect_for_index(7, D, P, 3));
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn index_zero_panics() {
        rect_for_index(0, D, P, 4);
    }

    #[test]
    fn section_heights() {
        assert_eq!(section_height(0, D, P, 4), 0.0);
        assert_eq!(section_height(3, D, P, 4), D + 2.0 * P);
        assert_eq!(section_height(4, D, P, 4), D + 2.0 * P);
        assert_eq!(section_height(5, D, P, 4), 2.0 * D + 3.0 * P);
        assert_eq!(row_count(9, 4), 3);
    }

    #[test]
    fn last_cell_fits_in_section() {
        let rect = rect_for_index(6, D, P, 4);
        assert_eq!(rect.y1 + P, section_height(6, D, P, 4));
    }
}
