//! Sequential page and cell assignment.
//!
//! Items are placed densely in input order: item `i` lands on page
//! `i / capacity` in cell `i % capacity`. There is no reordering and no
//! gap-filling; a partially filled last page simply has fewer cells drawn.

use crate::types::GridPosition;

/// Resolved page and cell for one item in the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Page the item lands on (0-based)
    pub page_index: usize,
    /// Cell within the page (0-based, row-major)
    pub cell_index: usize,
    /// Row and column the cell index resolves to
    pub pos: GridPosition,
}

/// Placement of the item at `index` for a grid with `columns` columns and
/// `capacity` cells per page.
pub fn placement_for(index: usize, columns: usize, capacity: usize) -> Placement {
    let cell_index = index % capacity;
    Placement {
        page_index: index / capacity,
        cell_index,
        pos: GridPosition::new(cell_index / columns, cell_index % columns),
    }
}

/// Dense, order-preserving placements for `count` items.
pub fn paginate(count: usize, columns: usize, capacity: usize) -> Vec<Placement> {
    (0..count)
        .map(|index| placement_for(index, columns, capacity))
        .collect()
}

/// Number of pages needed for `count` items. Zero items need zero pages.
pub fn page_count(count: usize, capacity: usize) -> usize {
    count.div_ceil(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_follow_division_and_remainder() {
        let placements = paginate(25, 3, 9);
        for (i, placement) in placements.iter().enumerate() {
            assert_eq!(placement.page_index, i / 9);
            assert_eq!(placement.cell_index, i % 9);
            assert_eq!(placement.pos.row, (i % 9) / 3);
            assert_eq!(placement.pos.col, (i % 9) % 3);
        }
    }

    #[test]
    fn page_index_is_non_decreasing() {
        let placements = paginate(40, 3, 9);
        for pair in placements.windows(2) {
            assert!(pair[0].page_index <= pair[1].page_index);
        }
    }

    #[test]
    fn ten_items_fill_one_page_and_spill_one() {
        let placements = paginate(10, 3, 9);
        assert_eq!(page_count(10, 9), 2);

        let first_page: Vec<_> = placements.iter().filter(|p| p.page_index == 0).collect();
        assert_eq!(first_page.len(), 9);
        assert_eq!(first_page[8].cell_index, 8);

        let second_page: Vec<_> = placements.iter().filter(|p| p.page_index == 1).collect();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].cell_index, 0);
        assert_eq!(second_page[0].pos, GridPosition::new(0, 0));
    }

    #[test]
    fn exactly_full_page_does_not_spill() {
        let placements = paginate(9, 3, 9);
        assert_eq!(page_count(9, 9), 1);
        assert!(placements.iter().all(|p| p.page_index == 0));
    }

    #[test]
    fn zero_items_need_zero_pages() {
        assert!(paginate(0, 3, 9).is_empty());
        assert_eq!(page_count(0, 9), 0);
    }

    #[test]
    fn boundary_crossing_wraps_cell_to_zero() {
        let before = placement_for(8, 3, 9);
        let after = placement_for(9, 3, 9);
        assert_eq!(before.page_index, 0);
        assert_eq!(after.page_index, 1);
        assert_eq!(after.cell_index, 0);
    }
}
