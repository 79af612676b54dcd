//! Grid tests - bounds, occupancy and in-place row clears

use learntris::core::Grid;
use learntris::types::{Color, LearntrisError, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i32, color: Color) {
    for x in 0..grid.width() as i32 {
        grid.set_cell(x, y, Some(color)).unwrap();
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), DEFAULT_GRID_WIDTH);
    assert_eq!(grid.height(), DEFAULT_GRID_HEIGHT);

    for y in 0..DEFAULT_GRID_HEIGHT as i32 {
        for x in 0..DEFAULT_GRID_WIDTH as i32 {
            assert_eq!(grid.cell_at(x, y), Ok(None), "Cell ({}, {})", x, y);
            assert!(!grid.is_occupied(x, y));
        }
    }
}

#[test]
fn test_grid_cell_at_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(
        grid.cell_at(-1, 0),
        Err(LearntrisError::OutOfBounds { x: -1, y: 0 })
    );
    assert!(grid.cell_at(0, -1).is_err());
    assert!(grid.cell_at(10, 0).is_err());
    assert!(grid.cell_at(0, 22).is_err());
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new();

    grid.set_cell(5, 10, Some(Color::Magenta)).unwrap();
    assert_eq!(grid.cell_at(5, 10), Ok(Some(Color::Magenta)));
    assert!(grid.is_occupied(5, 10));

    grid.set_cell(5, 10, None).unwrap();
    assert_eq!(grid.cell_at(5, 10), Ok(None));
    assert!(!grid.is_occupied(5, 10));
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new();

    assert!(grid.set_cell(-1, 0, Some(Color::Red)).is_err());
    assert!(grid.set_cell(0, -1, Some(Color::Red)).is_err());
    assert_eq!(
        grid.set_cell(10, 0, Some(Color::Red)),
        Err(LearntrisError::OutOfBounds { x: 10, y: 0 })
    );
    assert!(grid.set_cell(0, 22, Some(Color::Red)).is_err());
    assert!(grid.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_out_of_bounds_is_not_occupied() {
    let grid = Grid::new();
    assert!(!grid.is_occupied(-1, 0));
    assert!(!grid.is_occupied(0, 100));
}

#[test]
fn test_grid_is_row_full() {
    let mut grid = Grid::new();
    assert!(!grid.is_row_full(5));

    fill_row(&mut grid, 5, Color::Blue);
    assert!(grid.is_row_full(5));

    fill_row(&mut grid, 6, Color::Blue);
    grid.set_cell(9, 6, None).unwrap();
    assert!(!grid.is_row_full(6));

    assert!(!grid.is_row_full(DEFAULT_GRID_HEIGHT));
}

#[test]
fn test_clear_full_rows_empties_in_place() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 21, Color::Orange);
    grid.set_cell(3, 20, Some(Color::Green)).unwrap();

    assert_eq!(grid.clear_full_rows(), 1);

    assert!(grid.row(21).iter().all(|c| c.is_none()));
    // Blocks above a cleared row do not fall.
    assert_eq!(grid.cell_at(3, 20), Ok(Some(Color::Green)));
    assert_eq!(grid.cell_at(3, 21), Ok(None));
}

#[test]
fn test_clear_full_rows_counts_non_adjacent_rows() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, Color::Red);
    fill_row(&mut grid, 10, Color::Cyan);
    fill_row(&mut grid, 21, Color::Yellow);
    grid.set_cell(0, 15, Some(Color::Red)).unwrap();

    assert_eq!(grid.clear_full_rows(), 3);
    assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
    assert_eq!(grid.clear_full_rows(), 0);
}

#[test]
fn test_reset() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3, Color::Red);
    grid.set_cell(7, 19, Some(Color::Blue)).unwrap();

    grid.reset();
    assert!(grid.cells().iter().all(|c| c.is_none()));
    assert_eq!(grid.width(), DEFAULT_GRID_WIDTH);
    assert_eq!(grid.height(), DEFAULT_GRID_HEIGHT);
}

#[test]
fn test_custom_dimensions() {
    let mut grid = Grid::with_dimensions(8, 5);
    assert_eq!(grid.cells().len(), 40);
    assert!(grid.set_cell(7, 4, Some(Color::Red)).is_ok());
    assert!(grid.set_cell(8, 4, Some(Color::Red)).is_err());
    assert_eq!(grid.rows().count(), 5);
}
