//! Grid segmentation regression test
//!
//!   Test 0: tiled strategy on the standard 6x6 grid
//!   Test 1: nested strategy on the standard 6x6 grid
//!   Test 2: a blank grid row, tiled keeps the layout, nested drops the row
//!   Test 3: repeated runs give identical output

use puzzleseg_core::Region;
use puzzleseg_segment::{GridOptions, GridStrategy, ZoneOptions, locate_zones, segment_grid};
use puzzleseg_test::{GRID_PITCH, PuzzleFixture, RegParams};

fn grid_zone(fx: &PuzzleFixture) -> Region {
    locate_zones(&fx.pix, &ZoneOptions::default().with_min_area(1000), 128)
        .expect("zones")
        .grid
}

/// Test 0: tiled grid
#[test]
fn test_0_tiled() {
    let mut rp = RegParams::new("grid_0_tiled");
    let fx = PuzzleFixture::standard().expect("fixture");
    let zone = grid_zone(&fx);

    let seg = segment_grid(&fx.pix, &zone, &GridOptions::default(), 128);
    rp.compare_true(seg.strategy == GridStrategy::Tiled);
    rp.compare_values(6.0, seg.rows() as f64, 0.0);
    rp.compare_values(6.0, seg.cols() as f64, 0.0);
    rp.compare_values(36.0, seg.cells.len() as f64, 0.0);
    rp.compare_values(GRID_PITCH as f64, seg.cell_width, 1.0);
    rp.compare_values(GRID_PITCH as f64, seg.cell_height, 1.0);

    let first = seg.cell_at(0, 0).expect("cell");
    rp.compare_regions(&Region::new_unchecked(200, 41, 226, 66), &first.region, 0);
    let last = seg.cell_at(5, 5).expect("cell");
    rp.compare_regions(&Region::new_unchecked(353, 193, 379, 218), &last.region, 0);

    // each glyph falls inside its own cell
    for (r, row) in fx.grid.iter().enumerate() {
        for (c, glyph) in row.iter().enumerate() {
            let glyph = glyph.expect("full grid");
            let ok = seg.cell_at(r, c).is_some_and(|cell| cell.region.contains_region(&glyph));
            rp.compare_true(ok);
        }
    }

    assert!(rp.cleanup(), "grid test 0 failed");
}

/// Test 1: nested grid gives tight glyph boxes
#[test]
fn test_1_nested() {
    let mut rp = RegParams::new("grid_1_nested");
    let fx = PuzzleFixture::standard().expect("fixture");
    let zone = grid_zone(&fx);

    let opts = GridOptions::default().with_strategy(GridStrategy::Nested);
    let seg = segment_grid(&fx.pix, &zone, &opts, 128);
    rp.compare_regions(&Region::new_unchecked(208, 47, 371, 212), &seg.region, 0);
    rp.compare_values(6.0, seg.rows() as f64, 0.0);
    rp.compare_values(6.0, seg.cols() as f64, 0.0);
    for (r, row) in fx.grid.iter().enumerate() {
        for (c, glyph) in row.iter().enumerate() {
            let glyph = glyph.expect("full grid");
            match seg.cell_at(r, c) {
                Some(cell) => {
                    rp.compare_regions(&glyph, &cell.region, 0);
                }
                None => {
                    rp.compare_true(false);
                }
            }
        }
    }

    assert!(rp.cleanup(), "grid test 1 failed");
}

/// Test 2: blank row
#[test]
fn test_2_blank_row() {
    let mut rp = RegParams::new("grid_2_blank_row");
    let fx = PuzzleFixture::with_blank_grid_row(2).expect("fixture");
    let zone = grid_zone(&fx);

    let tiled = segment_grid(&fx.pix, &zone, &GridOptions::default(), 128);
    rp.compare_values(6.0, tiled.rows() as f64, 0.0);
    rp.compare_values(GRID_PITCH as f64, tiled.cell_height, 1.0);
    for glyph in fx.grid[3].iter().flatten() {
        let ok = tiled.row(3).any(|cell| cell.region.contains_region(glyph));
        rp.compare_true(ok);
    }

    let nested = segment_grid(
        &fx.pix,
        &zone,
        &GridOptions::default().with_strategy(GridStrategy::Nested),
        128,
    );
    rp.compare_values(5.0, nested.rows() as f64, 0.0);
    rp.compare_values(30.0, nested.cells.len() as f64, 0.0);

    assert!(rp.cleanup(), "grid test 2 failed");
}

/// Test 3: idempotence
#[test]
fn test_3_repeatable() {
    let mut rp = RegParams::new("grid_3_repeatable");
    let fx = PuzzleFixture::standard().expect("fixture");
    let zone = grid_zone(&fx);

    for strategy in [GridStrategy::Tiled, GridStrategy::Nested] {
        let opts = GridOptions::default().with_strategy(strategy);
        let a = segment_grid(&fx.pix, &zone, &opts, 128);
        let b = segment_grid(&fx.pix, &zone, &opts, 128);
        rp.compare_true(a == b);
    }

    assert!(rp.cleanup(), "grid test 3 failed");
}
