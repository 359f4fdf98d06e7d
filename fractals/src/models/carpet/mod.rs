use serde::{Deserialize, Serialize};

use crate::error::FractalError;
use crate::result::FractalResult;

/// Sierpinski carpet over a 3^order square grid: the center ninth of
/// every block is punched out, recursively.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SierpinskiCarpet {
    pub order: u32,
}

/// Binary occupancy grid, row-major; 255 for kept cells, 0 for holes.
#[derive(Debug, Clone)]
pub struct CarpetGrid {
    pub size: usize,
    pub cells: Vec<u8>,
}

impl CarpetGrid {
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.cells[row * self.size + col] != 0
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }
}

impl SierpinskiCarpet {
    pub const MAX_ORDER: u32 = 7;

    pub fn new(order: u32) -> Self {
        Self { order }
    }

    pub fn grid(&self) -> FractalResult<CarpetGrid> {
        if self.order > Self::MAX_ORDER {
            return Err(FractalError::OrderTooLarge {
                order: self.order,
                max: Self::MAX_ORDER,
            });
        }

        let size = 3usize.pow(self.order);
        let mut cells = vec![255u8; size * size];
        remove_center(&mut cells, size, 0, 0, size);
        Ok(CarpetGrid { size, cells })
    }
}

impl Default for SierpinskiCarpet {
    fn default() -> Self {
        Self::new(5)
    }
}

fn remove_center(cells: &mut [u8], width: usize, x: usize, y: usize, s: usize) {
    if s == 1 {
        return;
    }

    let s3 = s / 3;
    for row in y + s3..y + 2 * s3 {
        for col in x + s3..x + 2 * s3 {
            cells[row * width + col] = 0;
        }
    }

    for dx in 0..3 {
        for dy in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }
            remove_center(cells, width, x + dx * s3, y + dy * s3, s3);
        }
    }
}
