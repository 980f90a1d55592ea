//! Life grid storage and transition rule

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// A 2D grid of binary cells, row-major, double-buffered
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    scratch: Vec<u8>,
    generation: u64,
}

impl Grid {
    /// An all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![0; width * height],
            scratch: vec![0; width * height],
            generation: 0,
        }
    }

    /// A uniformly random grid; the same seed reproduces the same run
    pub fn random(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut grid = Self::new(width, height);
        for cell in &mut grid.cells {
            *cell = rng.random_range(0..=1u8);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)] == 1
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.idx(x, y);
        self.cells[i] = alive as u8;
    }

    /// Count live cells in the 8-neighborhood. The neighborhood is clamped at
    /// the edges, so border cells simply have fewer neighbors.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.width - 1);
        let y1 = (y + 1).min(self.height - 1);

        let mut count = 0;
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                count += self.cells[self.idx(nx, ny)];
            }
        }
        count - self.cells[self.idx(x, y)]
    }

    /// Advance one generation. Survival on 2 or 3 neighbors, birth on
    /// exactly 3, death otherwise.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.idx(x, y);
                let alive = self.cells[i] == 1;
                let neighbors = self.live_neighbors(x, y);
                self.scratch[i] = match (alive, neighbors) {
                    (true, 2) | (true, 3) => 1,
                    (false, 3) => 1,
                    _ => 0,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }
}
