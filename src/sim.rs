use std::hash::{Hash, Hasher};

use metrohash::MetroHash64;

use crate::{pos, utils::clipped_window, BoardRenderer, Cell, Grid, Pos, Result};

/// computes the generation following `board`.
///
/// every neighbour count is taken from `board` itself, which is only borrowed,
/// so the result never depends on cells already updated in the same tick.
pub fn next_generation(board: &Grid) -> Grid {
    let cells = board
        .positions()
        .map(|pos| {
            let cell = board.get(pos).unwrap_or_default();
            next_state(cell, live_neighbours(board, pos))
        })
        .collect();
    Grid::from_cells(board.rows(), board.cols(), cells)
}

/// counts the live cells around `pos`, edges are hard (no wrapping).
pub fn live_neighbours(board: &Grid, pos: Pos) -> usize {
    clipped_window(pos.row, board.rows())
        .flat_map(|row| clipped_window(pos.col, board.cols()).map(move |col| pos!(row, col)))
        .filter(|&neighbour| neighbour != pos)
        .filter(|&neighbour| board.get(neighbour).is_some_and(Cell::is_live))
        .count()
}

pub fn next_state(cell: Cell, live_neighbours: usize) -> Cell {
    match (cell, live_neighbours) {
        (Cell::Live, count) if count < 2 => Cell::Dead, // under-population
        (Cell::Live, 2 | 3) => Cell::Live,              // survives
        (Cell::Live, _) => Cell::Dead,                  // over-population
        (Cell::Dead, 3) => Cell::Live,                  // reproduction
        (Cell::Dead, _) => Cell::Dead,
    }
}

fn digest(board: &Grid) -> u64 {
    let mut hasher = MetroHash64::default();
    board.hash(&mut hasher);
    hasher.finish()
}

/// the board repeats every `period` generations, noticed at `detected_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub period: usize,
    pub detected_at: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: usize,
    pub final_population: usize,
    pub cycle: Option<Cycle>,
}

/// the one board kept for repeat detection, moved forward every time the
/// distance to it reaches `power`, which then doubles (Brent's method).
#[derive(Debug)]
struct Checkpoint {
    board: Grid,
    digest: u64,
    generation: usize,
    power: usize,
}

impl Checkpoint {
    fn new(board: Grid, generation: usize, power: usize) -> Self {
        let digest = digest(&board);
        Self {
            board,
            digest,
            generation,
            power,
        }
    }
}

pub const TITLE: &str = "Conway's GameOfLife";

/// drives the stepper over a seed, one generation at a time.
#[derive(Debug)]
pub struct Sim {
    board: Grid,
    generation: usize,
    checkpoint: Checkpoint,
    cycle: Option<Cycle>,
}

impl Sim {
    pub fn new(seed: Grid) -> Self {
        let checkpoint = Checkpoint::new(seed.clone(), 0, 1);
        Self {
            board: seed,
            generation: 0,
            checkpoint,
            cycle: None,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    pub fn step(&mut self) {
        self.board = next_generation(&self.board);
        self.generation += 1;
        log::debug!(
            "generation {}: {} live cells",
            self.generation,
            self.board.live_count()
        );
        self.record();
    }

    fn record(&mut self) {
        if self.cycle.is_some() {
            return;
        }

        let digest = digest(&self.board);
        let distance = self.generation - self.checkpoint.generation;
        if digest == self.checkpoint.digest && self.board == self.checkpoint.board {
            let cycle = Cycle {
                period: distance,
                detected_at: self.generation,
            };
            match cycle.period {
                1 => log::info!("still life reached by generation {}", self.generation),
                period => log::info!(
                    "board repeats every {period} generations, seen at generation {}",
                    self.generation
                ),
            }
            self.cycle = Some(cycle);
        } else if distance == self.checkpoint.power {
            self.checkpoint = Checkpoint {
                board: self.board.clone(),
                digest,
                generation: self.generation,
                power: self.checkpoint.power.saturating_mul(2),
            };
        }
    }

    /// renders the seed, then each of the next `iterations` generations.
    pub fn run(
        &mut self,
        iterations: usize,
        renderer: &mut impl BoardRenderer,
    ) -> Result<RunSummary> {
        log::info!(
            "running {iterations} generations over a {}x{} board",
            self.board.rows(),
            self.board.cols()
        );
        renderer.title(TITLE)?;
        renderer.render(&self.board)?;

        for _ in 0..iterations {
            self.step();
            renderer.separator()?;
            renderer.render(&self.board)?;
        }

        Ok(RunSummary {
            generations: self.generation(),
            final_population: self.board.live_count(),
            cycle: self.cycle(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextRenderer;

    fn blinker_vertical() -> Grid {
        Grid::with_live(5, 5, [pos!(1, 2), pos!(2, 2), pos!(3, 2)]).unwrap()
    }

    fn blinker_horizontal() -> Grid {
        Grid::with_live(5, 5, [pos!(2, 1), pos!(2, 2), pos!(2, 3)]).unwrap()
    }

    fn block() -> Grid {
        Grid::with_live(4, 4, [pos!(1, 1), pos!(1, 2), pos!(2, 1), pos!(2, 2)]).unwrap()
    }

    #[test]
    fn rule_table() {
        for count in 0..=8 {
            let live = next_state(Cell::Live, count);
            let dead = next_state(Cell::Dead, count);
            assert_eq!(live.is_live(), count == 2 || count == 3, "live with {count}");
            assert_eq!(dead.is_live(), count == 3, "dead with {count}");
        }
    }

    #[test]
    fn blinker_oscillates() {
        let first = next_generation(&blinker_vertical());
        assert_eq!(first, blinker_horizontal());
        let second = next_generation(&first);
        assert_eq!(second, blinker_vertical());
    }

    #[test]
    fn block_is_still() {
        assert_eq!(next_generation(&block()), block());
    }

    #[test]
    fn step_is_pure_and_deterministic() {
        let board = Grid::from_digits(&[
            vec![1, 0, 1, 1],
            vec![0, 1, 1, 0],
            vec![1, 1, 0, 0],
        ])
        .unwrap();
        let before = board.clone();
        let a = next_generation(&board);
        let b = next_generation(&board);
        assert_eq!(board, before);
        assert_eq!(a, b);
        assert_eq!(a.rows(), board.rows());
        assert_eq!(a.cols(), board.cols());
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        let full = Grid::from_digits(&vec![vec![1; 4]; 4]).unwrap();
        assert_eq!(live_neighbours(&full, pos!(0, 0)), 3);
        assert_eq!(live_neighbours(&full, pos!(3, 3)), 3);
        assert_eq!(live_neighbours(&full, pos!(0, 2)), 5);
        assert_eq!(live_neighbours(&full, pos!(2, 0)), 5);
        assert_eq!(live_neighbours(&full, pos!(1, 2)), 8);

        let corner =
            Grid::with_live(3, 3, [pos!(0, 0), pos!(0, 1), pos!(1, 0), pos!(1, 1)]).unwrap();
        assert_eq!(live_neighbours(&corner, pos!(0, 0)), 3);
        // no wrap: the opposite corner sees only (1, 1)
        assert_eq!(live_neighbours(&corner, pos!(2, 2)), 1);
    }

    #[test]
    fn single_cell_boards() {
        let lonely = Grid::from_digits(&[vec![1]]).unwrap();
        assert_eq!(live_neighbours(&lonely, pos!(0, 0)), 0);
        assert_eq!(next_generation(&lonely).live_count(), 0);
        assert_eq!(live_neighbours(&lonely, pos!(usize::MAX, usize::MAX)), 0);
    }

    #[test]
    fn sim_detects_still_life() {
        let mut sim = Sim::new(block());
        sim.step();
        assert_eq!(
            sim.cycle(),
            Some(Cycle {
                period: 1,
                detected_at: 1
            })
        );
    }

    #[test]
    fn sim_detects_blinker_period() {
        let mut sim = Sim::new(blinker_vertical());
        sim.step();
        sim.step();
        assert_eq!(sim.cycle(), None);
        sim.step();
        assert_eq!(sim.generation(), 3);
        assert_eq!(
            sim.cycle(),
            Some(Cycle {
                period: 2,
                detected_at: 3
            })
        );
    }

    #[test]
    fn sim_keeps_a_single_checkpoint() {
        // a glider travels across the board and never repeats within 200 ticks
        let glider = [pos!(1, 2), pos!(2, 3), pos!(3, 1), pos!(3, 2), pos!(3, 3)];
        let mut sim = Sim::new(Grid::with_live(64, 64, glider).unwrap());
        for _ in 0..200 {
            sim.step();
        }
        assert_eq!(sim.cycle(), None);
        assert_eq!(sim.board.live_count(), 5);
        // checkpoints were taken at 1, 3, 7, .. 127; only the latest is held
        assert_eq!(sim.checkpoint.generation, 127);
        assert_eq!(sim.checkpoint.power, 128);
        assert_eq!(sim.checkpoint.digest, digest(&sim.checkpoint.board));
        assert!(sim.generation() - sim.checkpoint.generation < sim.checkpoint.power);
    }

    #[test]
    fn run_renders_every_generation() {
        let mut out = Vec::new();
        let mut sim = Sim::new(blinker_vertical());
        let summary = sim.run(3, &mut TextRenderer::new(&mut out)).unwrap();

        assert_eq!(summary.generations, 3);
        assert_eq!(summary.final_population, 3);
        assert_eq!(summary.cycle.map(|cycle| cycle.period), Some(2));

        let text = String::from_utf8(out).unwrap();
        let boards: Vec<_> = text.split("\n\n").collect();
        assert_eq!(boards.len(), 4);
        assert!(boards[0].starts_with(TITLE));
        assert!(boards[1].contains("0,1,1,1,0,"));
    }
}
