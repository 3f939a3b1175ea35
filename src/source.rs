use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{pos, Cell, Error, Grid, Result};

/// supplies the board a run starts from.
pub trait BoardSource {
    fn board(&self) -> Result<Grid>;
    fn describe(&self) -> String;
}

/// the stock demonstration seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoSource;

const DEMO_BOARD: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0],
];

impl BoardSource for DemoSource {
    fn board(&self) -> Result<Grid> {
        let digits: Vec<Vec<u8>> = DEMO_BOARD.iter().map(|row| row.to_vec()).collect();
        Grid::from_digits(&digits)
    }

    fn describe(&self) -> String {
        "built-in demo board".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self { path }
    }
}

impl BoardSource for FileSource {
    fn board(&self) -> Result<Grid> {
        let content = fs::read_to_string(&self.path)?;
        deserialize(&content)
    }

    fn describe(&self) -> String {
        format!("board file {}", self.path.display())
    }
}

/// parses a board, either as rows of `0`/`1` digits (the text dump format) or
/// as a picture where `#` marks a live cell.
pub fn deserialize(str: &str) -> Result<Grid> {
    let is_digit_format = str
        .lines()
        .flat_map(str::chars)
        .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace());

    if is_digit_format {
        deserialize_digits(str)
    } else {
        deserialize_picture(str)
    }
}

fn deserialize_digits(str: &str) -> Result<Grid> {
    let rows: Vec<Vec<u8>> = str
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .flat_map(str::bytes)
                .map(|b| b - b'0')
                .collect()
        })
        .collect();
    Grid::from_digits(&rows)
}

fn deserialize_picture(str: &str) -> Result<Grid> {
    let lines: Vec<&str> = str.lines().collect();
    let rows = lines.len();
    let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut lives = vec![];
    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == '#' {
                lives.push(pos!(row, col));
            }
        }
    }
    Grid::with_live(rows, cols, lives)
}

pub const DEFAULT_DENSITY: f64 = 0.35;
pub const DEFAULT_RANDOM_SEED: u64 = 0x5EED_0F_11FE;

/// a board filled at random, reproducible from its seed.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
}

impl RandomSource {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            density: DEFAULT_DENSITY,
            seed: DEFAULT_RANDOM_SEED,
        }
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl BoardSource for RandomSource {
    fn board(&self) -> Result<Grid> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidConfig(format!(
                "density must be between 0 and 1, got {}",
                self.density
            )));
        }

        let len = Grid::checked_len(self.rows, self.cols)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let cells = (0..len)
            .map(|_| {
                if rng.gen_bool(self.density) {
                    Cell::Live
                } else {
                    Cell::Dead
                }
            })
            .collect();
        Ok(Grid::from_cells(self.rows, self.cols, cells))
    }

    fn describe(&self) -> String {
        format!(
            "random {}x{} board (density {}, seed {})",
            self.rows, self.cols, self.density, self.seed
        )
    }
}
