use std::path::PathBuf;

use clap::Parser;

use crate::source::{
    BoardSource, DemoSource, FileSource, RandomSource, DEFAULT_DENSITY, DEFAULT_RANDOM_SEED,
};

pub const DEFAULT_ITERATIONS: usize = 5;

/// bounded Game of Life, printing every generation as rows of digits.
///
/// without arguments the built-in demo board runs for 5 generations.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "golstep", version)]
pub struct Config {
    /// board file: rows of 0/1 digits, or a picture where `#` is a live cell
    #[arg(conflicts_with = "random")]
    pub board: Option<PathBuf>,

    /// number of generations to compute
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// start from a random board of this size
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_size)]
    pub random: Option<(usize, usize)>,

    /// chance of each random cell to be live
    #[arg(long, default_value_t = DEFAULT_DENSITY, requires = "random")]
    pub density: f64,

    /// seed of the random board
    #[arg(long, default_value_t = DEFAULT_RANDOM_SEED, requires = "random")]
    pub seed: u64,
}

fn parse_size(value: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = value
        .split_once(|c: char| c.eq_ignore_ascii_case(&'x'))
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{value}'"))?;
    let parse = |n: &str| {
        n.parse::<usize>()
            .map_err(|_| format!("'{n}' is not a board dimension"))
    };
    Ok((parse(rows)?, parse(cols)?))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: None,
            iterations: DEFAULT_ITERATIONS,
            random: None,
            density: DEFAULT_DENSITY,
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}

impl Config {
    pub fn board_source(&self) -> Box<dyn BoardSource> {
        match (&self.board, self.random) {
            (Some(path), _) => Box::new(FileSource::new(path)),
            (None, Some((rows, cols))) => Box::new(
                RandomSource::new(rows, cols)
                    .density(self.density)
                    .seed(self.seed),
            ),
            (None, None) => Box::new(DemoSource),
        }
    }
}
