use std::{io::stdout, process::exit};

use clap::Parser;

pub use utils::Pos;
mod utils;

pub use error::{Error, Result};
mod error;

pub use world::{Cell, Grid};
pub mod world;

pub use sim::{next_generation, RunSummary, Sim};
mod sim;

pub use source::BoardSource;
mod source;

pub use view::{BoardRenderer, TextRenderer};
mod view;

pub use config::Config;
mod config;

fn run(config: &Config) -> Result<RunSummary> {
    let source = config.board_source();
    log::info!("loading {}", source.describe());
    let seed = source.board()?;

    let mut renderer = TextRenderer::new(stdout().lock());
    Sim::new(seed).run(config.iterations, &mut renderer)
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(summary) => {
            log::info!(
                "{} generations done, {} live cells left",
                summary.generations,
                summary.final_population
            );
            if let Some(cycle) = summary.cycle {
                log::info!(
                    "period {} detected at generation {}",
                    cycle.period,
                    cycle.detected_at
                );
            }
        }
        Err(error) => {
            log::error!("run aborted: {error}");
            eprintln!("[error] {error}");
            exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_run() {
        let config = Config::default();
        let seed = config.board_source().board().unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        let summary = Sim::new(seed)
            .run(config.iterations, &mut renderer)
            .unwrap();
        assert_eq!(summary.generations, 5);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let boards: Vec<_> = text.split("\n\n").collect();
        assert_eq!(boards.len(), 6);
        assert_eq!(
            boards[0],
            "Conway's GameOfLife\n\
             0,0,0,0,0,\n\
             0,0,0,1,0,\n\
             0,0,1,1,0,\n\
             0,0,0,1,0,\n\
             0,0,0,0,0,"
        );
        assert_eq!(
            boards[1],
            "0,0,0,0,0,\n\
             0,0,1,1,0,\n\
             0,0,1,1,1,\n\
             0,0,1,1,0,\n\
             0,0,0,0,0,"
        );
    }
}
