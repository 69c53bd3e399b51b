use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, bail};
use liblife::{
    Game,
    board::{GameBoard, TileState},
    history::{GenerationHistory, Sampler},
    pattern::{self, Pattern},
};
use log::{debug, info};

use crate::{
    config::RunConfig,
    pacer::Pacer,
    render::{
        self,
        text::{self, Glyphs},
    },
};

pub struct RunSummary {
    pub iterations: usize,
    pub final_board: GameBoard,
    pub samples: usize,
    pub recent: GenerationHistory,
    pub final_image: Option<PathBuf>,
    pub elapsed: Duration,
}

pub fn run_simulation(
    config: &RunConfig,
    iterations: usize,
    run_id: &str,
) -> anyhow::Result<RunSummary> {
    let board = match &config.pattern_path {
        Some(pattern_path) => {
            let pattern_text = fs::read_to_string(pattern_path)
                .with_context(|| format!("Couldn't read pattern {}", pattern_path.display()))?;

            let name = pattern_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_owned());

            seed_board(config.board_size, &Pattern::parse(name, &pattern_text)?)?
        }
        None => seed_board(config.board_size, pattern::default_pattern())?,
    };

    let output_dir = config.output_dir.join(run_id);
    if config.render.png() {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Couldn't create {}", output_dir.display()))?;
    }

    let sampler = Sampler::new(config.sample_interval, iterations);
    let mut recent = GenerationHistory::new(config.history_capacity);
    let mut pacer = Pacer::new(Duration::from_millis(config.frame_delay_ms));
    let glyphs = if config.plain_text {
        Glyphs::PLAIN
    } else {
        Glyphs::BLOCKS
    };

    info!(
        "Running {iterations} generations on a {0}x{0} board ({1} mode, parallel: {2})",
        board.size(),
        config.render,
        config.parallel,
    );

    let mut samples = 0;
    let started = Instant::now();
    let mut game = Game::new(board).with_parallel(config.parallel);

    game.try_run(iterations, |generation, board| -> anyhow::Result<()> {
        recent.push(generation, board.clone());

        if !sampler.should_sample(generation) {
            return Ok(());
        }

        samples += 1;
        debug!(
            "Sampled generation {generation}, {} alive",
            board.count_cells(TileState::Alive)
        );

        if config.render.text() {
            pacer.wait();
            println!(
                "{}\n{}\n",
                text::render_header(generation, board),
                text::render_board(board, glyphs)
            );
        }

        if config.render.png() && config.export_frames {
            let path = render::frame_path(&output_dir, generation);
            render::save_board_png(board, config.cell_pixels, &path)?;
        }

        Ok(())
    })?;

    let elapsed = started.elapsed();

    info!(
        "Finished {iterations} generations in {elapsed:.2?}, {} alive",
        game.count_cells(TileState::Alive)
    );

    let final_image = if config.render.png() {
        let path = output_dir.join("final.png");
        render::save_board_png(&game.board, config.cell_pixels, &path)?;
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        iterations,
        final_board: game.board,
        samples,
        recent,
        final_image,
        elapsed,
    })
}

fn seed_board(size: usize, pattern: &Pattern) -> anyhow::Result<GameBoard> {
    let board = GameBoard::new(size);

    if !board.fits(pattern) {
        bail!(
            "Pattern {:?} is {}x{}, which doesn't fit on a {}x{} board",
            pattern.name(),
            pattern.height(),
            pattern.width(),
            board.size(),
            board.size(),
        );
    }

    if board.size() != size {
        debug!("Board size {size} upsized to {}", board.size());
    }

    info!(
        "Seeding {:?} at {:?}",
        pattern.name(),
        board.pattern_anchor(pattern)
    );

    Ok(board.seeded(pattern))
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use liblife::{pattern::HAMMERHEAD, step};

    use super::*;
    use crate::config::RenderMode;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("runner-test-{}-{name}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn quiet_config(output_dir: PathBuf) -> RunConfig {
        RunConfig {
            board_size: 20,
            render: RenderMode::None,
            frame_delay_ms: 0,
            output_dir,
            ..RunConfig::default()
        }
    }

    #[test]
    fn zero_iterations_keep_the_seeded_board() {
        let config = quiet_config(scratch_dir("zero"));
        let summary = run_simulation(&config, 0, "run").unwrap();

        let seeded = GameBoard::new(20).seeded(&HAMMERHEAD);
        assert_eq!(summary.final_board, seeded);
        assert_eq!(summary.samples, 1);
        assert_eq!(summary.recent.len(), 1);
        assert_eq!(summary.final_image, None);
    }

    #[test]
    fn final_board_matches_stepping_by_hand() {
        let config = RunConfig {
            history_capacity: 4,
            sample_interval: 5,
            ..quiet_config(scratch_dir("by-hand"))
        };

        let summary = run_simulation(&config, 12, "run").unwrap();

        let mut expected = GameBoard::new(20).seeded(&HAMMERHEAD);
        for _ in 0..12 {
            expected = step(&expected);
        }

        assert_eq!(summary.final_board, expected);
        // 0, 5, 10 and the final 12.
        assert_eq!(summary.samples, 4);
        assert_eq!(summary.recent.len(), 4);
        assert_eq!(summary.recent.latest().map(|(generation, _)| generation), Some(12));
    }

    #[test]
    fn png_mode_writes_frames_and_final_image() {
        let output_dir = scratch_dir("png");
        let config = RunConfig {
            render: RenderMode::Png,
            export_frames: true,
            cell_pixels: 2,
            sample_interval: 10,
            ..quiet_config(output_dir.clone())
        };

        let summary = run_simulation(&config, 20, "run").unwrap();
        let run_dir = output_dir.join("run");

        assert_eq!(summary.final_image, Some(run_dir.join("final.png")));
        for generation in [0, 10, 20] {
            assert!(render::frame_path(&run_dir, generation).exists());
        }
        assert!(!render::frame_path(&run_dir, 5).exists());

        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn custom_pattern_file_is_centered() {
        let output_dir = scratch_dir("custom");
        fs::create_dir_all(&output_dir).unwrap();

        let pattern_path = output_dir.join("blinker.cells");
        fs::write(&pattern_path, "!Name: Blinker\nOOO\n").unwrap();

        let config = RunConfig {
            pattern_path: Some(pattern_path),
            ..quiet_config(output_dir.clone())
        };

        let summary = run_simulation(&config, 1, "run").unwrap();

        // Anchored at (10, 9), so one step later it stands upright around (10, 10).
        assert_eq!(
            summary.final_board,
            GameBoard::with_alive(20, [[9, 10], [10, 10], [11, 10]])
        );

        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn oversized_pattern_is_an_error() {
        let output_dir = scratch_dir("oversized");
        fs::create_dir_all(&output_dir).unwrap();

        let pattern_path = output_dir.join("wide.cells");
        fs::write(&pattern_path, "X".repeat(30)).unwrap();

        let config = RunConfig {
            pattern_path: Some(pattern_path),
            ..quiet_config(output_dir.clone())
        };

        let err = run_simulation(&config, 1, "run").err().unwrap();
        assert!(err.to_string().contains("doesn't fit"));

        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn oversized_image_is_an_error() {
        let output_dir = scratch_dir("huge-image");
        let config = RunConfig {
            board_size: 100,
            render: RenderMode::Png,
            cell_pixels: 50_000_000,
            ..quiet_config(output_dir.clone())
        };

        let err = run_simulation(&config, 1, "run").err().unwrap();
        assert!(err.to_string().contains("too large"));

        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn missing_pattern_file_is_an_error() {
        let config = RunConfig {
            pattern_path: Some(scratch_dir("missing").join("nope.cells")),
            ..quiet_config(scratch_dir("missing-out"))
        };

        assert!(run_simulation(&config, 1, "run").is_err());
    }
}
