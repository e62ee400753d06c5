#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    cli::run()
}

// The browser build drives the game through `start_game` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use crossterm::terminal;
    use pixel_snake::config::MAX_SIDE;
    use pixel_snake::{init_logging, CliRenderer, FrameClock, Game, GameConfig, Renderer};
    use std::io;
    use std::time::Instant;

    pub fn run() -> io::Result<()> {
        init_logging();

        // Each cell is 2 columns wide; keep 3 rows for the info lines.
        let (term_width, term_height) = terminal::size()?;
        let width = ((term_width / 2) as u32).clamp(10, MAX_SIDE);
        let height = (term_height.saturating_sub(3) as u32).clamp(10, MAX_SIDE);

        let config = GameConfig::with_size(width, height).with_env_overrides();
        let mut game = Game::with_config(config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        log::info!("starting {}x{} board, {}ms per step", width, height, config.tick_ms);

        let mut renderer = CliRenderer::new();
        renderer.init(&game)?;

        let started = Instant::now();
        // Whole milliseconds, like `Date.now()` in the browser build.
        let now = || started.elapsed().as_millis() as f64;
        let mut clock = FrameClock::new(now());

        'running: loop {
            while let Some(input) = renderer.poll_input()? {
                if !input.apply(&mut game) {
                    break 'running;
                }
            }

            game.tick(clock.advance(now()));
            renderer.render(&game)?;
        }

        renderer.cleanup()?;
        Ok(())
    }
}
