//! Pixel Pong entry point
//!
//! Opens an SDL2 window when built with `--features sdl`; otherwise runs the
//! simulation headless for a fixed number of frames.

use std::process::ExitCode;

use pixel_pong::{Game, Settings, run};

/// Frame count for headless runs without `max_frames` in the settings
#[cfg(not(feature = "sdl"))]
const HEADLESS_FRAMES: u64 = 600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pixel Pong starting...");

    let settings = Settings::load();
    let board = settings.board();
    log::info!(
        "Board {}x{}, speed {}, frame delay {} ms",
        board.width,
        board.height,
        settings.speed,
        settings.frame_delay_ms
    );

    let mut game = Game::new(&settings);

    #[cfg(feature = "sdl")]
    {
        let mut platform = match pixel_pong::platform::SdlPlatform::new(&settings.window_title, board) {
            Ok(platform) => platform,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };
        run(&mut game, &mut platform, &settings);
    }

    #[cfg(not(feature = "sdl"))]
    {
        log::info!("Built without the `sdl` feature - running headless");
        let frames = settings.max_frames.unwrap_or(HEADLESS_FRAMES);
        let mut platform = pixel_pong::platform::HeadlessPlatform::new(frames);
        let stats = run(&mut game, &mut platform, &settings);
        println!(
            "{} frames, ball at ({:.0}, {:.0}), {} pixels lit in the last frame",
            stats.frames,
            game.state.ball.pos.x,
            game.state.ball.pos.y,
            platform.last_lit_pixels()
        );
    }

    ExitCode::SUCCESS
}
