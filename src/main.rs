use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use countdown_fireworks::clock::{ClockSource, SystemClock};
use countdown_fireworks::config::{Args, Config};
use countdown_fireworks::input::ExitGesture;
use countdown_fireworks::palette::{Ink, PaletteColor};
use countdown_fireworks::scene::{CountdownScene, FAREWELL};

const FINALE_PAUSE: Duration = Duration::from_secs(1);
const BANNER_TIME: Duration = Duration::from_secs(5);
const FAREWELL_TIME: Duration = Duration::from_secs(2);

/// How a show ended.
#[derive(PartialEq)]
enum Ending {
    Quit,
    Countdown,
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    // Without a file nothing is logged; stderr would draw over the animation
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Wait up to `duration`, returning early with `true` if the user quits.
fn wait(duration: Duration, exit: &mut ExitGesture) -> anyhow::Result<bool> {
    let deadline = Instant::now() + duration;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Ok(false);
        }
        if event::poll(left)? {
            if let Event::Key(key) = event::read()? {
                if exit.register(&key, Instant::now()) {
                    return Ok(true);
                }
            }
        }
    }
}

/// Undo the terminal setup. Every step runs even when an earlier one fails;
/// the first failure is returned.
fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let steps = [
        execute!(out, Show, LeaveAlternateScreen),
        out.flush(),
        terminal::disable_raw_mode(),
    ];
    steps.into_iter().collect()
}

fn run_show(stdout: &mut BufWriter<Stdout>, config: &Config) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("cannot read terminal size")?;
    let mut scene = CountdownScene::new(cols as usize, rows as usize, config, SystemClock);
    let mut exit = ExitGesture::default();

    let mut last_frame = Instant::now();
    let mut accumulator = Duration::ZERO;
    let frame = config.frame;

    let ending = loop {
        if event::poll(frame.saturating_sub(accumulator))? {
            match event::read()? {
                Event::Key(key) => {
                    if exit.register(&key, Instant::now()) {
                        break Ending::Quit;
                    }
                }
                Event::Resize(cols, rows) => {
                    scene.resize(cols as usize, rows as usize);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        accumulator += now.duration_since(last_frame);
        last_frame = now;
        if accumulator > frame * 3 {
            accumulator = frame * 3;
        }

        let mut stepped = false;
        while accumulator >= frame {
            scene.update();
            accumulator -= frame;
            stepped = true;
        }

        if stepped {
            scene.render(stdout)?;
            if scene.countdown().is_over() {
                break Ending::Countdown;
            }
        }
    };

    if ending == Ending::Countdown {
        log::info!("target reached at {}", SystemClock.now());
        if wait(FINALE_PAUSE, &mut exit)? {
            return Ok(());
        }
        scene.render_banner(stdout)?;
        if wait(BANNER_TIME, &mut exit)? {
            return Ok(());
        }
    }

    scene.render_message(stdout, FAREWELL, Ink::plain(PaletteColor::White))?;
    wait(FAREWELL_TIME, &mut exit)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args, SystemClock.now());
    init_logging(config.log_file.as_deref())?;

    log::info!(
        "counting down to {} (seed {:?}, {} ms frames, launch chance {})",
        config.target,
        config.seed,
        config.frame.as_millis(),
        config.launch_chance
    );

    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
        if let Err(restore_err) = restore(&mut stdout) {
            log::warn!("terminal restore failed: {restore_err}");
        }
        return Err(anyhow::Error::new(err).context("cannot enter the alternate screen"));
    }

    let result = run_show(&mut stdout, &config);

    // Restore the terminal even when the show failed
    let restored = restore(&mut stdout).context("cannot restore the terminal");

    if let Err(err) = &result {
        log::error!("show aborted: {err:#}");
    }
    log::info!("show ended");
    result.and(restored)
}
