use crate::clock::{ClockSource, Countdown};
use crate::config::Config;
use crate::face;
use crate::palette::{FIREWORK_COLORS, Ink, Palette};
use crate::random::Entropy;
use crate::sim::Simulation;
use crate::surface::{Surface, TerminalSurface};
use chrono::{Datelike, NaiveDateTime};
use std::io::{self, Write};

pub const FAREWELL: &str = "Fireworks simulation ended.";

/// The countdown clock with fireworks behind it.
pub struct CountdownScene<C> {
    sim: Simulation<fastrand::Rng>,
    surface: TerminalSurface,
    clock: C,
    target: NaiveDateTime,
    rng: fastrand::Rng,
}

impl<C: ClockSource> CountdownScene<C> {
    pub fn new(cols: usize, rows: usize, config: &Config, clock: C) -> Self {
        let mut rng = config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self {
            sim: Simulation::new(rng.fork(), config.launch_chance),
            surface: TerminalSurface::new(cols, rows, Palette::new(config.background)),
            clock,
            target: config.target,
            rng,
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        log::trace!("resize to {cols}x{rows}");
        self.surface.resize(cols, rows);
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::until(self.target, self.clock.now())
    }

    pub fn simulation(&self) -> &Simulation<fastrand::Rng> {
        &self.sim
    }

    /// One simulation step on the current surface.
    pub fn update(&mut self) {
        let (rows, cols) = self.surface.dimensions();
        self.sim.tick(cols, rows);
    }

    /// Clock first, then the fireworks over it.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let countdown = self.countdown();
        self.surface.clear();
        face::draw_clock(&mut self.surface, &countdown);
        face::draw_exit_hint(&mut self.surface);
        self.sim.render(&mut self.surface, &mut self.rng);
        self.surface.present(out)
    }

    pub fn banner(&self) -> String {
        format!("Happy New Year {}!", self.target.year())
    }

    /// A single line of text on an otherwise empty screen.
    pub fn render_message<W: Write>(&mut self, out: &mut W, text: &str, ink: Ink) -> io::Result<()> {
        let (rows, _) = self.surface.dimensions();
        self.surface.clear();
        face::draw_centered(&mut self.surface, (rows / 2) as i32, text, ink);
        self.surface.present(out)
    }

    pub fn render_banner<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let ink = Ink::bold(*self.rng.pick(&FIREWORK_COLORS));
        let text = self.banner();
        self.render_message(out, &text, ink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;
    use chrono::NaiveDateTime;
    use std::time::Duration;

    struct Fixed(NaiveDateTime);

    impl ClockSource for Fixed {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn config(launch_chance: f32) -> Config {
        Config {
            target: at("2027-01-01 00:00:00"),
            background: None,
            launch_chance,
            frame: Duration::from_millis(100),
            seed: Some(7),
            log_file: None,
        }
    }

    fn render(scene: &mut CountdownScene<Fixed>) -> String {
        let mut out = Vec::new();
        scene.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_shows_clock_and_hint() {
        let mut scene = CountdownScene::new(80, 30, &config(0.0), Fixed(at("2026-12-31 23:59:00")));
        assert_eq!(scene.countdown().display(), "00:00:01:00");

        let frame = render(&mut scene);
        assert!(frame.contains('█'));
        assert!(frame.contains(face::EXIT_HINT));
    }

    #[test]
    fn fireworks_appear_after_enough_frames() {
        let mut scene = CountdownScene::new(100, 60, &config(1.0), Fixed(at("2026-12-31 23:00:00")));
        for _ in 0..80 {
            scene.update();
        }
        assert!(!scene.simulation().particles().is_empty());
        assert!(!scene.simulation().rockets().is_empty());

        // Later layers may cover a rocket, but something of the show is visible
        let frame = render(&mut scene);
        assert!(frame.contains('^') || frame.contains('*') || frame.contains('`'));
    }

    #[test]
    fn resize_changes_the_launch_area() {
        let mut scene = CountdownScene::new(80, 30, &config(1.0), Fixed(at("2026-12-31 23:00:00")));
        scene.resize(200, 100);
        scene.update();
        let rocket = &scene.simulation().rockets()[0];
        assert!(rocket.motion.y > 95.0);
    }

    #[test]
    fn seeded_scenes_repeat() {
        let clock = || Fixed(at("2026-12-31 23:00:00"));
        let mut a = CountdownScene::new(100, 60, &config(0.5), clock());
        let mut b = CountdownScene::new(100, 60, &config(0.5), clock());
        for _ in 0..50 {
            a.update();
            b.update();
        }
        assert_eq!(a.simulation().particles().len(), b.simulation().particles().len());
    }

    #[test]
    fn frames_drawn_do_not_change_the_show() {
        let clock = || Fixed(at("2026-12-31 23:00:00"));
        let mut drawn = CountdownScene::new(100, 60, &config(0.5), clock());
        let mut undrawn = CountdownScene::new(100, 60, &config(0.5), clock());
        for _ in 0..60 {
            drawn.update();
            undrawn.update();
            render(&mut drawn);
        }
        let rockets = |scene: &CountdownScene<Fixed>| -> Vec<(f32, f32)> {
            let sim = scene.simulation();
            sim.rockets().iter().map(|r| (r.motion.x, r.motion.y)).collect()
        };
        assert_eq!(rockets(&drawn), rockets(&undrawn));
        assert_eq!(
            drawn.simulation().particles().len(),
            undrawn.simulation().particles().len()
        );
    }

    #[test]
    fn banner_names_the_target_year() {
        let mut scene = CountdownScene::new(80, 30, &config(0.0), Fixed(at("2027-01-01 00:00:05")));
        assert!(scene.countdown().is_over());
        assert_eq!(scene.banner(), "Happy New Year 2027!");

        let mut out = Vec::new();
        scene.render_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Happy New Year 2027!"));

        let mut out = Vec::new();
        scene
            .render_message(&mut out, FAREWELL, Ink::plain(PaletteColor::White))
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains(FAREWELL));
    }
}
