use crate::clock::next_new_year;
use crate::sim::DEFAULT_LAUNCH_CHANCE;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid hex color `{0}`, expected RRGGBB (e.g. 1a1b26)")]
    InvalidColor(String),
    #[error("invalid target `{input}`, expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    InvalidTarget {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("launch chance must be a number within [0, 1], got `{0}`")]
    LaunchChance(String),
    #[error("frame step must be a positive number of milliseconds, got `{0}`")]
    FrameStep(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Terminal countdown clock with fireworks.
#[derive(Parser, Debug)]
#[command(name = "countdown-fireworks", version, about)]
pub struct Args {
    /// Moment to count down to [default: next 1 January, 00:00 local time]
    #[arg(long, value_name = "DATETIME", value_parser = parse_target)]
    pub target: Option<NaiveDateTime>,

    /// Background color as hex (e.g. 1a1b26)
    #[arg(long, value_name = "RRGGBB", value_parser = parse_hex_color)]
    pub bg_color: Option<Rgb>,

    /// Chance of launching a rocket on each frame
    #[arg(long, value_name = "P", default_value_t = DEFAULT_LAUNCH_CHANCE, value_parser = parse_launch_chance)]
    pub launch_chance: f32,

    /// Milliseconds per frame
    #[arg(long, value_name = "MS", default_value_t = 100, value_parser = parse_frame_ms)]
    pub frame_ms: u64,

    /// Seed for a reproducible show
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Settings fixed for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Config {
    pub target: NaiveDateTime,
    pub background: Option<(u8, u8, u8)>,
    pub launch_chance: f32,
    pub frame: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Fill in defaults that depend on the current time.
    pub fn resolve(args: Args, now: NaiveDateTime) -> Self {
        Self {
            target: args.target.unwrap_or_else(|| next_new_year(now)),
            background: args.bg_color.map(|Rgb(r, g, b)| (r, g, b)),
            launch_chance: args.launch_chance,
            frame: Duration::from_millis(args.frame_ms),
            seed: args.seed,
            log_file: args.log_file,
        }
    }
}

pub fn parse_hex_color(hex: &str) -> Result<Rgb, ConfigError> {
    let invalid = || ConfigError::InvalidColor(hex.to_string());
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn parse_target(input: &str) -> Result<NaiveDateTime, ConfigError> {
    let input = input.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(at);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|source| ConfigError::InvalidTarget {
            input: input.to_string(),
            source,
        })
}

pub fn parse_launch_chance(input: &str) -> Result<f32, ConfigError> {
    match input.parse::<f32>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(ConfigError::LaunchChance(input.to_string())),
    }
}

pub fn parse_frame_ms(input: &str) -> Result<u64, ConfigError> {
    match input.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::FrameStep(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("1a1b26").unwrap(), Rgb(0x1a, 0x1b, 0x26));
        assert_eq!(parse_hex_color("#FFFFFF").unwrap(), Rgb(255, 255, 255));
        for bad in ["", "12345", "1234567", "zzzzzz", "ééé"] {
            assert!(matches!(parse_hex_color(bad), Err(ConfigError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn target_formats() {
        let expected = at("2027-01-01 00:00:00");
        assert_eq!(parse_target("2027-01-01 00:00:00").unwrap(), expected);
        assert_eq!(parse_target("2027-01-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_target(" 2027-01-01 ").unwrap(), expected);
        assert!(matches!(
            parse_target("new year"),
            Err(ConfigError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn launch_chance_is_a_probability() {
        assert_eq!(parse_launch_chance("0.5").unwrap(), 0.5);
        assert_eq!(parse_launch_chance("0").unwrap(), 0.0);
        assert!(parse_launch_chance("1.5").is_err());
        assert!(parse_launch_chance("-0.1").is_err());
        assert!(parse_launch_chance("NaN").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["countdown-fireworks"]).unwrap();
        let config = Config::resolve(args, at("2026-10-19 12:00:00"));
        assert_eq!(config.target, at("2027-01-01 00:00:00"));
        assert_eq!(config.launch_chance, DEFAULT_LAUNCH_CHANCE);
        assert_eq!(config.frame, Duration::from_millis(100));
        assert_eq!(config.background, None);
        assert_eq!(config.seed, None);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "countdown-fireworks",
            "--target",
            "2026-12-24 18:00:00",
            "--bg-color",
            "1a1b26",
            "--launch-chance",
            "0.1",
            "--frame-ms",
            "50",
            "--seed",
            "42",
            "--log-file",
            "show.log",
        ])
        .unwrap();
        let config = Config::resolve(args, at("2026-10-19 12:00:00"));
        assert_eq!(config.target, at("2026-12-24 18:00:00"));
        assert_eq!(config.background, Some((0x1a, 0x1b, 0x26)));
        assert_eq!(config.launch_chance, 0.1);
        assert_eq!(config.frame, Duration::from_millis(50));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("show.log")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["countdown-fireworks", "--frame-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["countdown-fireworks", "--bg-color", "blue"]).is_err());
        assert!(Args::try_parse_from(["countdown-fireworks", "--target", "soon"]).is_err());
    }
}
