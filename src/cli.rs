//! Command-line configuration for the `tetro` binary.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::SessionConfig;
use crate::types::{DEFAULT_SPEED_PERCENT, TICK_MS};

pub const USAGE: &str = "\
usage: tetro [--seed <u64>] [--speed <percent>] [--tick-ms <ms>]

  --seed <u64>        seed for piece and color order (default: from the clock)
  --speed <percent>   fall speed, 100 = normal (default: 100)
  --tick-ms <ms>      simulation step in milliseconds (default: 20)
  --help              print this message

keys: arrows / wasd / hjkl move and rotate, enter / space / z confirm,
      esc / x back, ctrl-c quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// `None` means derive one from the clock at startup
    pub seed: Option<u64>,
    pub speed_percent: u32,
    pub tick_ms: u32,
    pub help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            speed_percent: DEFAULT_SPEED_PERCENT,
            tick_ms: TICK_MS,
            help: false,
        }
    }
}

impl RunConfig {
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.resolved_seed(),
            speed_percent: self.speed_percent,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("tetro: missing value for --seed"))?;
                let seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("tetro: invalid --seed value: {}", v))?;
                config.seed = Some(seed);
            }
            "--speed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("tetro: missing value for --speed"))?;
                config.speed_percent = parse_positive(v, "--speed")?;
            }
            "--tick-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("tetro: missing value for --tick-ms"))?;
                config.tick_ms = parse_positive(v, "--tick-ms")?;
            }
            "-h" | "--help" => {
                config.help = true;
            }
            other => {
                return Err(anyhow!("tetro: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn parse_positive(v: &str, flag: &str) -> Result<u32> {
    match v.parse::<u32>() {
        Ok(0) => Err(anyhow!("tetro: {} must be greater than zero", flag)),
        Ok(n) => Ok(n),
        Err(_) => Err(anyhow!("tetro: invalid {} value: {}", flag, v)),
    }
}
