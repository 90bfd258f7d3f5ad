// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The `ludus` binary.
//!
//! Environment:
//! * `LUDUS_CONFIG`: path to a JSON [`GameConfig`]; defaults are used when unset.
//! * `LUDUS_HEADLESS_FRAMES`: run offscreen for this many frames instead of
//!   opening a window.
//! * `RUST_LOG`: log filter, `info` by default.
//!
//! Exits with `0` once the loop stops, `1` on configuration errors and `2`
//! when the display surface cannot be created. Fatal errors go to stderr as
//! well as the log, so they show up even with `RUST_LOG=off`.

use anyhow::{Context, Result};
use ludus_control::{GameMonitor, MonitorError};
use ludus_core::{GameConfig, SurfaceBackend};
use ludus_infra::{HeadlessSurfaceBackend, WinitSurfaceBackend};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_ENV: &str = "LUDUS_CONFIG";
const HEADLESS_FRAMES_ENV: &str = "LUDUS_HEADLESS_FRAMES";

const EXIT_CONFIG_ERROR: u8 = 1;
const EXIT_SURFACE_ERROR: u8 = 2;

/// Where frames end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendChoice {
    Window,
    Headless(u64),
}

fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn backend_choice(headless_frames: Option<String>) -> Result<BackendChoice> {
    let Some(raw) = headless_frames else {
        return Ok(BackendChoice::Window);
    };
    let frames = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{HEADLESS_FRAMES_ENV} must be a frame count, got '{raw}'"))?;
    Ok(BackendChoice::Headless(frames))
}

/// Builds the monitor and runs it to completion, returning the frames executed.
///
/// `run` is only reached when construction succeeded.
fn play<B: SurfaceBackend>(config: GameConfig, backend: &B) -> Result<u64, MonitorError> {
    let mut monitor = GameMonitor::new(config, backend)?;
    monitor.run();
    log::info!(
        "Game loop stopped after {} frames (score {}, last reward {}).",
        monitor.frame_count(),
        monitor.state().score,
        monitor.memory().last_reward()
    );
    Ok(monitor.frame_count())
}

fn exit_code(err: &MonitorError) -> u8 {
    match err {
        MonitorError::Config(_) => EXIT_CONFIG_ERROR,
        MonitorError::Surface(_) => EXIT_SURFACE_ERROR,
    }
}

fn startup_failure_message(err: &MonitorError) -> String {
    format!("Could not start the game: {err}")
}

/// Reports a fatal error on both the log and stderr.
fn fail(message: &str, code: u8) -> ExitCode {
    log::error!("{message}");
    eprintln!("ludus: {message}");
    ExitCode::from(code)
}

fn main() -> ExitCode {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let setup = load_config(env::var_os(CONFIG_ENV).map(PathBuf::from)).and_then(|config| {
        let headless = env::var_os(HEADLESS_FRAMES_ENV).map(|v| v.to_string_lossy().into_owned());
        Ok((config, backend_choice(headless)?))
    });
    let (config, choice) = match setup {
        Ok(setup) => setup,
        Err(e) => return fail(&format!("{e:#}"), EXIT_CONFIG_ERROR),
    };

    log::info!(
        "Starting game: {}x{} @ {} fps ({:?})",
        config.width,
        config.height,
        config.target_fps,
        choice
    );

    let outcome = match choice {
        BackendChoice::Window => play(config, &WinitSurfaceBackend::new()),
        BackendChoice::Headless(frames) => play(config, &HeadlessSurfaceBackend::new(frames)),
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&startup_failure_message(&e), exit_code(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_core::{ConfigError, SurfaceCreationError};
    use std::io::Write;

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn config_file_is_loaded_and_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "width": 320, "height": 200, "fps": 15 }}"#).unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, GameConfig::new(320, 200, 15));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{ "height": 0 }}"#).unwrap();
        let err = load_config(Some(bad.path().to_path_buf())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ZeroDimension { field: "height" })
        ));
    }

    #[test]
    fn unreadable_config_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn headless_frames_are_parsed() {
        assert_eq!(backend_choice(None).unwrap(), BackendChoice::Window);
        assert_eq!(
            backend_choice(Some(" 120 ".to_string())).unwrap(),
            BackendChoice::Headless(120)
        );
        assert!(backend_choice(Some("lots".to_string())).is_err());
        assert!(backend_choice(Some("-1".to_string())).is_err());
    }

    #[test]
    fn headless_play_runs_the_budget() {
        let frames = play(GameConfig::default(), &HeadlessSurfaceBackend::new(12)).unwrap();
        assert_eq!(frames, 12);
    }

    #[test]
    fn construction_failures_map_to_exit_codes() {
        let err = play(GameConfig::new(640, 480, 0), &HeadlessSurfaceBackend::new(1)).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);

        let err = MonitorError::Surface(SurfaceCreationError::Platform("no display".to_string()));
        assert_eq!(exit_code(&err), EXIT_SURFACE_ERROR);
    }

    #[test]
    fn startup_failures_name_the_cause() {
        let err = MonitorError::Surface(SurfaceCreationError::Platform("no display".to_string()));
        let message = startup_failure_message(&err);
        assert!(message.starts_with("Could not start the game"));
        assert!(message.contains("no display"), "{message}");
    }
}
