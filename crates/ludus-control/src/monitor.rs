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

//! The loop controller.

use crate::telemetry::FrameTelemetry;
use ludus_core::{
    ActionLabel, Agent, AgentMemory, ConfigError, DisplaySurface, GameConfig, GameState,
    LinearRgba, SurfaceBackend, SurfaceCreationError, SurfaceDescriptor,
};
use thiserror::Error;

/// Title of the window requested at construction. Not derived from the config.
pub const WINDOW_TITLE: &str = "AI-Powered Game Prototype";

/// The color every frame is cleared to.
pub const CLEAR_COLOR: LinearRgba = LinearRgba::rgb(0.2, 0.2, 0.2);

/// An error that prevents a [`GameMonitor`] from being built.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The supplied configuration was rejected.
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),
    /// The display surface could not be created.
    #[error("failed to create display surface: {0}")]
    Surface(#[from] SurfaceCreationError),
}

/// The state of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The loop is executing frames.
    Running,
    /// The surface reported closed, or `run` has not been entered yet.
    Stopped,
}

/// What happened during one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// 1-based index of the frame.
    pub frame: u64,
    /// The action the agent chose.
    pub action: ActionLabel,
    /// The state after the transition.
    pub state: GameState,
    /// The agent's evaluation of `state`.
    pub reward: f64,
}

/// Owns the game state, the agent and the display surface, and drives the
/// per-frame cycle.
///
/// The monitor is the only writer of the [`GameState`] and of the agent's
/// [`AgentMemory`].
pub struct GameMonitor<S: DisplaySurface> {
    config: GameConfig,
    surface: S,
    state: GameState,
    agent: Box<dyn Agent>,
    memory: AgentMemory,
    frame_count: u64,
    run_state: RunState,
    telemetry: FrameTelemetry,
}

impl<S: DisplaySurface> GameMonitor<S> {
    /// Builds a monitor with the default threshold agent.
    ///
    /// # Errors
    /// Returns [`MonitorError`] if the config is invalid or the backend cannot
    /// create a surface. No monitor exists in that case.
    pub fn new<B>(config: GameConfig, backend: &B) -> Result<Self, MonitorError>
    where
        B: SurfaceBackend<Surface = S>,
    {
        Self::with_agent(config, backend, ludus_agents::default_agent())
    }

    /// Builds a monitor driven by `agent`.
    ///
    /// # Errors
    /// Same as [`GameMonitor::new`].
    pub fn with_agent<B>(
        config: GameConfig,
        backend: &B,
        agent: Box<dyn Agent>,
    ) -> Result<Self, MonitorError>
    where
        B: SurfaceBackend<Surface = S>,
    {
        config.validate()?;

        let descriptor = SurfaceDescriptor::new(WINDOW_TITLE, config.width, config.height);
        let surface = backend.create_surface(&descriptor)?;

        log::info!(
            "GameMonitor ready: {}x{} surface, agent '{}', target {} fps.",
            config.width,
            config.height,
            agent.name(),
            config.target_fps
        );

        Ok(Self {
            config,
            surface,
            state: GameState::default(),
            agent,
            memory: AgentMemory::new(),
            frame_count: 0,
            run_state: RunState::Stopped,
            telemetry: FrameTelemetry::default(),
        })
    }

    /// Replaces the telemetry accumulator (e.g. to change its report interval).
    pub fn with_telemetry(mut self, telemetry: FrameTelemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Runs frames until the surface reports it has been closed.
    ///
    /// No frame pacing happens here; any pacing comes from the surface's
    /// `present` call.
    pub fn run(&mut self) {
        self.run_state = RunState::Running;
        log::info!("GameMonitor: entering main loop.");

        while self.run_state == RunState::Running {
            if self.surface.is_closed() {
                self.run_state = RunState::Stopped;
                break;
            }
            let report = self.step();
            self.telemetry.record(&report, self.config.target_fps);
        }

        log::info!(
            "GameMonitor: loop stopped after {} frames (final score {}).",
            self.frame_count,
            self.state.score
        );
    }

    /// Executes one frame without checking whether the surface is closed.
    pub fn step(&mut self) -> FrameReport {
        self.surface.clear(CLEAR_COLOR);

        let action = self.agent.decide(&self.state);
        self.memory.record_action(action.clone());

        self.state = self.state.apply(&action);

        let reward = self.agent.evaluate(&self.state);
        self.memory.record_reward(reward);

        self.surface.present();

        self.frame_count += 1;
        log::trace!(
            "Frame {}: action '{}' -> score {} (reward {:.2})",
            self.frame_count,
            action,
            self.state.score,
            reward
        );

        FrameReport {
            frame: self.frame_count,
            action,
            state: self.state,
            reward,
        }
    }

    /// The configuration the monitor was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Overrides the current game state, e.g. to start from a given score.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    /// The agent driving the loop.
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    /// The agent's last action and reward.
    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether the loop is running.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// The owned display surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Frame statistics gathered so far.
    pub fn telemetry(&self) -> &FrameTelemetry {
        &self.telemetry
    }
}

impl<S: DisplaySurface> Drop for GameMonitor<S> {
    fn drop(&mut self) {
        log::debug!("GameMonitor dropped; releasing display surface.");
    }
}
