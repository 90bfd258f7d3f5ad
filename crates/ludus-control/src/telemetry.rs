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

//! Periodic frame statistics for the control loop.

use crate::monitor::FrameReport;
use std::time::{Duration, Instant};

/// Frame statistics over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySummary {
    /// Frames completed in the window.
    pub frames: u64,
    /// Length of the window.
    pub elapsed: Duration,
    /// The configured target, for comparison only.
    pub target_fps: u32,
}

impl TelemetrySummary {
    /// Measured frames per second over the window. `0.0` for an empty window.
    pub fn frame_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// Counts frames and logs a summary once per report interval.
///
/// Purely observational: it never feeds back into the loop.
#[derive(Debug)]
pub struct FrameTelemetry {
    report_interval: Duration,
    window_start: Instant,
    frames_in_window: u64,
    total_frames: u64,
}

impl FrameTelemetry {
    /// Creates a telemetry accumulator reporting every `report_interval`.
    pub fn new(report_interval: Duration) -> Self {
        Self {
            report_interval,
            window_start: Instant::now(),
            frames_in_window: 0,
            total_frames: 0,
        }
    }

    /// Should be called once per completed frame.
    /// Returns `true` when the interval elapsed and a summary was logged.
    pub fn record(&mut self, report: &FrameReport, target_fps: u32) -> bool {
        self.frames_in_window += 1;
        self.total_frames += 1;

        if self.window_start.elapsed() < self.report_interval {
            return false;
        }

        let summary = self.summary(target_fps);
        log::info!(
            "Frames: {} in {:.2}s ({:.1} fps, target {} fps not enforced) | score {} | last action '{}' | reward {:.2}",
            summary.frames,
            summary.elapsed.as_secs_f64(),
            summary.frame_rate(),
            summary.target_fps,
            report.state.score,
            report.action,
            report.reward
        );

        self.window_start = Instant::now();
        self.frames_in_window = 0;
        true
    }

    /// Statistics for the current, still open window.
    pub fn summary(&self, target_fps: u32) -> TelemetrySummary {
        TelemetrySummary {
            frames: self.frames_in_window,
            elapsed: self.window_start.elapsed(),
            target_fps,
        }
    }

    /// Frames recorded since creation.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FrameTelemetry {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
