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

use ludus_agents::ThresholdAgent;
use ludus_control::{GameMonitor, MonitorError, RunState, CLEAR_COLOR, WINDOW_TITLE};
use ludus_core::{GameConfig, SurfaceCreationError};
use ludus_infra::HeadlessSurfaceBackend;

#[test]
fn monitor_runs_for_exactly_the_frame_budget() {
    let backend = HeadlessSurfaceBackend::new(25);
    let mut monitor = GameMonitor::new(GameConfig::default(), &backend).unwrap();

    monitor.run();

    let surface = monitor.surface();
    assert_eq!(surface.frames_presented(), 25);
    assert_eq!(surface.clear_count(), 25);
    assert_eq!(surface.last_clear_color(), Some(CLEAR_COLOR));
    assert_eq!(monitor.frame_count(), 25);
    assert_eq!(monitor.run_state(), RunState::Stopped);
}

#[test]
fn headless_surface_sees_the_monitor_descriptor() {
    let config = GameConfig::new(1024, 768, 144);
    let monitor = GameMonitor::new(config, &HeadlessSurfaceBackend::new(1)).unwrap();

    let descriptor = monitor.surface().descriptor();
    assert_eq!(descriptor.title, WINDOW_TITLE);
    assert_eq!((descriptor.width, descriptor.height), (1024, 768));
}

#[test]
fn zero_budget_never_consults_the_agent() {
    let mut monitor = GameMonitor::new(GameConfig::default(), &HeadlessSurfaceBackend::new(0)).unwrap();

    monitor.run();

    assert_eq!(monitor.frame_count(), 0);
    assert_eq!(monitor.surface().clear_count(), 0);
    assert!(monitor.memory().last_action().is_none());
}

#[test]
fn custom_threshold_settles_where_asked() {
    let agent = ThresholdAgent::new().with_threshold(-3);
    let mut monitor = GameMonitor::with_agent(
        GameConfig::default(),
        &HeadlessSurfaceBackend::new(10),
        Box::new(agent),
    )
    .unwrap();

    monitor.run();

    assert!(matches!(monitor.state().score, -4 | -3));
    assert_eq!(monitor.memory().last_reward(), monitor.state().score as f64);
}

#[test]
fn zero_sized_config_fails_validation_first() {
    let result = GameMonitor::new(GameConfig::new(0, 480, 60), &HeadlessSurfaceBackend::new(1));
    assert!(matches!(result, Err(MonitorError::Config(_))));
}

#[test]
fn surface_errors_are_reported_through_the_monitor() {
    use ludus_core::{SurfaceBackend, SurfaceDescriptor};

    let err = HeadlessSurfaceBackend::new(1)
        .create_surface(&SurfaceDescriptor::new(WINDOW_TITLE, 0, 0))
        .unwrap_err();
    let err = MonitorError::from(err);
    assert!(matches!(
        err,
        MonitorError::Surface(SurfaceCreationError::InvalidDimensions { .. })
    ));
}
