use std::cell::Cell;
use std::rc::Rc;

use intro_loader::geometry::Viewport;
use intro_loader::paint::{Command, Recorder};
use intro_loader::schedule::{FrameScheduler, ManualScheduler};
use intro_loader::viewport::FixedViewport;
use intro_loader::{ActivationError, Driver, LoaderConfig, LoaderState, Phase, Timeline};

type TestDriver = Driver<Recorder, ManualScheduler, FixedViewport>;

const START: f64 = 1000.0;

struct Harness {
    driver: TestDriver,
    clock: ManualScheduler,
    viewport: FixedViewport,
    fired: Rc<Cell<u32>>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    fn with_config(config: LoaderConfig) -> Self {
        let clock = ManualScheduler::starting_at(START);
        let viewport = FixedViewport::new(1280.0, 720.0, 1.0);
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let driver = Driver::activate(
            config,
            Some(Recorder::new()),
            clock.clone(),
            viewport.clone(),
            Box::new(move || counter.set(counter.get() + 1)),
        )
        .unwrap();
        Self { driver, clock, viewport, fired }
    }

    /// Jump to `elapsed` ms after start and deliver whatever is due.
    fn at(&mut self, elapsed: f64) {
        self.clock.set_now(START + elapsed);
        self.pump();
    }

    fn pump(&mut self) {
        if self.clock.take_frame() {
            self.driver.on_frame().unwrap();
        }
        if self.clock.take_due_completion() {
            self.driver.on_grace_elapsed();
        }
    }

    /// Run at a fixed frame interval until `until` ms after start.
    fn run(&mut self, until: f64, frame_ms: f64) {
        let mut t = self.driver.elapsed_ms();
        while t <= until {
            self.at(t);
            t += frame_ms;
        }
    }
}

#[test]
fn activation_schedules_first_frame() {
    let h = Harness::new();
    assert_eq!(h.driver.state(), LoaderState::Initializing);
    assert!(h.driver.is_active());
    assert!(h.clock.frame_pending());
    assert!(h.viewport.is_watching());
    assert_eq!(h.driver.session().map(|s| s.start_ms), Some(START));
    assert_eq!(h.driver.surface().commands, vec![Command::Resize(*h.driver.geometry())]);
}

#[test]
fn missing_surface_is_a_silent_no_op() {
    let clock = ManualScheduler::new();
    let viewport = FixedViewport::new(800.0, 600.0, 1.0);
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);

    let result: Result<TestDriver, _> = Driver::activate(
        LoaderConfig::default(),
        None,
        clock.clone(),
        viewport.clone(),
        Box::new(move || flag.set(true)),
    );

    assert_eq!(result.err(), Some(ActivationError::SurfaceUnavailable));
    assert_eq!(clock.frames_requested(), 0);
    assert!(!viewport.is_watching());
    clock.advance(60_000.0);
    assert_eq!(clock.completion_due(), None);
    assert!(!fired.get());
}

#[test]
fn reference_timeline_runs_to_single_completion() {
    let mut h = Harness::new();

    h.at(0.0);
    assert_eq!(h.driver.state(), LoaderState::Playing(Phase::Grid));
    assert_eq!(h.driver.progress().grid, 0.0);
    assert_eq!(h.driver.surface().last_frame(), &[Command::Clear(intro_loader::style::BACKGROUND)]);

    h.at(1100.0);
    assert_eq!(h.driver.state(), LoaderState::Playing(Phase::Scaffold));
    assert_eq!(h.driver.progress().grid, 1.0);
    assert_eq!(h.driver.progress().scaffold, 0.0);

    h.at(2000.0);
    assert_eq!(h.driver.state(), LoaderState::Playing(Phase::Letterform));
    assert_eq!(h.driver.progress().scaffold, 1.0);
    assert_eq!(h.driver.progress().letterform, 0.0);

    h.at(3200.0);
    assert_eq!(h.driver.state(), LoaderState::Holding);
    assert_eq!(h.driver.progress().letterform, 1.0);

    h.at(3700.0);
    assert_eq!(h.driver.state(), LoaderState::Completed);
    assert!(!h.clock.frame_pending());
    let grace = LoaderConfig::default().grace_ms;
    assert_eq!(h.clock.completion_due(), Some(START + 3700.0 + grace));
    assert_eq!(h.fired.get(), 0, "callback waits for the grace delay");

    h.at(3700.0 + grace);
    assert_eq!(h.fired.get(), 1);
    assert!(!h.driver.is_active());
    assert!(!h.viewport.is_watching());

    // More frames and timer ticks after completion change nothing.
    let painted = h.driver.surface().frames();
    h.driver.on_frame().unwrap();
    h.driver.on_grace_elapsed();
    h.at(10_000.0);
    assert_eq!(h.fired.get(), 1);
    assert_eq!(h.driver.surface().frames(), painted);
}

#[test]
fn completion_is_handed_out_once() {
    let mut h = Harness::new();
    assert!(h.driver.complete().is_none(), "not before the timeline ends");

    h.run(3700.0, 16.0);
    h.at(3700.0);
    assert!(h.driver.is_completed());

    let done = h.driver.complete();
    assert!(done.is_some());
    assert!(h.driver.complete().is_none());
    if let Some(done) = done {
        done();
    }
    assert_eq!(h.fired.get(), 1);
}

#[test]
fn duration_is_independent_of_frame_rate() {
    for frame_ms in [8.0, 16.7, 33.3, 250.0] {
        let mut h = Harness::new();
        h.run(3699.0, frame_ms);
        assert!(!h.driver.is_completed(), "frame_ms={frame_ms}");
        h.at(3700.0);
        assert!(h.driver.is_completed(), "frame_ms={frame_ms}");
    }
}

#[test]
fn dropped_frames_catch_up() {
    let mut h = Harness::new();
    h.at(0.0);
    h.at(3000.0);
    assert_eq!(h.driver.state(), LoaderState::Playing(Phase::Letterform));
    let p = h.driver.progress();
    assert_eq!((p.grid, p.scaffold), (1.0, 1.0));
    assert!((p.letterform - 1000.0 / 1200.0).abs() < 1e-9);
    assert_eq!(h.driver.surface().frames(), 2);
}

#[test]
fn elapsed_time_never_runs_backwards() {
    let mut h = Harness::new();
    h.at(1500.0);
    let before = h.driver.elapsed_ms();
    h.at(1200.0);
    assert_eq!(h.driver.elapsed_ms(), before);
    assert_eq!(h.driver.state(), LoaderState::Playing(Phase::Scaffold));
}

#[test]
fn resize_keeps_the_timeline() {
    let mut h = Harness::new();
    h.at(1500.0);
    let progress = h.driver.progress();
    let elapsed = h.driver.elapsed_ms();
    let before = *h.driver.geometry();

    h.viewport.set(Viewport::new(600.0, 900.0, 3.0));
    h.driver.on_resize().unwrap();

    let after = *h.driver.geometry();
    assert_ne!(before, after);
    assert_eq!((after.width, after.height, after.dpr), (600.0, 900.0, 2.0));
    assert_eq!((after.buffer_width, after.buffer_height), (1200, 1800));
    assert_eq!(h.driver.session().map(|s| s.start_ms), Some(START));
    assert_eq!(h.driver.elapsed_ms(), elapsed);
    assert_eq!(h.driver.progress(), progress);
    assert!(h.driver.surface().commands.contains(&Command::Resize(after)));

    // The next frame is painted against the new dimensions.
    h.at(1500.0);
    let arcs: Vec<_> = h
        .driver
        .surface()
        .last_frame()
        .iter()
        .filter_map(|c| match c {
            Command::Arc { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    assert!(!arcs.is_empty());
    assert!(arcs.iter().all(|c| c.x == 300.0 && c.y == 450.0));
}

#[test]
fn resize_after_timeline_end_is_ignored() {
    let mut h = Harness::new();
    h.at(3700.0);
    assert!(h.driver.is_completed());
    let before = *h.driver.geometry();
    let painted = h.driver.surface().commands.len();

    // Grace delay still pending: the last frame must stay as painted.
    h.viewport.set(Viewport::new(600.0, 900.0, 1.0));
    h.driver.on_resize().unwrap();
    assert_eq!(*h.driver.geometry(), before);
    assert_eq!(h.driver.surface().commands.len(), painted);
    assert!(!h.clock.frame_pending());

    h.at(3780.0);
    assert_eq!(h.fired.get(), 1);
    h.driver.on_resize().unwrap();
    assert_eq!(*h.driver.geometry(), before);
    assert_eq!(h.driver.surface().commands.len(), painted);
}

#[test]
fn deactivation_before_end_prevents_completion() {
    let mut h = Harness::new();
    h.run(2500.0, 16.0);
    h.driver.deactivate();

    assert!(!h.driver.is_active());
    assert!(!h.clock.frame_pending());
    assert!(!h.viewport.is_watching());

    h.run(10_000.0, 16.0);
    h.driver.on_grace_elapsed();
    assert_eq!(h.fired.get(), 0);
}

#[test]
fn deactivation_during_grace_prevents_completion() {
    let mut h = Harness::new();
    h.run(3700.0, 50.0);
    h.at(3700.0);
    assert!(h.clock.completion_due().is_some());

    h.driver.deactivate();
    assert_eq!(h.clock.completion_due(), None);
    h.at(5000.0);
    h.driver.on_grace_elapsed();
    assert_eq!(h.fired.get(), 0);
}

#[test]
fn dropping_the_driver_tears_down() {
    let h = Harness::new();
    let Harness { driver, clock, viewport, fired } = h;
    drop(driver);
    assert!(!clock.frame_pending());
    assert!(!viewport.is_watching());
    assert_eq!(fired.get(), 0);
}

#[test]
fn start_is_idempotent() {
    let mut h = Harness::new();
    h.clock.advance(500.0);
    h.driver.start();
    assert_eq!(h.driver.session().map(|s| s.start_ms), Some(START));
    assert_eq!(h.clock.frames_requested(), 1);
}

#[test]
fn new_driver_waits_for_start() {
    let mut clock = ManualScheduler::new();
    let driver: TestDriver = Driver::new(
        LoaderConfig::default(),
        Some(Recorder::new()),
        clock.clone(),
        FixedViewport::new(320.0, 240.0, 1.0),
        Box::new(|| {}),
    )
    .unwrap();
    assert!(!driver.is_active());
    assert!(!clock.frame_pending());
    assert!(driver.surface().commands.is_empty());

    // The scheduler is a plain handle; a stray request does not start the driver.
    clock.request_frame();
    assert_eq!(driver.state(), LoaderState::Initializing);
}

#[test]
fn zero_length_timeline_completes_on_first_frame() {
    let config = LoaderConfig {
        timeline: Timeline { grid_ms: 0.0, scaffold_ms: 0.0, letterform_ms: 0.0, hold_ms: 0.0 },
        grace_ms: 0.0,
        ..LoaderConfig::default()
    };
    let mut h = Harness::with_config(config);
    h.at(0.0);
    assert!(h.driver.is_completed());
    h.pump();
    assert_eq!(h.fired.get(), 1);
}
