//! The intro animation driver.
//!
//! Owns one playthrough: a fixed timeline painted frame by frame onto a
//! [`Surface`], followed by exactly one completion callback. Frames, the
//! grace timer and resize notifications are delivered by whoever owns the
//! driver, through [`Driver::on_frame`], [`Driver::on_grace_elapsed`] and
//! [`Driver::on_resize`]. The driver only asks for them via the injected
//! [`FrameScheduler`] and [`ViewportSource`].

use thiserror::Error;

use crate::config::LoaderConfig;
use crate::geometry::SurfaceGeometry;
use crate::paint::{paint, Surface};
use crate::scene::Scene;
use crate::schedule::FrameScheduler;
use crate::timeline::{LoaderState, PhaseProgress};
use crate::viewport::ViewportSource;

/// Invoked once the animation has finished and its last frame is visible.
pub type OnComplete = Box<dyn FnOnce()>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivationError {
    #[error("loader surface is unavailable")]
    SurfaceUnavailable,
}

/// Mutable state of the running playthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub start_ms: f64,
    /// Largest elapsed time seen so far; frames never move backwards.
    pub elapsed_ms: f64,
    /// The timeline has reached its end and the grace timer is armed.
    pub completed: bool,
}

pub struct Driver<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    config: LoaderConfig,
    surface: S,
    scheduler: F,
    viewport: V,
    geometry: SurfaceGeometry,
    state: LoaderState,
    session: Option<Session>,
    on_complete: Option<OnComplete>,
    /// Set once the callback has been handed out or the driver torn down.
    finished: bool,
}

impl<S, F, V> Driver<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    /// Build a driver without starting it.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::SurfaceUnavailable`] when `surface` is
    /// `None`. The callback is dropped unused.
    pub fn new(
        config: LoaderConfig,
        surface: Option<S>,
        scheduler: F,
        viewport: V,
        on_complete: OnComplete,
    ) -> Result<Self, ActivationError> {
        let surface = surface.ok_or(ActivationError::SurfaceUnavailable)?;
        let geometry = SurfaceGeometry::from_viewport(viewport.measure(), config.max_device_pixel_ratio);
        Ok(Self {
            config,
            surface,
            scheduler,
            viewport,
            geometry,
            state: LoaderState::Initializing,
            session: None,
            on_complete: Some(on_complete),
            finished: false,
        })
    }

    /// [`Driver::new`] followed by [`Driver::start`].
    ///
    /// # Errors
    ///
    /// See [`Driver::new`].
    pub fn activate(
        config: LoaderConfig,
        surface: Option<S>,
        scheduler: F,
        viewport: V,
        on_complete: OnComplete,
    ) -> Result<Self, ActivationError> {
        let mut driver = Self::new(config, surface, scheduler, viewport, on_complete)?;
        driver.start();
        Ok(driver)
    }

    /// Capture the start instant, size the surface, watch for resizes and
    /// request the first frame. Later calls do nothing.
    pub fn start(&mut self) {
        if self.session.is_some() || self.finished {
            return;
        }
        let start_ms = self.scheduler.now_ms();
        self.session = Some(Session { start_ms, elapsed_ms: 0.0, completed: false });
        if self.apply_geometry().is_err() {
            log::warn!("loader surface rejected its initial size");
        }
        self.viewport.watch_resize();
        self.scheduler.request_frame();
        log::debug!(
            "loader started: {}x{} @{}x, timeline {} ms",
            self.geometry.width,
            self.geometry.height,
            self.geometry.dpr,
            self.config.timeline.total_ms()
        );
    }

    /// Paint one frame and decide what comes next.
    ///
    /// Scheduling is decided before the paint result is returned, so a
    /// failing surface does not stall the timeline.
    ///
    /// # Errors
    ///
    /// Returns the surface error raised while painting.
    pub fn on_frame(&mut self) -> Result<(), S::Error> {
        if self.finished {
            return Ok(());
        }
        let Some(mut session) = self.session else {
            return Ok(());
        };
        if session.completed {
            return Ok(());
        }

        let now = self.scheduler.now_ms() - session.start_ms;
        session.elapsed_ms = session.elapsed_ms.max(now);
        let elapsed = session.elapsed_ms;
        let timeline = self.config.timeline;

        let next = timeline.state_at(elapsed);
        if next != self.state {
            log::debug!("loader {:?} -> {:?} at {elapsed:.0} ms", self.state, next);
            self.state = next;
        }

        let scene = Scene::compose(&self.geometry, timeline.progress(elapsed), self.config.trail_factor);
        let painted = paint(&mut self.surface, &scene);

        if elapsed >= timeline.total_ms() {
            session.completed = true;
            self.state = LoaderState::Completed;
            self.scheduler.schedule_completion(self.config.grace_ms);
            log::info!("loader timeline finished after {elapsed:.0} ms");
        } else {
            self.scheduler.request_frame();
        }
        self.session = Some(session);
        painted
    }

    /// Re-measure the viewport. The timeline is not affected. Ignored once
    /// the timeline has completed, so the last frame stays on screen.
    ///
    /// # Errors
    ///
    /// Returns the surface error raised while resizing.
    pub fn on_resize(&mut self) -> Result<(), S::Error> {
        if self.finished || self.is_completed() || self.session.is_none() {
            return Ok(());
        }
        self.apply_geometry()?;
        log::debug!(
            "loader resized to {}x{} (buffer {}x{})",
            self.geometry.width,
            self.geometry.height,
            self.geometry.buffer_width,
            self.geometry.buffer_height
        );
        Ok(())
    }

    /// Finish the session and hand out the completion callback, at most
    /// once. Only yields it after the timeline has completed.
    ///
    /// Lets an owner release its borrow of the driver before running the
    /// callback.
    pub fn complete(&mut self) -> Option<OnComplete> {
        if self.finished || !self.is_completed() {
            return None;
        }
        self.finished = true;
        self.scheduler.cancel_frame();
        self.viewport.unwatch_resize();
        self.session = None;
        log::info!("loader complete");
        self.on_complete.take()
    }

    /// Grace delay has passed: run the completion callback.
    pub fn on_grace_elapsed(&mut self) {
        if let Some(done) = self.complete() {
            done();
        }
    }

    /// Stop everything synchronously. The callback will never run.
    pub fn deactivate(&mut self) {
        self.scheduler.cancel_frame();
        self.scheduler.cancel_completion();
        self.viewport.unwatch_resize();
        if !self.finished && self.session.is_some() {
            log::debug!("loader deactivated in state {:?}", self.state);
        }
        self.on_complete = None;
        self.session = None;
        self.finished = true;
    }

    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// True once the timeline has run to its end.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == LoaderState::Completed
    }

    /// True from `start` until completion or deactivation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some() && !self.finished
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    /// Elapsed time as of the last painted frame.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.session.map_or(0.0, |s| s.elapsed_ms)
    }

    #[must_use]
    pub fn progress(&self) -> PhaseProgress {
        self.config.timeline.progress(self.elapsed_ms())
    }

    #[must_use]
    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn apply_geometry(&mut self) -> Result<(), S::Error> {
        self.geometry =
            SurfaceGeometry::from_viewport(self.viewport.measure(), self.config.max_device_pixel_ratio);
        self.surface.resize(&self.geometry)
    }
}

impl<S, F, V> Drop for Driver<S, F, V>
where
    S: Surface,
    F: FrameScheduler,
    V: ViewportSource,
{
    fn drop(&mut self) {
        self.deactivate();
    }
}
