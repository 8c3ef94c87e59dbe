//! Screen switching with a pending-switch queue.
//!
//! Every navigation step requests a switch to a freshly built screen
//! snapshot. While a switch is animating, further requests queue up and are
//! drained in order once the running one completes; a backlogged switch is
//! shortened to [`QUEUED_TRANSITION_DURATION`] so the screen catches up with
//! the user instead of replaying every step at full length.
//!
//! The engine also owns the display pacing edges: the refresh rate is raised
//! when a switch starts and dropped once the queue runs dry.

use std::collections::VecDeque;
use std::mem;
use std::time::Duration;

use crate::application::{Application, ApplicationId};
use crate::config::QUEUED_TRANSITION_DURATION;
use crate::menu::page::MenuPage;

// =============================================================================
// Display Pacing
// =============================================================================

/// Display refresh pacing hooks.
///
/// The menu is mostly static, so the display idles at a slow refresh rate and
/// only speeds up while a transition is animating.
pub trait FpsController {
    fn activate_high_fps_mode(&mut self);
    fn activate_low_fps_mode(&mut self);
}

/// Controller for displays refreshed at a fixed rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedFps;

impl FpsController for FixedFps {
    fn activate_high_fps_mode(&mut self) {}

    fn activate_low_fps_mode(&mut self) {}
}

// =============================================================================
// Switch Descriptions
// =============================================================================

/// Travel direction of the incoming screen during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// How the incoming screen replaces the outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// The incoming screen appears on the next frame.
    Instant,

    /// The incoming screen pushes the outgoing one out, both cross-fading as
    /// they move.
    Slide(Direction),

    /// The outgoing screen fades down to black, then the incoming one fades
    /// up. Used when an application enters or leaves the screen.
    Swap,
}

/// What one side of a switch shows.
pub enum ScreenSnapshot {
    /// Nothing to draw.
    Blank,

    /// A rendered menu page.
    Page(MenuPage),

    /// An application that is still owned by the menu widget or parked on
    /// its stack, referenced by id.
    Application(ApplicationId),

    /// An application that has already been dropped from the widget but is
    /// still animating out, so the snapshot keeps it alive itself.
    DepartingApplication(Box<dyn Application>),
}

/// Whether a requested screen is the one already being shown.
///
/// Menu pages are rebuilt for every switch and never match; only a blank
/// screen or the same live application counts as already shown.
fn same_screen(a: &ScreenSnapshot, b: &ScreenSnapshot) -> bool {
    match (a, b) {
        (ScreenSnapshot::Blank, ScreenSnapshot::Blank) => true,
        (ScreenSnapshot::Application(a), ScreenSnapshot::Application(b)) => a == b,
        _ => false,
    }
}

struct PendingSwitch {
    incoming: ScreenSnapshot,
    kind: TransitionKind,
    duration: Duration,
    departing: Option<Box<dyn Application>>,
}

struct ActiveTransition {
    kind: TransitionKind,
    duration: Duration,
    elapsed: Duration,
    outgoing: ScreenSnapshot,
}

impl ActiveTransition {
    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// What the renderer should put on screen this frame.
pub enum TransitionView<'a> {
    /// No switch is running; draw the screen as it is.
    Settled(&'a ScreenSnapshot),

    /// A switch is animating between two screens.
    Animating {
        kind: TransitionKind,
        /// Animation progress in `0.0..=1.0`.
        progress: f32,
        outgoing: &'a ScreenSnapshot,
        incoming: &'a ScreenSnapshot,
    },
}

// =============================================================================
// Transition Engine
// =============================================================================

/// Runs screen switches one at a time, queueing the overflow.
pub struct Transitioner {
    /// The screen the widget logically shows. During an animation this is
    /// already the incoming side; the outgoing side lives in `active`.
    current: ScreenSnapshot,
    active: Option<ActiveTransition>,
    queue: VecDeque<PendingSwitch>,
}

impl Default for Transitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Transitioner {
    pub fn new() -> Self {
        Self {
            current: ScreenSnapshot::Blank,
            active: None,
            queue: VecDeque::new(),
        }
    }

    /// The screen the widget logically shows right now.
    pub fn current_screen(&self) -> &ScreenSnapshot {
        &self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Resolve what to draw this frame.
    pub fn view(&self) -> TransitionView<'_> {
        match &self.active {
            Some(active) => TransitionView::Animating {
                kind: active.kind,
                progress: active.progress(),
                outgoing: &active.outgoing,
                incoming: &self.current,
            },
            None => TransitionView::Settled(&self.current),
        }
    }

    /// Request a switch to `incoming`.
    ///
    /// Starts right away when nothing is animating, otherwise joins the
    /// queue. `departing` carries an application that the widget is dropping
    /// with this switch, so it stays drawable until the switch completes.
    pub fn request(
        &mut self,
        incoming: ScreenSnapshot,
        kind: TransitionKind,
        duration: Duration,
        departing: Option<Box<dyn Application>>,
        fps: &mut dyn FpsController,
    ) {
        if same_screen(&incoming, &self.current) {
            return;
        }
        if self.active.is_some() {
            self.queue.push_back(PendingSwitch {
                incoming,
                kind,
                duration,
                departing,
            });
            return;
        }
        fps.activate_high_fps_mode();
        self.begin(incoming, kind, duration, departing, fps);
    }

    /// Advance the running switch by `dt`, draining the queue as switches
    /// complete.
    pub fn tick(&mut self, dt: Duration, fps: &mut dyn FpsController) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.elapsed = active.elapsed.saturating_add(dt);
        if active.elapsed >= active.duration {
            self.active = None;
            self.drain(fps);
        }
    }

    fn begin(
        &mut self,
        incoming: ScreenSnapshot,
        kind: TransitionKind,
        duration: Duration,
        departing: Option<Box<dyn Application>>,
        fps: &mut dyn FpsController,
    ) {
        if let Some(application) = departing {
            self.current = ScreenSnapshot::DepartingApplication(application);
        }
        if kind == TransitionKind::Instant || duration.is_zero() {
            self.current = incoming;
            self.drain(fps);
            return;
        }
        let outgoing = mem::replace(&mut self.current, incoming);
        self.active = Some(ActiveTransition {
            kind,
            duration,
            elapsed: Duration::ZERO,
            outgoing,
        });
    }

    /// Start the next queued switch, or settle the display if there is none.
    ///
    /// A popped switch is shortened when more than one switch still waits
    /// behind it, so a backlog collapses quickly into the final screen.
    fn drain(&mut self, fps: &mut dyn FpsController) {
        match self.queue.pop_front() {
            Some(next) => {
                let mut duration = next.duration;
                if self.queue.len() > 1 && next.kind != TransitionKind::Instant {
                    duration = QUEUED_TRANSITION_DURATION;
                }
                self.begin(next.incoming, next.kind, duration, next.departing, fps);
            }
            None => fps.activate_low_fps_mode(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
