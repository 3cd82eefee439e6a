use crate::foundation::core::{Point, SimTime, Viewport};
use crate::foundation::math::Rng64;
use crate::scene::audio::{AudioCue, AudioOut};
use crate::scene::balloons::{BalloonField, DEFAULT_BALLOON_COUNT};
use crate::scene::burst::Tick;
use crate::scene::controller::SpotlightController;
use crate::scene::toggle::{ClickRoute, ClickTarget, ToggleControl, ToggleState, route_click};

/// Notice shown instead of the scene on narrow screens.
pub const SMALL_SCREEN_NOTICE: &str = "Not Supported on Small Screens";

/// Parameters fixed for a scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneOptions {
    /// Screen size.
    pub viewport: Viewport,
    /// Seed for every random draw.
    pub seed: u64,
    /// Balloons per activation.
    pub balloon_count: u32,
}

impl SceneOptions {
    /// Defaults for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            seed: 0,
            balloon_count: DEFAULT_BALLOON_COUNT,
        }
    }
}

/// Something observable that happened in the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    /// Scene mounted.
    Mounted {
        /// Virtual time.
        at_ms: u64,
        /// `true` when the small-screen notice replaced the scene.
        degraded: bool,
    },
    /// A click reached the window.
    Click {
        /// Virtual time.
        at_ms: u64,
        /// Topmost element under the click.
        target: ClickTarget,
        /// What the click did to the switch.
        route: ClickRoute,
    },
    /// Lights on.
    Opened {
        /// Virtual time.
        at_ms: u64,
        /// Balloons generated for this activation.
        balloons: u32,
    },
    /// Lights off.
    Closed {
        /// Virtual time.
        at_ms: u64,
    },
    /// Burst timer tick emitting two bursts.
    Burst {
        /// Virtual time.
        at_ms: u64,
        /// Pieces per burst.
        particle_count: u32,
    },
    /// Burst timer ran out.
    BurstsElapsed {
        /// Virtual time.
        at_ms: u64,
    },
    /// Audio cue sent to the audio output.
    Audio {
        /// Virtual time.
        at_ms: u64,
        /// Cue.
        cue: AudioCue,
    },
    /// Scene torn down.
    TornDown {
        /// Virtual time.
        at_ms: u64,
    },
}

/// The whole greeting: switch, spotlight controller and balloon field.
///
/// The scene owns `is_open`; children only read it. Input arrives in virtual-time order
/// through [`Scene::pointer_move`], [`Scene::click`] and [`Scene::advance_to`].
pub struct Scene<A: AudioOut> {
    opts: SceneOptions,
    now: SimTime,
    toggle: ToggleState,
    control: ToggleControl,
    spotlight: SpotlightController,
    balloons: Option<BalloonField>,
    balloon_rng: Rng64,
    audio: A,
    journal: Vec<SceneEvent>,
    degraded: bool,
    torn_down: bool,
}

impl<A: AudioOut> Scene<A> {
    /// Mount a new scene at time zero.
    pub fn mount(opts: SceneOptions, audio: A) -> Self {
        let mut rng = Rng64::new(opts.seed);
        let spotlight = SpotlightController::mount(opts.viewport, rng.fork());
        let balloon_rng = rng.fork();
        let degraded = opts.viewport.is_degraded();
        if degraded {
            tracing::warn!(
                width = opts.viewport.width,
                "viewport below interactive breakpoint; showing notice"
            );
        }
        Self {
            opts,
            now: SimTime::ZERO,
            toggle: ToggleState::default(),
            control: ToggleControl::for_viewport(opts.viewport),
            spotlight,
            balloons: None,
            balloon_rng,
            audio,
            journal: vec![SceneEvent::Mounted { at_ms: 0, degraded }],
            degraded,
            torn_down: false,
        }
    }

    /// Options the scene was mounted with.
    pub fn options(&self) -> SceneOptions {
        self.opts
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Switch state.
    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    /// Switch placement.
    pub fn control(&self) -> &ToggleControl {
        &self.control
    }

    /// Overlay, timer, confetti and pointer graphic.
    pub fn spotlight(&self) -> &SpotlightController {
        &self.spotlight
    }

    /// Balloon field while the lights are on.
    pub fn balloons(&self) -> Option<&BalloonField> {
        self.balloons.as_ref()
    }

    /// Audio output.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Everything that happened so far.
    pub fn journal(&self) -> &[SceneEvent] {
        &self.journal
    }

    /// Static notice replacing the scene, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(SMALL_SCREEN_NOTICE)
    }

    /// `true` when the small-screen notice is shown.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// `true` after [`Scene::teardown`].
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Run timers and physics up to `at`. Earlier instants are ignored.
    pub fn advance_to(&mut self, at: SimTime) {
        if at <= self.now || self.torn_down {
            return;
        }
        for tick in self.spotlight.advance_to(at) {
            self.journal.push(match tick {
                Tick::Burst { at, particle_count } => SceneEvent::Burst {
                    at_ms: at.0,
                    particle_count,
                },
                Tick::Elapsed { at } => SceneEvent::BurstsElapsed { at_ms: at.0 },
            });
        }
        self.now = at;
    }

    /// Pointer moved to `p` at `at`.
    pub fn pointer_move(&mut self, at: SimTime, p: Point) {
        self.advance_to(at);
        if self.degraded || self.torn_down {
            return;
        }
        self.spotlight.pointer_moved(p, self.control.center());
    }

    /// Topmost element under `p`.
    pub fn hit_test(&self, p: Point) -> ClickTarget {
        if self.spotlight.indicator().hit(p) {
            ClickTarget::Indicator
        } else if self.control.bounds().contains(p) {
            ClickTarget::Control
        } else {
            ClickTarget::Backdrop
        }
    }

    /// Click at `p` at `at`.
    pub fn click(&mut self, at: SimTime, p: Point) -> ClickRoute {
        self.advance_to(at);
        if self.degraded || self.torn_down {
            return ClickRoute::Ignored;
        }
        let target = self.hit_test(p);
        let route = route_click(&self.control, target, p);
        self.journal.push(SceneEvent::Click {
            at_ms: self.now.0,
            target,
            route,
        });
        if route != ClickRoute::Ignored {
            self.flip_switch();
        }
        route
    }

    fn flip_switch(&mut self) {
        let now = self.now;
        let toggled = self.toggle.activate();
        for cue in toggled.cues {
            self.audio.cue(now, cue);
            self.journal.push(SceneEvent::Audio { at_ms: now.0, cue });
        }
        self.set_open(toggled.is_open);
    }

    fn set_open(&mut self, is_open: bool) {
        let now = self.now;
        if is_open {
            if self.spotlight.enter_open(now) {
                let field = BalloonField::mount(self.opts.balloon_count, now, &mut self.balloon_rng);
                self.balloons = Some(field);
                self.journal.push(SceneEvent::Opened {
                    at_ms: now.0,
                    balloons: self.opts.balloon_count,
                });
            }
        } else if self.spotlight.enter_closed(now) {
            self.balloons = None;
            self.journal.push(SceneEvent::Closed { at_ms: now.0 });
        }
    }

    /// Unmount: cancel the timer, clear confetti and balloons. Later input is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.spotlight.teardown();
        self.balloons = None;
        self.torn_down = true;
        self.journal.push(SceneEvent::TornDown { at_ms: self.now.0 });
        tracing::debug!(at_ms = self.now.0, "scene torn down");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/greeting.rs"]
mod tests;
