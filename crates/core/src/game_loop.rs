//! Game loop module - the frame-driven driver
//!
//! The host calls [`GameLoop::frame`] once per frame with a monotonic
//! timestamp in milliseconds, and forwards input through
//! [`GameLoop::handle_action`]. The loop owns the session; rendering reads
//! [`GameLoop::snapshot`].
//!
//! The loop is "scheduled" from a successful start until the first frame
//! that observes game over. Unscheduled frames do nothing, which is how a
//! finished run stops ticking and redrawing.

use crate::rng::{RandomSource, SimpleRng};
use crate::session::{DropOutcome, GameSession};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, DROP_INTERVAL_MS};

/// What one call to [`GameLoop::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Gravity tick result, if the drop interval elapsed this frame.
    pub tick: Option<DropOutcome>,
    /// The host should redraw board and piece.
    pub redraw: bool,
    /// The host should call `frame` again.
    pub reschedule: bool,
}

impl FrameReport {
    fn idle() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct GameLoop<R = SimpleRng> {
    session: GameSession<R>,
    /// Milliseconds accumulated since the last gravity tick.
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    last_time_ms: Option<u64>,
    scheduled: bool,
}

impl<R: RandomSource> GameLoop<R> {
    /// A stopped loop around an idle session. Call [`GameLoop::start`] to play.
    pub fn new(rng: R) -> Self {
        Self::with_session(GameSession::new(rng))
    }

    /// Drive an existing session.
    ///
    /// A session that is already started and still running is scheduled
    /// right away.
    pub fn with_session(session: GameSession<R>) -> Self {
        let scheduled = session.started() && !session.is_over();
        Self {
            session,
            drop_counter_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            last_time_ms: None,
            scheduled,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// The start control is enabled while no run is in progress.
    pub fn start_enabled(&self) -> bool {
        !self.scheduled || self.session.is_over()
    }

    /// Reinitialize the session and schedule the loop.
    ///
    /// Returns false (and changes nothing) while a run is in progress.
    pub fn start(&mut self) -> bool {
        if !self.start_enabled() {
            return false;
        }
        self.session.restart();
        self.drop_counter_ms = 0;
        self.last_time_ms = None;
        self.scheduled = !self.session.is_over();
        true
    }

    /// Advance time to `now_ms`.
    ///
    /// The first frame after a start has a zero delta. A gravity tick runs
    /// when the accumulated time strictly exceeds the drop interval.
    pub fn frame(&mut self, now_ms: u64) -> FrameReport {
        if !self.scheduled {
            return FrameReport::idle();
        }

        let delta = match self.last_time_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_time_ms = Some(now_ms);
        self.drop_counter_ms = self
            .drop_counter_ms
            .saturating_add(u32::try_from(delta).unwrap_or(u32::MAX));

        let tick = if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_counter_ms = 0;
            Some(self.session.drop())
        } else {
            None
        };

        self.scheduled = !self.session.is_over();
        if !self.scheduled {
            log::info!("loop stopped at score {}", self.session.score());
        }

        FrameReport {
            tick,
            redraw: true,
            reschedule: self.scheduled,
        }
    }

    /// Forward an input action.
    ///
    /// Gameplay actions are ignored unless a run is in progress. A manual
    /// drop also restarts the gravity countdown.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Start {
            return self.start();
        }
        if !self.scheduled || self.session.is_over() {
            return false;
        }
        match action {
            GameAction::SoftDrop => {
                let outcome = self.session.drop();
                self.drop_counter_ms = 0;
                outcome != DropOutcome::Ignored
            }
            other => self.session.apply_action(other),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
        out.start_enabled = self.start_enabled();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameLoop<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}
