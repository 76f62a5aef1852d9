//! Event wiring between the terminal host and [`GameState`].
//!
//! The repeating tick timer and the arrow-key listener only exist while the
//! game is running. They live together in a [`RunScope`] that the session
//! acquires when the game enters `Running` and drops on any other state,
//! so a finished or torn-down game can never receive ticks or steering.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, trace};

use crate::game::{GameState, Lifecycle, TickOutcome};
use crate::input::{Arrow, Command, command_for};

/// Repeating timer that fires once per interval.
#[derive(Debug)]
pub struct TickTimer {
    interval: Duration,
    next_due: Instant,
}

impl TickTimer {
    /// Arms the timer; the first tick is due one interval after `now`.
    #[must_use]
    pub fn arm(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    ///
    /// A late poll fires once and re-anchors on `now` instead of bursting.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    /// Time left until the next tick.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// Arrow-key listener. Holding one means steering input is delivered.
#[derive(Debug)]
pub struct KeyListener {
    _attached: (),
}

impl KeyListener {
    fn attach() -> Self {
        Self { _attached: () }
    }

    /// Translates a key press into an arrow, ignoring every other key.
    #[must_use]
    pub fn translate(&self, key: KeyEvent) -> Option<Arrow> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        Arrow::from_key_code(key.code)
    }
}

/// Resources owned only while the game is running.
#[derive(Debug)]
pub struct RunScope {
    timer: TickTimer,
    listener: KeyListener,
}

impl RunScope {
    fn acquire(interval: Duration, now: Instant) -> Self {
        debug!(interval_ms = interval.as_millis(), "tick timer and key listener acquired");
        Self {
            timer: TickTimer::arm(interval, now),
            listener: KeyListener::attach(),
        }
    }
}

impl Drop for RunScope {
    fn drop(&mut self) {
        debug!("tick timer and key listener released");
    }
}

/// What the host loop should do after handling an event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the game state and the resources tied to its lifecycle.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    tick_interval: Duration,
    scope: Option<RunScope>,
    needs_redraw: bool,
}

impl Session {
    #[must_use]
    pub fn new(state: GameState, tick_interval: Duration) -> Self {
        let mut session = Self {
            state,
            tick_interval,
            scope: None,
            needs_redraw: true,
        };
        session.reconcile(Instant::now());
        session
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True while the tick timer and key listener are held.
    #[must_use]
    pub fn has_run_scope(&self) -> bool {
        self.scope.is_some()
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Forces a redraw, e.g. after a terminal resize.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// How long the host may block waiting for input.
    ///
    /// Without a running game there is nothing scheduled, so `idle_wait` is
    /// returned as-is.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, idle_wait: Duration) -> Duration {
        match &self.scope {
            Some(scope) => scope.timer.remaining(now).min(idle_wait),
            None => idle_wait,
        }
    }

    /// Dispatches one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        match command_for(key) {
            Some(Command::Quit) => return Control::Quit,
            Some(Command::Confirm) => {
                self.confirm();
                self.reconcile(now);
                return Control::Continue;
            }
            None => {}
        }

        let arrow = self
            .scope
            .as_ref()
            .and_then(|scope| scope.listener.translate(key));
        if let Some(arrow) = arrow {
            if self.state.set_direction(arrow) {
                trace!(?arrow, "direction changed");
            }
        }

        Control::Continue
    }

    /// Runs the tick loop if a tick is due at `now`.
    pub fn on_timer(&mut self, now: Instant) -> Option<TickOutcome> {
        let due = self
            .scope
            .as_mut()
            .is_some_and(|scope| scope.timer.fire(now));
        if !due {
            return None;
        }

        let outcome = self.state.advance();
        self.needs_redraw = true;
        self.reconcile(now);
        Some(outcome)
    }

    /// Presses Start when idle and Restart when over.
    fn confirm(&mut self) {
        match self.state.lifecycle() {
            Lifecycle::Idle => {
                self.state.start();
            }
            Lifecycle::Over => self.state.restart(),
            Lifecycle::Running => return,
        }
        self.needs_redraw = true;
    }

    fn reconcile(&mut self, now: Instant) {
        match (self.state.is_running(), self.scope.is_some()) {
            (true, false) => self.scope = Some(RunScope::acquire(self.tick_interval, now)),
            (false, true) => self.scope = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::config::BoardGeometry;
    use crate::food::Food;
    use crate::game::{GameState, Lifecycle, TickOutcome};
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{Control, Session, TickTimer};

    const TICK: Duration = Duration::from_millis(100);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> Session {
        Session::new(GameState::new_with_seed(BoardGeometry::default(), 21), TICK)
    }

    #[test]
    fn timer_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::arm(TICK, start);

        assert!(!timer.fire(start));
        assert!(!timer.fire(start + Duration::from_millis(99)));
        assert!(timer.fire(start + TICK));
        assert!(!timer.fire(start + TICK));
        assert!(timer.fire(start + TICK * 2));
    }

    #[test]
    fn late_timer_does_not_burst() {
        let start = Instant::now();
        let mut timer = TickTimer::arm(TICK, start);
        let late = start + TICK * 5;

        assert!(timer.fire(late));
        assert!(!timer.fire(late));
        assert_eq!(timer.remaining(late), TICK);
    }

    #[test]
    fn idle_session_holds_no_scope() {
        let mut session = session();
        let now = Instant::now();

        assert!(!session.has_run_scope());
        assert_eq!(session.on_timer(now + TICK * 10), None);
        assert_eq!(session.poll_timeout(now, Duration::from_secs(1)), Duration::from_secs(1));
    }

    #[test]
    fn start_acquires_scope_and_ticks_advance() {
        let mut session = session();
        let now = Instant::now();

        assert_eq!(session.handle_key(key(KeyCode::Enter), now), Control::Continue);
        assert_eq!(session.state().lifecycle(), Lifecycle::Running);
        assert!(session.has_run_scope());

        assert_eq!(session.on_timer(now), None);
        assert!(session.on_timer(now + TICK).is_some());
        assert_eq!(session.state().snake.head(), Cell { x: 6, y: 5 });
    }

    #[test]
    fn arrows_are_ignored_without_scope() {
        let mut session = session();
        let now = Instant::now();

        let _ = session.handle_key(key(KeyCode::Down), now);

        assert_eq!(session.state().direction, Direction::RIGHT);
    }

    #[test]
    fn arrows_steer_while_running() {
        let mut session = session();
        let now = Instant::now();
        let _ = session.handle_key(key(KeyCode::Enter), now);

        let _ = session.handle_key(key(KeyCode::Down), now);

        assert_eq!(session.state().direction, Direction::DOWN);
    }

    #[test]
    fn collision_releases_scope_and_restart_returns_to_idle() {
        let mut state = GameState::new_with_seed(BoardGeometry::default(), 22);
        state.snake = Snake::from_segments([Cell { x: 22, y: 0 }, Cell { x: 21, y: 0 }]);
        state.food = Food::at(Cell { x: 0, y: 10 });
        let mut session = Session::new(state, TICK);
        let now = Instant::now();
        let _ = session.handle_key(key(KeyCode::Enter), now);

        assert_eq!(session.on_timer(now + TICK), Some(TickOutcome::HitWall));
        assert!(!session.has_run_scope());
        assert_eq!(session.on_timer(now + TICK * 2), None);

        let _ = session.handle_key(key(KeyCode::Up), now);
        assert_eq!(session.state().direction, Direction::RIGHT);

        let _ = session.handle_key(key(KeyCode::Char(' ')), now);
        assert_eq!(session.state().lifecycle(), Lifecycle::Idle);
        assert!(!session.has_run_scope());
    }

    #[test]
    fn redraw_is_requested_only_after_changes() {
        let mut session = session();
        let now = Instant::now();

        assert!(session.take_redraw());
        assert!(!session.take_redraw());

        let _ = session.handle_key(key(KeyCode::Char('x')), now);
        assert!(!session.take_redraw());

        let _ = session.handle_key(key(KeyCode::Enter), now);
        assert!(session.take_redraw());

        let _ = session.on_timer(now + TICK);
        assert!(session.take_redraw());
    }

    #[test]
    fn quit_keys_work_in_every_state() {
        let mut session = session();
        let now = Instant::now();

        assert_eq!(session.handle_key(key(KeyCode::Char('q')), now), Control::Quit);
        let _ = session.handle_key(key(KeyCode::Enter), now);
        assert_eq!(session.handle_key(key(KeyCode::Esc), now), Control::Quit);
    }
}
