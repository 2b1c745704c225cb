pub mod session;

use std::sync::mpsc::{self, Receiver};

use crate::nav::NavEvent;
use session::{AssistantSession, SessionFactory, SessionNotice};

pub const DEFAULT_STATUS: &str = "Ready to speak";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Idle,
    Recording,
}

/// The voice-assistant overlay. While open it owns all input; the session
/// resource it holds is constructed fresh on open and released exactly
/// once on close.
pub struct AssistantOverlay {
    phase: OverlayPhase,
    status: String,
    error: Option<String>,
    session: Option<Box<dyn AssistantSession>>,
    notices: Option<Receiver<SessionNotice>>,
}

impl AssistantOverlay {
    pub fn new() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            status: DEFAULT_STATUS.to_string(),
            error: None,
            session: None,
            notices: None,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn is_recording(&self) -> bool {
        self.phase == OverlayPhase::Recording
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Idempotent: opening while already open must not construct a second
    /// session.
    pub fn open(&mut self, factory: &SessionFactory) {
        if self.is_open() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.session = Some(factory(tx));
        self.notices = Some(rx);
        self.phase = OverlayPhase::Idle;
    }

    /// Enter while open: start or stop recording.
    ///
    /// A start failure is surfaced as error text and leaves the phase at
    /// Idle so the user can retry; the session is not torn down.
    pub fn toggle_recording(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match self.phase {
            OverlayPhase::Idle => {
                self.error = None;
                match session.start_recording() {
                    Ok(()) => self.phase = OverlayPhase::Recording,
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
            OverlayPhase::Recording => {
                session.stop_recording();
                self.phase = OverlayPhase::Idle;
            }
            OverlayPhase::Closed => {}
        }
    }

    /// Only allowed while not recording; keeps the session alive.
    pub fn reset(&mut self) {
        if self.phase != OverlayPhase::Idle {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.reset();
            self.error = None;
        }
    }

    /// Tears the session down and restores the default display state.
    ///
    /// Recording is stopped before the resource is released. Taking the
    /// session out of its slot first makes a second close a no-op, so
    /// rapid repeated close signals cannot reach a destroyed resource.
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            if self.phase == OverlayPhase::Recording {
                session.stop_recording();
            }
            session.destroy();
        }
        self.notices = None;
        self.phase = OverlayPhase::Closed;
        self.status = DEFAULT_STATUS.to_string();
        self.error = None;
    }

    /// Route a navigation event while the overlay owns input.
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::Activate => self.toggle_recording(),
            NavEvent::Cancel => self.close(),
            _ => {}
        }
    }

    /// Apply queued session notices on the app thread. Errors display in
    /// place of status but do not change phase or destroy the session.
    pub fn drain_notices(&mut self) {
        let Some(rx) = self.notices.as_ref() else {
            return;
        };
        while let Ok(notice) = rx.try_recv() {
            match notice {
                SessionNotice::Status(text) => self.status = text,
                SessionNotice::Error(text) => self.error = Some(text),
            }
        }
    }
}

impl Default for AssistantOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavEvent;
    use session::SessionError;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc::Sender;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Call {
        Start,
        Stop,
        Reset,
        Destroy,
    }

    #[derive(Default)]
    struct Probe {
        built: usize,
        calls: Vec<Call>,
        fail_start: Option<String>,
    }

    struct ScriptedSession {
        probe: Rc<RefCell<Probe>>,
        notices: Sender<SessionNotice>,
    }

    impl AssistantSession for ScriptedSession {
        fn start_recording(&mut self) -> Result<(), SessionError> {
            self.probe.borrow_mut().calls.push(Call::Start);
            match self.probe.borrow().fail_start.clone() {
                Some(msg) => Err(SessionError::MicUnavailable(msg)),
                None => Ok(()),
            }
        }

        fn stop_recording(&mut self) {
            self.probe.borrow_mut().calls.push(Call::Stop);
        }

        fn reset(&mut self) {
            self.probe.borrow_mut().calls.push(Call::Reset);
        }

        fn destroy(&mut self) {
            self.probe.borrow_mut().calls.push(Call::Destroy);
        }
    }

    impl ScriptedSession {
        fn factory(probe: Rc<RefCell<Probe>>) -> SessionFactory {
            Box::new(move |notices| {
                probe.borrow_mut().built += 1;
                Box::new(ScriptedSession {
                    probe: probe.clone(),
                    notices,
                })
            })
        }
    }

    fn setup() -> (AssistantOverlay, SessionFactory, Rc<RefCell<Probe>>) {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let factory = ScriptedSession::factory(probe.clone());
        (AssistantOverlay::new(), factory, probe)
    }

    #[test]
    fn test_open_transitions_to_idle_and_builds_one_session() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
        assert_eq!(probe.borrow().built, 1);
    }

    #[test]
    fn test_repeated_open_does_not_build_second_session() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.open(&factory);
        overlay.open(&factory);
        assert_eq!(probe.borrow().built, 1);
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
    }

    #[test]
    fn test_reopen_after_close_builds_fresh_session() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.close();
        overlay.open(&factory);
        assert_eq!(probe.borrow().built, 2);
    }

    #[test]
    fn test_toggle_recording_round_trip() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.toggle_recording();
        assert_eq!(overlay.phase(), OverlayPhase::Recording);
        overlay.toggle_recording();
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
        assert_eq!(probe.borrow().calls, vec![Call::Start, Call::Stop]);
    }

    #[test]
    fn test_start_failure_sets_error_and_stays_idle() {
        let (mut overlay, factory, probe) = setup();
        probe.borrow_mut().fail_start = Some("mic denied".to_string());
        overlay.open(&factory);
        overlay.toggle_recording();
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
        assert_eq!(
            overlay.error(),
            Some("microphone unavailable: mic denied")
        );
        // Session survives the failure; the user can retry.
        probe.borrow_mut().fail_start = None;
        overlay.toggle_recording();
        assert_eq!(overlay.phase(), OverlayPhase::Recording);
        assert_eq!(overlay.error(), None);
    }

    #[test]
    fn test_async_error_displays_without_phase_change() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.toggle_recording();
        probe.borrow_mut().calls.clear();
        // Simulate the backend reporting an error mid-recording.
        overlay.error = Some("mic denied".to_string());
        assert_eq!(overlay.phase(), OverlayPhase::Recording);
        assert!(probe.borrow().calls.is_empty());
        overlay.close();
        assert_eq!(probe.borrow().calls, vec![Call::Stop, Call::Destroy]);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.error(), None);
    }

    #[test]
    fn test_close_while_recording_stops_before_destroy() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.toggle_recording();
        overlay.close();
        assert_eq!(
            probe.borrow().calls,
            vec![Call::Start, Call::Stop, Call::Destroy]
        );
    }

    #[test]
    fn test_double_close_destroys_exactly_once() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.close();
        overlay.close();
        let destroys = probe
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == Call::Destroy)
            .count();
        assert_eq!(destroys, 1);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_close_resets_status_and_error() {
        let (mut overlay, factory, _probe) = setup();
        overlay.open(&factory);
        overlay.status = "Listening...".to_string();
        overlay.error = Some("transport dropped".to_string());
        overlay.close();
        assert_eq!(overlay.status(), DEFAULT_STATUS);
        assert_eq!(overlay.error(), None);
    }

    #[test]
    fn test_reset_requires_idle_and_keeps_session() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.toggle_recording();
        overlay.reset();
        assert!(probe.borrow().calls.iter().all(|c| *c != Call::Reset));
        overlay.toggle_recording();
        overlay.error = Some("stale".to_string());
        overlay.reset();
        assert!(probe.borrow().calls.contains(&Call::Reset));
        assert_eq!(overlay.error(), None);
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
    }

    #[test]
    fn test_toggle_without_session_is_noop() {
        let (mut overlay, _factory, _probe) = setup();
        overlay.toggle_recording();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_arrows_are_ignored_while_open() {
        let (mut overlay, factory, probe) = setup();
        overlay.open(&factory);
        overlay.handle(NavEvent::MoveLeft);
        overlay.handle(NavEvent::MoveDown);
        assert_eq!(overlay.phase(), OverlayPhase::Idle);
        assert!(probe.borrow().calls.is_empty());
    }

    #[test]
    fn test_notices_update_status_and_error() {
        let (mut overlay, factory, _probe) = setup();
        overlay.open(&factory);
        let tx = {
            let (tx, rx) = mpsc::channel();
            overlay.notices = Some(rx);
            tx
        };
        tx.send(SessionNotice::Status("Listening...".to_string()))
            .unwrap();
        tx.send(SessionNotice::Error("mic denied".to_string()))
            .unwrap();
        overlay.drain_notices();
        assert_eq!(overlay.status(), "Listening...");
        assert_eq!(overlay.error(), Some("mic denied"));
    }
}
