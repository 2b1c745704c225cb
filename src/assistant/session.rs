use std::sync::mpsc::Sender;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("microphone unavailable: {0}")]
    MicUnavailable(String),
    #[error("assistant transport failed: {0}")]
    Transport(String),
}

/// Out-of-band notification from a session to the overlay. Sent over an
/// mpsc channel and drained on the app thread, so all state mutation stays
/// on one logical thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    Status(String),
    Error(String),
}

/// An opaque realtime voice-assistant session.
///
/// The overlay controller guarantees lifecycle ordering: `start_recording`
/// and `stop_recording` alternate, recording is stopped before `destroy`,
/// and no method is ever called after `destroy`.
pub trait AssistantSession {
    fn start_recording(&mut self) -> Result<(), SessionError>;
    fn stop_recording(&mut self);
    fn reset(&mut self);
    fn destroy(&mut self);
}

/// Constructs a fresh session wired to the given notice channel. A new
/// session is built on every overlay open so no state leaks between
/// open/close cycles.
pub type SessionFactory = Box<dyn Fn(Sender<SessionNotice>) -> Box<dyn AssistantSession>>;

/// Stand-in for a realtime voice backend. Audio capture and transport are
/// out of scope here; this session only reports the lifecycle status text
/// a real backend would.
pub struct SimulatedSession {
    notices: Sender<SessionNotice>,
    recording: bool,
}

impl SimulatedSession {
    pub fn new(notices: Sender<SessionNotice>) -> Self {
        let session = Self {
            notices,
            recording: false,
        };
        session.notify_status("Connected");
        session
    }

    pub fn factory() -> SessionFactory {
        Box::new(|notices| Box::new(SimulatedSession::new(notices)))
    }

    fn notify_status(&self, text: &str) {
        // The receiver is dropped on close; a failed send is fine then.
        let _ = self.notices.send(SessionNotice::Status(text.to_string()));
    }
}

impl AssistantSession for SimulatedSession {
    fn start_recording(&mut self) -> Result<(), SessionError> {
        self.recording = true;
        self.notify_status("Listening...");
        Ok(())
    }

    fn stop_recording(&mut self) {
        self.recording = false;
        self.notify_status("Ready to speak");
    }

    fn reset(&mut self) {
        self.recording = false;
        self.notify_status("Session reset");
    }

    fn destroy(&mut self) {
        self.recording = false;
    }
}
