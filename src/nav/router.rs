use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::nav::NavEvent;

/// The single routing target for semantic navigation events.
///
/// Replaces the pattern of several concurrently registered key handlers
/// each gated by its own disabled flag: with one explicit owner, a key
/// press can never trigger two layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOwner {
    Sections,
    Overlay,
}

pub struct InputRouter {
    owner: InputOwner,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            owner: InputOwner::Sections,
        }
    }

    pub fn owner(&self) -> InputOwner {
        self.owner
    }

    /// Idempotent; granting the current owner again is a no-op.
    pub fn grant(&mut self, owner: InputOwner) {
        self.owner = owner;
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a raw key event into a semantic navigation event.
///
/// Only key presses count: repeats and releases are dropped so one
/// physical press produces at most one event. Unmapped keys return None
/// and fall through to the caller (quit handling etc.).
pub fn map_key(key: &KeyEvent) -> Option<NavEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(NavEvent::MoveUp),
        KeyCode::Down => Some(NavEvent::MoveDown),
        KeyCode::Left => Some(NavEvent::MoveLeft),
        KeyCode::Right => Some(NavEvent::MoveRight),
        KeyCode::Enter => Some(NavEvent::Activate),
        KeyCode::Esc => Some(NavEvent::Cancel),
        _ => None,
    }
}
