//! Frame-buffered input state with edge detection.
//!
//! Platform events can arrive at any point between frames. They never touch
//! the queryable state directly. Presses and releases go into two pending
//! sets. `update()` commits them once per frame:
//!
//!   1. snapshot `current` into `previous`
//!   2. apply pending releases, except those whose identifier was also
//!      pressed in this window
//!   3. apply pending presses, then clear them
//!
//! A release skipped in step 2 stays pending and lands on the next
//! `update()`. A tap shorter than one frame is therefore held for exactly one
//! frame instead of vanishing.
//!
//! Queries compare `current` against `previous`, so `is_just_pressed` and
//! `is_just_released` only ever report transitions if `update()` is called
//! every frame. Pointer position is the exception: it is written straight
//! through on every move and has no frame-edge semantics.

use std::collections::HashSet;

use glam::DVec2;
use serde::Serialize;

use crate::host::HostRect;
use crate::names::{button_identifier, key_identifier};

/// A raw code as delivered by the platform, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawCode<'a> {
    /// Raw key string, e.g. `"a"`, `"ArrowLeft"`, `" "`.
    Key(&'a str),
    /// Pointer button index (0 primary, 1 auxiliary, 2 secondary).
    Button(u16),
}

impl RawCode<'_> {
    pub fn identifier(self) -> String {
        match self {
            RawCode::Key(raw) => key_identifier(raw),
            RawCode::Button(index) => button_identifier(index),
        }
    }
}

pub struct InputState {
    current: HashSet<String>,
    previous: HashSet<String>,
    pending_add: HashSet<String>,
    pending_remove: HashSet<String>,
    pointer_position: DVec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            current: HashSet::new(),
            previous: HashSet::new(),
            pending_add: HashSet::new(),
            pending_remove: HashSet::new(),
            pointer_position: DVec2::ZERO,
        }
    }

    pub fn on_press(&mut self, code: RawCode<'_>) {
        self.pending_add.insert(code.identifier());
    }

    pub fn on_release(&mut self, code: RawCode<'_>) {
        self.pending_remove.insert(code.identifier());
    }

    pub fn key_down(&mut self, raw_key: &str) {
        self.on_press(RawCode::Key(raw_key));
    }

    pub fn key_up(&mut self, raw_key: &str) {
        self.on_release(RawCode::Key(raw_key));
    }

    pub fn mouse_down(&mut self, button: u16) {
        self.on_press(RawCode::Button(button));
    }

    pub fn mouse_up(&mut self, button: u16) {
        self.on_release(RawCode::Button(button));
    }

    /// Stores `client` relative to `host`'s origin. Visible to queries
    /// immediately, without waiting for `update()`.
    pub fn on_pointer_move(&mut self, client: DVec2, host: &HostRect) {
        self.pointer_position = host.to_local(client);
    }

    /// Advances the frame boundary. Call exactly once per frame, before that
    /// frame's queries.
    pub fn update(&mut self) {
        self.previous.clone_from(&self.current);

        let pending_add = &self.pending_add;
        let current = &mut self.current;
        self.pending_remove.retain(|id| {
            if pending_add.contains(id) {
                log::trace!("Deferring release of '{id}' to next frame");
                true
            } else {
                current.remove(id);
                false
            }
        });

        self.current.extend(self.pending_add.drain());
    }

    pub fn is_held(&self, id: impl AsRef<str>) -> bool {
        self.current.contains(id.as_ref())
    }

    pub fn is_just_pressed(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.current.contains(id) && !self.previous.contains(id)
    }

    pub fn is_just_released(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        !self.current.contains(id) && self.previous.contains(id)
    }

    pub fn is_mouse_held(&self, button: impl AsRef<str>) -> bool {
        self.is_held(button)
    }

    pub fn is_mouse_just_pressed(&self, button: impl AsRef<str>) -> bool {
        self.is_just_pressed(button)
    }

    pub fn is_mouse_just_released(&self, button: impl AsRef<str>) -> bool {
        self.is_just_released(button)
    }

    /// Latest pointer position in host-local coordinates.
    pub fn pointer_position(&self) -> DVec2 {
        self.pointer_position
    }

    /// True if events are waiting for the next `update()`, including
    /// releases deferred by a same-frame press.
    pub fn has_pending(&self) -> bool {
        !self.pending_add.is_empty() || !self.pending_remove.is_empty()
    }

    pub fn snapshot(&self) -> InputSnapshot {
        let mut held: Vec<String> = self.current.iter().cloned().collect();
        let mut pressed: Vec<String> = self.current.difference(&self.previous).cloned().collect();
        let mut released: Vec<String> = self.previous.difference(&self.current).cloned().collect();
        held.sort();
        pressed.sort();
        released.sort();
        InputSnapshot {
            held,
            pressed,
            released,
            pointer: [self.pointer_position.x, self.pointer_position.y],
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of one frame's input, identifiers sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputSnapshot {
    pub held: Vec<String>,
    pub pressed: Vec<String>,
    pub released: Vec<String>,
    pub pointer: [f64; 2],
}
