//! [`InputState`] bound to an [`EventDispatcher`] for its whole lifetime.
//!
//! `attach()` registers the five ingestion hooks and keeps their
//! [`Subscription`]s; dropping the `AttachedInput` releases all of them.
//! Ingestion and frame-side calls share the state through one `RefCell`,
//! and every method here borrows it only for the duration of the call, so a
//! dispatch can never observe an outstanding borrow from the consumer.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use crate::dispatch::{EventDispatcher, EventKind, InputEvent, Subscription};
use crate::host::HostElement;
use crate::input::{InputSnapshot, InputState, RawCode};

pub struct AttachedInput {
    state: Rc<RefCell<InputState>>,
    host: Rc<dyn HostElement>,
    _subscriptions: [Subscription; 5],
}

impl AttachedInput {
    pub fn attach(dispatcher: &EventDispatcher, host: Rc<dyn HostElement>) -> Self {
        let state = Rc::new(RefCell::new(InputState::new()));

        let on_key_down = {
            let state = Rc::clone(&state);
            dispatcher.subscribe(EventKind::KeyDown, move |event| {
                if let InputEvent::KeyDown(raw) = event {
                    state.borrow_mut().on_press(RawCode::Key(raw));
                }
            })
        };
        let on_key_up = {
            let state = Rc::clone(&state);
            dispatcher.subscribe(EventKind::KeyUp, move |event| {
                if let InputEvent::KeyUp(raw) = event {
                    state.borrow_mut().on_release(RawCode::Key(raw));
                }
            })
        };
        let on_pointer_down = {
            let state = Rc::clone(&state);
            dispatcher.subscribe(EventKind::PointerDown, move |event| {
                if let InputEvent::PointerDown(button) = event {
                    state.borrow_mut().on_press(RawCode::Button(*button));
                }
            })
        };
        let on_pointer_up = {
            let state = Rc::clone(&state);
            dispatcher.subscribe(EventKind::PointerUp, move |event| {
                if let InputEvent::PointerUp(button) = event {
                    state.borrow_mut().on_release(RawCode::Button(*button));
                }
            })
        };
        let on_pointer_move = {
            let state = Rc::clone(&state);
            let host = Rc::clone(&host);
            dispatcher.subscribe(EventKind::PointerMove, move |event| {
                if let InputEvent::PointerMove(client) = event {
                    let bounds = host.bounding_rect();
                    state.borrow_mut().on_pointer_move(*client, &bounds);
                }
            })
        };

        log::debug!("Input tracker attached");
        Self {
            state,
            host,
            _subscriptions: [
                on_key_down,
                on_key_up,
                on_pointer_down,
                on_pointer_up,
                on_pointer_move,
            ],
        }
    }

    pub fn update(&self) {
        self.state.borrow_mut().update();
    }

    pub fn is_held(&self, id: impl AsRef<str>) -> bool {
        self.state.borrow().is_held(id)
    }

    pub fn is_just_pressed(&self, id: impl AsRef<str>) -> bool {
        self.state.borrow().is_just_pressed(id)
    }

    pub fn is_just_released(&self, id: impl AsRef<str>) -> bool {
        self.state.borrow().is_just_released(id)
    }

    pub fn is_mouse_held(&self, button: impl AsRef<str>) -> bool {
        self.state.borrow().is_mouse_held(button)
    }

    pub fn is_mouse_just_pressed(&self, button: impl AsRef<str>) -> bool {
        self.state.borrow().is_mouse_just_pressed(button)
    }

    pub fn is_mouse_just_released(&self, button: impl AsRef<str>) -> bool {
        self.state.borrow().is_mouse_just_released(button)
    }

    pub fn pointer_position(&self) -> DVec2 {
        self.state.borrow().pointer_position()
    }

    /// True if the latest pointer position lies within the host's current
    /// bounds.
    pub fn is_pointer_over_host(&self) -> bool {
        self.host
            .bounding_rect()
            .contains_local(self.pointer_position())
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.state.borrow().snapshot()
    }
}

impl Drop for AttachedInput {
    fn drop(&mut self) {
        log::debug!("Input tracker detached");
    }
}
