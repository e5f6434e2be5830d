//! winit -> [`InputEvent`] translation.
//!
//! Keys are forwarded as the raw logical key string (W3C `KeyboardEvent.key`
//! naming, which winit's `NamedKey` follows); normalization into identifiers
//! happens in `framekeys_core`. Buttons use DOM button indices.

use framekeys_core::InputEvent;
use glam::DVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Raw key string for a logical key. Unrecognized keys still produce a
/// string so they can be tracked as opaque identifiers.
pub fn key_name(key: &Key) -> String {
    match key {
        Key::Character(text) => text.to_string(),
        Key::Named(named) => named_key_value(*named),
        Key::Dead(_) => "Dead".to_string(),
        Key::Unidentified(_) => "Unidentified".to_string(),
    }
}

/// W3C key value for a named key. Keys with a named identifier constant are
/// spelled out; anything else falls back to the variant name, which matches
/// the W3C value for most keys.
fn named_key_value(named: NamedKey) -> String {
    let value = match named {
        NamedKey::Space => " ",
        NamedKey::Tab => "Tab",
        NamedKey::Enter => "Enter",
        NamedKey::Shift => "Shift",
        NamedKey::Control => "Control",
        NamedKey::Alt => "Alt",
        NamedKey::Super => "Meta",
        NamedKey::Escape => "Escape",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowRight => "ArrowRight",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        other => return format!("{other:?}"),
    };
    value.to_string()
}

pub fn button_index(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(index) => index,
    }
}

pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let raw = key_name(&event.logical_key);
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown(raw),
                ElementState::Released => InputEvent::KeyUp(raw),
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let index = button_index(*button);
            Some(match state {
                ElementState::Pressed => InputEvent::PointerDown(index),
                ElementState::Released => InputEvent::PointerUp(index),
            })
        }
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::PointerMove(DVec2::new(position.x, position.y)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framekeys_core::{key_identifier, Key as NamedIdentifier};
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;
    use winit::keyboard::{NativeKey, SmolStr};

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag in event values that never reach
        // a real event loop.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn character_keys_pass_through_raw() {
        let key = Key::Character(SmolStr::new("a"));
        assert_eq!(key_name(&key), "a");
    }

    #[test]
    fn space_maps_to_literal_space() {
        let name = key_name(&Key::Named(NamedKey::Space));
        assert_eq!(key_identifier(&name), NamedIdentifier::Space.name());
    }

    #[test]
    fn named_keys_normalize_to_key_table() {
        let cases = [
            (NamedKey::ArrowLeft, NamedIdentifier::ArrowLeft),
            (NamedKey::ArrowUp, NamedIdentifier::ArrowUp),
            (NamedKey::ArrowRight, NamedIdentifier::ArrowRight),
            (NamedKey::ArrowDown, NamedIdentifier::ArrowDown),
            (NamedKey::Control, NamedIdentifier::Control),
            (NamedKey::Shift, NamedIdentifier::Shift),
            (NamedKey::Enter, NamedIdentifier::Enter),
            (NamedKey::Tab, NamedIdentifier::Tab),
            (NamedKey::Escape, NamedIdentifier::Escape),
            (NamedKey::Alt, NamedIdentifier::Alt),
        ];
        for (named, expected) in cases {
            let raw = key_name(&Key::Named(named));
            assert_eq!(key_identifier(&raw), expected.name(), "{named:?}");
        }
    }

    #[test]
    fn super_key_uses_w3c_meta_value() {
        assert_eq!(key_name(&Key::Named(NamedKey::Super)), "Meta");
        assert_eq!(key_identifier(&key_name(&Key::Named(NamedKey::Super))), "META");
    }

    #[test]
    fn keys_outside_the_table_still_get_a_name() {
        assert_eq!(key_name(&Key::Named(NamedKey::F5)), "F5");
    }

    #[test]
    fn unidentified_keys_are_still_tracked() {
        let unidentified = Key::Unidentified(NativeKey::Unidentified);
        assert_eq!(key_name(&unidentified), "Unidentified");
        assert_eq!(key_name(&Key::Dead(None)), "Dead");
    }

    #[test]
    fn button_indices_follow_dom_convention() {
        assert_eq!(button_index(MouseButton::Left), 0);
        assert_eq!(button_index(MouseButton::Middle), 1);
        assert_eq!(button_index(MouseButton::Right), 2);
        assert_eq!(button_index(MouseButton::Back), 3);
        assert_eq!(button_index(MouseButton::Forward), 4);
        assert_eq!(button_index(MouseButton::Other(9)), 9);
    }

    #[test]
    fn mouse_input_translates_to_pointer_events() {
        let down = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        };
        let up = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Released,
            button: MouseButton::Right,
        };
        assert_eq!(translate_window_event(&down), Some(InputEvent::PointerDown(2)));
        assert_eq!(translate_window_event(&up), Some(InputEvent::PointerUp(2)));
    }

    #[test]
    fn cursor_moved_translates_to_pointer_move() {
        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.5, 40.0),
        };
        assert_eq!(
            translate_window_event(&moved),
            Some(InputEvent::PointerMove(DVec2::new(12.5, 40.0)))
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(translate_window_event(&WindowEvent::CloseRequested), None);
    }
}
