//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard events into game key events.
//
//   Winit KeyEvent → translate_key() → InputEvent → bridge channel
//
// OS auto-repeat is dropped: a held key produces one press and one
// release. Keys without a game code (F-keys, numpad, media keys) are
// filtered out.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== Event Processing ====================================================

/// Converts a Winit key event, or `None` if the game does not see it.
pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    translate_key(key_event.physical_key, key_event.state, key_event.repeat)
}

fn translate_key(physical: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if repeat {
        return None;
    }

    let key = match physical {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => return None,
    };
    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps Winit codes onto the game code of the same name.
macro_rules! same_name {
    ($code:expr; $($name:ident),* $(,)?) => {
        match $code {
            $(WinitKeyCode::$name => KeyCode::$name,)*
            _ => KeyCode::Unidentified,
        }
    };
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        same_name!(code;
            Digit0, Digit1, Digit2, Digit3, Digit4,
            Digit5, Digit6, Digit7, Digit8, Digit9,
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
            KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
            KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
            Space, Enter, Escape, Tab, Backspace, Delete,
        )
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn code(code: WinitKeyCode) -> PhysicalKey {
        PhysicalKey::Code(code)
    }

    #[test]
    fn press_and_release_map_to_down_and_up() {
        assert_eq!(
            translate_key(code(WinitKeyCode::Enter), ElementState::Pressed, false),
            Some(InputEvent::KeyDown(KeyCode::Enter))
        );
        assert_eq!(
            translate_key(code(WinitKeyCode::KeyW), ElementState::Released, false),
            Some(InputEvent::KeyUp(KeyCode::KeyW))
        );
    }

    #[test]
    fn auto_repeat_is_dropped() {
        assert_eq!(
            translate_key(code(WinitKeyCode::ArrowDown), ElementState::Pressed, true),
            None
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(translate_key(code(WinitKeyCode::F13), ElementState::Pressed, false), None);
        assert_eq!(
            translate_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed,
                false
            ),
            None
        );
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Unidentified);
    }
}
