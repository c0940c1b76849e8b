//! Keyboard and mouse translation from SDL2 to Dear ImGui

use dear_imgui_rs::{Key, MouseButton};
use sdl2::keyboard::{Keycode, Mod, Scancode};

pub const MOUSE_BUTTON_PRIMARY: usize = 0;
pub const MOUSE_BUTTON_SECONDARY: usize = 1;
pub const MOUSE_BUTTON_TERTIARY: usize = 2;
pub const MOUSE_BUTTON_COUNT: usize = 3;

pub(crate) const IMGUI_MOUSE_BUTTONS: [MouseButton; MOUSE_BUTTON_COUNT] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

pub(crate) fn mouse_button_slot(button: sdl2::mouse::MouseButton) -> Option<usize> {
    match button {
        sdl2::mouse::MouseButton::Left => Some(MOUSE_BUTTON_PRIMARY),
        sdl2::mouse::MouseButton::Right => Some(MOUSE_BUTTON_SECONDARY),
        sdl2::mouse::MouseButton::Middle => Some(MOUSE_BUTTON_TERTIARY),
        _ => None,
    }
}

/// Presses seen since the last frame, OR-ed into the polled state once
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MouseLatch {
    pressed: [bool; MOUSE_BUTTON_COUNT],
}

impl MouseLatch {
    pub fn press(&mut self, slot: usize) {
        if let Some(pressed) = self.pressed.get_mut(slot) {
            *pressed = true;
        }
    }

    pub fn take(&mut self, live: [bool; MOUSE_BUTTON_COUNT]) -> [bool; MOUSE_BUTTON_COUNT] {
        let down = std::array::from_fn(|slot| self.pressed[slot] || live[slot]);
        self.pressed = [false; MOUSE_BUTTON_COUNT];
        down
    }
}

/// Collapse a wheel delta to -1, 0 or +1
///
/// SDL2 reports whole ticks whose size varies between platforms; ImGui
/// scrolls a fixed amount per unit.
pub fn normalize_wheel(delta: i32) -> f32 {
    delta.signum() as f32
}

/// `ImGuiMod_*` key events for the modifier state in `keymod`
///
/// Either side held counts as the modifier being down.
pub fn modifier_events(keymod: Mod) -> [(Key, bool); 4] {
    [
        (Key::ModCtrl, keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD)),
        (Key::ModShift, keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD)),
        (Key::ModAlt, keymod.intersects(Mod::LALTMOD | Mod::RALTMOD)),
        (Key::ModSuper, keymod.intersects(Mod::LGUIMOD | Mod::RGUIMOD)),
    ]
}

/// Everything Dear ImGui should see for one SDL key event
///
/// SDL updates `keymod` before delivering the event, so a modifier key's own
/// bit is already current.
pub fn key_events(
    keycode: Option<Keycode>,
    scancode: Option<Scancode>,
    keymod: Mod,
    down: bool,
) -> Vec<(Key, bool)> {
    let mut events = modifier_events(keymod).to_vec();
    if let Some(key) = sdl2_key_to_imgui_key(keycode, scancode) {
        events.push((key, down));
    }
    events
}

/// Convert an SDL key to a Dear ImGui key
///
/// The keycode is tried first. Punctuation falls back to the scancode, which
/// names the physical key regardless of layout.
pub fn sdl2_key_to_imgui_key(keycode: Option<Keycode>, scancode: Option<Scancode>) -> Option<Key> {
    keycode
        .and_then(keycode_to_imgui_key)
        .or_else(|| scancode.and_then(scancode_to_imgui_key))
}

fn keycode_to_imgui_key(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Tab => Key::Tab,
        Keycode::Left => Key::LeftArrow,
        Keycode::Right => Key::RightArrow,
        Keycode::Up => Key::UpArrow,
        Keycode::Down => Key::DownArrow,
        Keycode::PageUp => Key::PageUp,
        Keycode::PageDown => Key::PageDown,
        Keycode::Home => Key::Home,
        Keycode::End => Key::End,
        Keycode::Insert => Key::Insert,
        Keycode::Delete => Key::Delete,
        Keycode::Backspace => Key::Backspace,
        Keycode::Space => Key::Space,
        Keycode::Return => Key::Enter,
        Keycode::Escape => Key::Escape,
        Keycode::Comma => Key::Comma,
        Keycode::Period => Key::Period,
        Keycode::Semicolon => Key::Semicolon,

        Keycode::CapsLock => Key::CapsLock,
        Keycode::ScrollLock => Key::ScrollLock,
        Keycode::NumLockClear => Key::NumLock,
        Keycode::PrintScreen => Key::PrintScreen,
        Keycode::Pause => Key::Pause,

        Keycode::Num0 => Key::Key0,
        Keycode::Num1 => Key::Key1,
        Keycode::Num2 => Key::Key2,
        Keycode::Num3 => Key::Key3,
        Keycode::Num4 => Key::Key4,
        Keycode::Num5 => Key::Key5,
        Keycode::Num6 => Key::Key6,
        Keycode::Num7 => Key::Key7,
        Keycode::Num8 => Key::Key8,
        Keycode::Num9 => Key::Key9,
        Keycode::Kp0 => Key::Keypad0,
        Keycode::Kp1 => Key::Keypad1,
        Keycode::Kp2 => Key::Keypad2,
        Keycode::Kp3 => Key::Keypad3,
        Keycode::Kp4 => Key::Keypad4,
        Keycode::Kp5 => Key::Keypad5,
        Keycode::Kp6 => Key::Keypad6,
        Keycode::Kp7 => Key::Keypad7,
        Keycode::Kp8 => Key::Keypad8,
        Keycode::Kp9 => Key::Keypad9,
        Keycode::KpPeriod => Key::KeypadDecimal,
        Keycode::KpDivide => Key::KeypadDivide,
        Keycode::KpMultiply => Key::KeypadMultiply,
        Keycode::KpMinus => Key::KeypadSubtract,
        Keycode::KpPlus => Key::KeypadAdd,
        Keycode::KpEnter => Key::KeypadEnter,
        Keycode::KpEquals => Key::KeypadEqual,

        Keycode::LCtrl => Key::LeftCtrl,
        Keycode::LShift => Key::LeftShift,
        Keycode::LAlt => Key::LeftAlt,
        Keycode::LGui => Key::LeftSuper,
        Keycode::RCtrl => Key::RightCtrl,
        Keycode::RShift => Key::RightShift,
        Keycode::RAlt => Key::RightAlt,
        Keycode::RGui => Key::RightSuper,
        Keycode::Application => Key::Menu,

        Keycode::A => Key::A,
        Keycode::B => Key::B,
        Keycode::C => Key::C,
        Keycode::D => Key::D,
        Keycode::E => Key::E,
        Keycode::F => Key::F,
        Keycode::G => Key::G,
        Keycode::H => Key::H,
        Keycode::I => Key::I,
        Keycode::J => Key::J,
        Keycode::K => Key::K,
        Keycode::L => Key::L,
        Keycode::M => Key::M,
        Keycode::N => Key::N,
        Keycode::O => Key::O,
        Keycode::P => Key::P,
        Keycode::Q => Key::Q,
        Keycode::R => Key::R,
        Keycode::S => Key::S,
        Keycode::T => Key::T,
        Keycode::U => Key::U,
        Keycode::V => Key::V,
        Keycode::W => Key::W,
        Keycode::X => Key::X,
        Keycode::Y => Key::Y,
        Keycode::Z => Key::Z,

        Keycode::F1 => Key::F1,
        Keycode::F2 => Key::F2,
        Keycode::F3 => Key::F3,
        Keycode::F4 => Key::F4,
        Keycode::F5 => Key::F5,
        Keycode::F6 => Key::F6,
        Keycode::F7 => Key::F7,
        Keycode::F8 => Key::F8,
        Keycode::F9 => Key::F9,
        Keycode::F10 => Key::F10,
        Keycode::F11 => Key::F11,
        Keycode::F12 => Key::F12,

        _ => return None,
    };
    Some(key)
}

fn scancode_to_imgui_key(scancode: Scancode) -> Option<Key> {
    let key = match scancode {
        Scancode::Grave => Key::GraveAccent,
        Scancode::Minus => Key::Minus,
        Scancode::Equals => Key::Equal,
        Scancode::LeftBracket => Key::LeftBracket,
        Scancode::RightBracket => Key::RightBracket,
        Scancode::Backslash => Key::Backslash,
        Scancode::NonUsBackslash => Key::Oem102,
        Scancode::Semicolon => Key::Semicolon,
        Scancode::Apostrophe => Key::Apostrophe,
        Scancode::Comma => Key::Comma,
        Scancode::Period => Key::Period,
        Scancode::Slash => Key::Slash,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keycode_mapping() {
        let cases = [
            (Keycode::Return, Some(Key::Enter)),
            (Keycode::KpEnter, Some(Key::KeypadEnter)),
            (Keycode::Kp3, Some(Key::Keypad3)),
            (Keycode::Num3, Some(Key::Key3)),
            (Keycode::Application, Some(Key::Menu)),
            (Keycode::LGui, Some(Key::LeftSuper)),
            (Keycode::NumLockClear, Some(Key::NumLock)),
            (Keycode::Z, Some(Key::Z)),
            (Keycode::F13, None),
        ];
        for (keycode, expected) in cases {
            assert_eq!(sdl2_key_to_imgui_key(Some(keycode), None), expected, "{keycode:?}");
        }
    }

    #[test]
    fn punctuation_follows_scancode() {
        // German layout: the key right of 0 produces `ß` but is still Minus.
        assert_eq!(
            sdl2_key_to_imgui_key(None, Some(Scancode::Minus)),
            Some(Key::Minus)
        );
        assert_eq!(
            sdl2_key_to_imgui_key(Some(Keycode::Quote), Some(Scancode::Apostrophe)),
            Some(Key::Apostrophe)
        );
        assert_eq!(
            sdl2_key_to_imgui_key(None, Some(Scancode::NonUsBackslash)),
            Some(Key::Oem102)
        );
        assert_eq!(
            sdl2_key_to_imgui_key(None, Some(Scancode::Backslash)),
            Some(Key::Backslash)
        );
        assert_eq!(
            sdl2_key_to_imgui_key(None, Some(Scancode::Grave)),
            Some(Key::GraveAccent)
        );
    }

    #[test]
    fn keycode_wins_over_scancode() {
        // AZERTY: the physical Q key types `a`.
        assert_eq!(
            sdl2_key_to_imgui_key(Some(Keycode::A), Some(Scancode::Q)),
            Some(Key::A)
        );
        assert_eq!(sdl2_key_to_imgui_key(None, None), None);
    }

    #[test]
    fn test_modifier_events() {
        let events = modifier_events(Mod::RSHIFTMOD | Mod::LGUIMOD);
        assert_eq!(
            events,
            [
                (Key::ModCtrl, false),
                (Key::ModShift, true),
                (Key::ModAlt, false),
                (Key::ModSuper, true),
            ]
        );
        // Lock state is not a modifier.
        assert!(modifier_events(Mod::CAPSMOD | Mod::NUMMOD).iter().all(|(_, down)| !down));
    }

    #[test]
    fn key_events_put_modifiers_before_the_key() {
        let events = key_events(Some(Keycode::C), Some(Scancode::C), Mod::LCTRLMOD, true);
        assert_eq!(
            events,
            vec![
                (Key::ModCtrl, true),
                (Key::ModShift, false),
                (Key::ModAlt, false),
                (Key::ModSuper, false),
                (Key::C, true),
            ]
        );

        let unmapped = key_events(Some(Keycode::F13), Some(Scancode::F13), Mod::NOMOD, true);
        assert_eq!(unmapped, modifier_events(Mod::NOMOD).to_vec());
    }

    mod imgui_state {
        use super::*;
        use dear_imgui_rs::{Context, Ui};
        use std::sync::{Mutex, MutexGuard, OnceLock};

        fn test_guard() -> MutexGuard<'static, ()> {
            static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
            GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
        }

        fn headless_context() -> Context {
            let mut ctx = Context::create();
            let _ = ctx.set_ini_filename::<std::path::PathBuf>(None);
            {
                let io = ctx.io_mut();
                io.set_display_size([1280.0, 720.0]);
                io.set_delta_time(1.0 / 60.0);
            }
            let _ = ctx.font_atlas_mut().build();
            ctx
        }

        /// Queue one SDL key event, run a frame and read back what ImGui saw
        fn frame_after<R>(
            ctx: &mut Context,
            keycode: Keycode,
            keymod: Mod,
            down: bool,
            read: impl FnOnce(&Ui) -> R,
        ) -> R {
            {
                let io = ctx.io_mut();
                for (key, key_down) in key_events(Some(keycode), None, keymod, down) {
                    io.add_key_event(key, key_down);
                }
            }
            let ui = ctx.frame();
            let seen = read(ui);
            let _ = ctx.render();
            seen
        }

        #[test]
        fn ctrl_reaches_imgui_and_clears_on_release() {
            let _guard = test_guard();
            let mut ctx = headless_context();

            let held = frame_after(&mut ctx, Keycode::RCtrl, Mod::RCTRLMOD, true, |ui| {
                (
                    ui.io().key_ctrl(),
                    ui.is_key_down(Key::RightCtrl),
                    ui.is_key_down(Key::LeftCtrl),
                )
            });
            assert_eq!(held, (true, true, false));

            let released = frame_after(&mut ctx, Keycode::RCtrl, Mod::NOMOD, false, |ui| {
                (ui.io().key_ctrl(), ui.is_key_down(Key::RightCtrl))
            });
            assert_eq!(released, (false, false));
        }

        #[test]
        fn repeated_key_down_keeps_state() {
            let _guard = test_guard();
            let mut ctx = headless_context();

            let first = frame_after(&mut ctx, Keycode::A, Mod::LSHIFTMOD, true, |ui| {
                (ui.io().key_shift(), ui.is_key_down(Key::A))
            });
            assert_eq!(first, (true, true));
            let repeat = frame_after(&mut ctx, Keycode::A, Mod::LSHIFTMOD, true, |ui| {
                (ui.io().key_shift(), ui.is_key_down(Key::A))
            });
            assert_eq!(repeat, (true, true));
        }
    }

    #[test]
    fn wheel_is_normalized_per_axis() {
        assert_eq!(normalize_wheel(3), 1.0);
        assert_eq!(normalize_wheel(-7), -1.0);
        assert_eq!(normalize_wheel(0), 0.0);
    }

    #[test]
    fn latch_and_slots() {
        assert_eq!(mouse_button_slot(sdl2::mouse::MouseButton::Middle), Some(2));
        assert_eq!(mouse_button_slot(sdl2::mouse::MouseButton::X1), None);

        let mut latch = MouseLatch::default();
        latch.press(MOUSE_BUTTON_SECONDARY);
        assert_eq!(latch.take([true, false, false]), [true, true, false]);
        assert_eq!(latch.take([false; 3]), [false; 3]);
    }
}
