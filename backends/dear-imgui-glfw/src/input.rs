//! Keyboard and mouse translation from GLFW to Dear ImGui

use dear_imgui_rs::{Key, MouseButton};
use glfw::Key as GlfwKey;
use glfw::{Action, Modifiers};

pub const MOUSE_BUTTON_PRIMARY: usize = 0;
pub const MOUSE_BUTTON_SECONDARY: usize = 1;
pub const MOUSE_BUTTON_TERTIARY: usize = 2;
pub const MOUSE_BUTTON_COUNT: usize = 3;

/// ImGui button for each latch slot
pub(crate) const IMGUI_MOUSE_BUTTONS: [MouseButton; MOUSE_BUTTON_COUNT] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Latch slot for a GLFW mouse button, if it is one we track
pub(crate) fn mouse_button_slot(button: glfw::MouseButton) -> Option<usize> {
    match button {
        glfw::MouseButton::Button1 => Some(MOUSE_BUTTON_PRIMARY),
        glfw::MouseButton::Button2 => Some(MOUSE_BUTTON_SECONDARY),
        glfw::MouseButton::Button3 => Some(MOUSE_BUTTON_TERTIARY),
        _ => None,
    }
}

/// Remembers presses seen since the last frame
///
/// A click that starts and ends between two frames would be invisible to a
/// frame-time poll of the button state, so presses are latched here and
/// OR-ed into the polled state once.
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

    /// Combine with the live button state and clear the latch
    pub fn take(&mut self, live: [bool; MOUSE_BUTTON_COUNT]) -> [bool; MOUSE_BUTTON_COUNT] {
        let down = std::array::from_fn(|slot| self.pressed[slot] || live[slot]);
        self.pressed = [false; MOUSE_BUTTON_COUNT];
        down
    }
}

/// `ImGuiMod_*` key events for a GLFW modifier bit set
pub fn modifier_events(modifiers: Modifiers) -> [(Key, bool); 4] {
    [
        (Key::ModCtrl, modifiers.contains(Modifiers::Control)),
        (Key::ModShift, modifiers.contains(Modifiers::Shift)),
        (Key::ModAlt, modifiers.contains(Modifiers::Alt)),
        (Key::ModSuper, modifiers.contains(Modifiers::Super)),
    ]
}

/// Modifier bit a modifier key itself drives
fn own_modifier(key: GlfwKey) -> Option<Modifiers> {
    match key {
        GlfwKey::LeftControl | GlfwKey::RightControl => Some(Modifiers::Control),
        GlfwKey::LeftShift | GlfwKey::RightShift => Some(Modifiers::Shift),
        GlfwKey::LeftAlt | GlfwKey::RightAlt => Some(Modifiers::Alt),
        GlfwKey::LeftSuper | GlfwKey::RightSuper => Some(Modifiers::Super),
        _ => None,
    }
}

/// Everything Dear ImGui should see for one GLFW key event
///
/// On X11 the modifier bits describe the state before the event, so pressing
/// Ctrl arrives without the Control bit and releasing it arrives with it. A
/// modifier key's own bit is therefore taken from the action. Repeats only
/// refresh the modifiers.
pub fn key_events(key: GlfwKey, action: Action, mut modifiers: Modifiers) -> Vec<(Key, bool)> {
    if let Some(bit) = own_modifier(key) {
        match action {
            Action::Press => modifiers.insert(bit),
            Action::Release => modifiers.remove(bit),
            Action::Repeat => {}
        }
    }

    let mut events = modifier_events(modifiers).to_vec();
    let down = match action {
        Action::Press => true,
        Action::Release => false,
        Action::Repeat => return events,
    };
    if let Some(key) = glfw_key_to_imgui_key(key) {
        events.push((key, down));
    }
    events
}

/// Convert a GLFW key to a Dear ImGui key
///
/// Both non-US keys land on `Oem102`.
pub fn glfw_key_to_imgui_key(key: GlfwKey) -> Option<Key> {
    let key = match key {
        GlfwKey::Tab => Key::Tab,
        GlfwKey::Left => Key::LeftArrow,
        GlfwKey::Right => Key::RightArrow,
        GlfwKey::Up => Key::UpArrow,
        GlfwKey::Down => Key::DownArrow,
        GlfwKey::PageUp => Key::PageUp,
        GlfwKey::PageDown => Key::PageDown,
        GlfwKey::Home => Key::Home,
        GlfwKey::End => Key::End,
        GlfwKey::Insert => Key::Insert,
        GlfwKey::Delete => Key::Delete,
        GlfwKey::Backspace => Key::Backspace,
        GlfwKey::Space => Key::Space,
        GlfwKey::Enter => Key::Enter,
        GlfwKey::Escape => Key::Escape,

        GlfwKey::Apostrophe => Key::Apostrophe,
        GlfwKey::Comma => Key::Comma,
        GlfwKey::Minus => Key::Minus,
        GlfwKey::Period => Key::Period,
        GlfwKey::Slash => Key::Slash,
        GlfwKey::Semicolon => Key::Semicolon,
        GlfwKey::Equal => Key::Equal,
        GlfwKey::LeftBracket => Key::LeftBracket,
        GlfwKey::Backslash => Key::Backslash,
        GlfwKey::RightBracket => Key::RightBracket,
        GlfwKey::GraveAccent => Key::GraveAccent,
        GlfwKey::World1 | GlfwKey::World2 => Key::Oem102,

        GlfwKey::CapsLock => Key::CapsLock,
        GlfwKey::ScrollLock => Key::ScrollLock,
        GlfwKey::NumLock => Key::NumLock,
        GlfwKey::PrintScreen => Key::PrintScreen,
        GlfwKey::Pause => Key::Pause,

        GlfwKey::Num0 => Key::Key0,
        GlfwKey::Num1 => Key::Key1,
        GlfwKey::Num2 => Key::Key2,
        GlfwKey::Num3 => Key::Key3,
        GlfwKey::Num4 => Key::Key4,
        GlfwKey::Num5 => Key::Key5,
        GlfwKey::Num6 => Key::Key6,
        GlfwKey::Num7 => Key::Key7,
        GlfwKey::Num8 => Key::Key8,
        GlfwKey::Num9 => Key::Key9,
        GlfwKey::Kp0 => Key::Keypad0,
        GlfwKey::Kp1 => Key::Keypad1,
        GlfwKey::Kp2 => Key::Keypad2,
        GlfwKey::Kp3 => Key::Keypad3,
        GlfwKey::Kp4 => Key::Keypad4,
        GlfwKey::Kp5 => Key::Keypad5,
        GlfwKey::Kp6 => Key::Keypad6,
        GlfwKey::Kp7 => Key::Keypad7,
        GlfwKey::Kp8 => Key::Keypad8,
        GlfwKey::Kp9 => Key::Keypad9,
        GlfwKey::KpDecimal => Key::KeypadDecimal,
        GlfwKey::KpDivide => Key::KeypadDivide,
        GlfwKey::KpMultiply => Key::KeypadMultiply,
        GlfwKey::KpSubtract => Key::KeypadSubtract,
        GlfwKey::KpAdd => Key::KeypadAdd,
        GlfwKey::KpEnter => Key::KeypadEnter,
        GlfwKey::KpEqual => Key::KeypadEqual,

        GlfwKey::LeftShift => Key::LeftShift,
        GlfwKey::LeftControl => Key::LeftCtrl,
        GlfwKey::LeftAlt => Key::LeftAlt,
        GlfwKey::LeftSuper => Key::LeftSuper,
        GlfwKey::RightShift => Key::RightShift,
        GlfwKey::RightControl => Key::RightCtrl,
        GlfwKey::RightAlt => Key::RightAlt,
        GlfwKey::RightSuper => Key::RightSuper,
        GlfwKey::Menu => Key::Menu,

        GlfwKey::A => Key::A,
        GlfwKey::B => Key::B,
        GlfwKey::C => Key::C,
        GlfwKey::D => Key::D,
        GlfwKey::E => Key::E,
        GlfwKey::F => Key::F,
        GlfwKey::G => Key::G,
        GlfwKey::H => Key::H,
        GlfwKey::I => Key::I,
        GlfwKey::J => Key::J,
        GlfwKey::K => Key::K,
        GlfwKey::L => Key::L,
        GlfwKey::M => Key::M,
        GlfwKey::N => Key::N,
        GlfwKey::O => Key::O,
        GlfwKey::P => Key::P,
        GlfwKey::Q => Key::Q,
        GlfwKey::R => Key::R,
        GlfwKey::S => Key::S,
        GlfwKey::T => Key::T,
        GlfwKey::U => Key::U,
        GlfwKey::V => Key::V,
        GlfwKey::W => Key::W,
        GlfwKey::X => Key::X,
        GlfwKey::Y => Key::Y,
        GlfwKey::Z => Key::Z,

        GlfwKey::F1 => Key::F1,
        GlfwKey::F2 => Key::F2,
        GlfwKey::F3 => Key::F3,
        GlfwKey::F4 => Key::F4,
        GlfwKey::F5 => Key::F5,
        GlfwKey::F6 => Key::F6,
        GlfwKey::F7 => Key::F7,
        GlfwKey::F8 => Key::F8,
        GlfwKey::F9 => Key::F9,
        GlfwKey::F10 => Key::F10,
        GlfwKey::F11 => Key::F11,
        GlfwKey::F12 => Key::F12,

        _ => return None,
    };
    Some(key)
}
