use raylib::prelude::*;

/// Keys the viewer reacts to, decoupled from the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Backspace,
}

impl Key {
    const ALL: [(KeyboardKey, Key); 6] = [
        (KeyboardKey::KEY_ESCAPE, Key::Escape),
        (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
        (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        (KeyboardKey::KEY_ENTER, Key::Enter),
        (KeyboardKey::KEY_KP_ENTER, Key::Enter),
        (KeyboardKey::KEY_BACKSPACE, Key::Backspace),
    ];
}

/// Everything that happened since the previous frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub keys: Vec<Key>,
    pub typed: Vec<char>,
    pub mouse: Vector2,
    pub pressed: bool,
    pub released: bool,
    pub wheel: f32,
}

impl FrameInput {
    pub fn poll(rl: &mut RaylibHandle) -> Self {
        let keys = Key::ALL
            .iter()
            .filter(|(raw, _)| rl.is_key_pressed(*raw))
            .map(|(_, key)| *key)
            .collect();

        let mut typed = Vec::new();
        while let Some(c) = rl.get_char_pressed() {
            if !c.is_control() {
                typed.push(c);
            }
        }

        Self {
            keys,
            typed,
            mouse: rl.get_mouse_position(),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            wheel: rl.get_mouse_wheel_move(),
        }
    }
}
