//! Keyboard controls.
//!
//! | Key          | Action              |
//! |--------------|---------------------|
//! | Escape       | close the window    |
//! | Arrow keys   | pan                 |
//! | Left Alt     | zoom in             |
//! | Left Ctrl    | zoom out            |
//! | Page Up      | one more iteration  |
//! | Page Down    | one fewer iteration |

use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::view::{Direction, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Close,
    Pan(Direction),
    ZoomIn,
    ZoomOut,
    IncreaseIterations,
    DecreaseIterations,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    pub fn from_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::Escape => Some(Command::Close),
            VirtualKeyCode::Up => Some(Command::Pan(Direction::Up)),
            VirtualKeyCode::Down => Some(Command::Pan(Direction::Down)),
            VirtualKeyCode::Left => Some(Command::Pan(Direction::Left)),
            VirtualKeyCode::Right => Some(Command::Pan(Direction::Right)),
            VirtualKeyCode::LAlt => Some(Command::ZoomIn),
            VirtualKeyCode::LControl => Some(Command::ZoomOut),
            VirtualKeyCode::PageUp => Some(Command::IncreaseIterations),
            VirtualKeyCode::PageDown => Some(Command::DecreaseIterations),
            _ => None,
        }
    }

    /**
    Key presses and key repeats both arrive as [`ElementState::Pressed`];
    releases are ignored.
    */
    pub fn from_input(input: &KeyboardInput) -> Option<Self> {
        match input.state {
            ElementState::Pressed => input.virtual_keycode.and_then(Self::from_key),
            ElementState::Released => None,
        }
    }

    pub fn apply(self, view: &mut View, seconds: f32) -> Flow {
        match self {
            Command::Close => return Flow::Exit,
            Command::Pan(direction) => view.pan(direction, seconds),
            Command::ZoomIn => view.zoom_in(seconds),
            Command::ZoomOut => view.zoom_out(seconds),
            Command::IncreaseIterations => view.increase_iterations(),
            Command::DecreaseIterations => view.decrease_iterations(),
        }
        Flow::Continue
    }
}
