//! Caller-owned input state, polled once per frame.

use crate::{camera::OrbitCamera, clock::SimClock};

/// Snapshot of the keys the demos react to (true = held this frame).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub pause: bool,
    pub quit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Paused,
    Resumed,
    /// Quit key held; the rest of the frame's input is ignored.
    Quit,
}

/// Edge detector for the pause key.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pause_was_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steer the camera and toggle the clock once per pause press.
    /// Holding the pause key does nothing after the first frame.
    pub fn update(
        &mut self,
        keys: &CameraKeys,
        camera: &mut OrbitCamera,
        clock: &mut SimClock,
    ) -> Option<InputEvent> {
        if keys.quit {
            return Some(InputEvent::Quit);
        }
        camera.apply_input(keys);

        let pressed = keys.pause && !self.pause_was_down;
        self.pause_was_down = keys.pause;
        if !pressed {
            return None;
        }
        Some(if clock.toggle_pause() {
            InputEvent::Paused
        } else {
            InputEvent::Resumed
        })
    }
}
