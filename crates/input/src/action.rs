use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Raw input sampled once per render frame.
///
/// The adapter consumes frames, never device events, so keyboard, gamepad and
/// scripted input all drive the character the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    /// Look delta: `x` turns right, `y` looks up.
    pub look: Vec2,
    /// Move axes: `x` strafes right, `y` moves forward.
    pub movement: Vec2,
    /// Jump pressed this frame.
    pub jump: bool,
}

impl InputFrame {
    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            ..Default::default()
        }
    }
}

/// Anything that can produce one [`InputFrame`] per frame.
pub trait InputSource {
    fn read(&mut self) -> InputFrame;
}

/// Replays a fixed list of frames, then repeats a tail frame forever.
///
/// The tail is idle input unless set with [`ScriptedInput::then_forever`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    tail: InputFrame,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    /// Append `count` copies of `frame`.
    pub fn hold(mut self, frame: InputFrame, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(frame, count));
        self
    }

    /// Append a single frame.
    pub fn then(mut self, frame: InputFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Report `frame` once the script runs out. Nothing is buffered.
    pub fn then_forever(mut self, frame: InputFrame) -> Self {
        self.tail = frame;
        self
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self) -> InputFrame {
        match self.frames.get(self.cursor) {
            Some(&frame) => {
                self.cursor += 1;
                frame
            }
            None => self.tail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_then_idles() {
        let jump = InputFrame {
            jump: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::default()
            .hold(InputFrame::moving(Vec2::Y), 2)
            .then(jump);
        assert_eq!(input.len(), 3);

        assert_eq!(input.read().movement, Vec2::Y);
        assert_eq!(input.read().movement, Vec2::Y);
        assert!(input.read().jump);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.read(), InputFrame::default());
    }

    #[test]
    fn tail_frame_repeats_without_buffering() {
        let forward = InputFrame::moving(Vec2::Y);
        let mut input = ScriptedInput::default()
            .then(InputFrame::default())
            .then_forever(forward);
        assert_eq!(input.len(), 1);

        assert_eq!(input.read(), InputFrame::default());
        for _ in 0..1000 {
            assert_eq!(input.read(), forward);
        }
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn frame_defaults_are_idle() {
        let frame = InputFrame::default();
        assert_eq!(frame.look, Vec2::ZERO);
        assert_eq!(frame.movement, Vec2::ZERO);
        assert!(!frame.jump);
    }
}
