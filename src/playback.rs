use crate::step::Step;

/// Cursor over a generated step sequence.
///
/// Holds the only mutable state in the system: the current index and the
/// playing flag. The steps themselves stay frozen, so the cursor can seek
/// anywhere at any time. Timer scheduling lives with the caller; `tick` is
/// the pure transition it drives.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    current: usize,
    playing: bool,
}

impl Playback {
    pub fn new(steps: Vec<Step>) -> Self {
        Playback {
            steps,
            current: 0,
            playing: false,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advances one step; reports whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Retreats one step; reports whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`, clamped to the valid range.
    pub fn seek(&mut self, index: usize) {
        self.current = index.min(self.steps.len().saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    /// One play-timer transition: advance while playing, pausing once the
    /// last step is reached. Reports whether the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.next();
        if self.current + 1 >= self.steps.len() {
            self.playing = false;
        }
        moved
    }
}
