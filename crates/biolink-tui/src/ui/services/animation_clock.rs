/// Frame counter behind spinners and blinking glyphs.
/// Advanced once per UI tick (~50ms).
pub struct AnimationClock {
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Spinner character for loading placeholders
    pub fn spinner_char(&self) -> char {
        const SPINNERS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        // Every 2 frames = ~100ms at 20fps
        SPINNERS[(self.frame_counter / 2) as usize % SPINNERS.len()]
    }

    /// Typewriter cursor blink: 10 frames on, 10 off (~1s cycle)
    pub fn cursor_visible(&self) -> bool {
        self.frame_counter % 20 < 10
    }

    /// Slow pulse for the entry screen hint (~2.4s cycle)
    pub fn hint_visible(&self) -> bool {
        self.frame_counter % 48 < 32
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
