/// Simulation time that only advances while not paused.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimClock {
    time: f32,
    paused: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame of real time. Negative or non-finite `dt` is ignored.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.paused && dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.time
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}
