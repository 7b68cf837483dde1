pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Cubic ease-out: fast start, decelerating into 1.0.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: u32,
    pub finished: bool,
}

/// Interpolation state of a single counter, driven by frame timestamps in
/// milliseconds. The first timestamp seen becomes the start.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    end: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    value: u32,
}

impl CounterAnimation {
    pub fn new(end: u32, duration_ms: u32) -> Self {
        Self {
            end,
            duration_ms: f64::from(duration_ms),
            started_at: None,
            value: 0,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        match self.started_at {
            None => 0.0,
            Some(_) if self.duration_ms <= 0.0 => 1.0,
            Some(start) => ((now - start) / self.duration_ms).clamp(0.0, 1.0),
        }
    }

    pub fn step(&mut self, now: f64) -> Frame {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        let progress = self.progress(now);

        let eased = (ease_out_cubic(progress) * f64::from(self.end)).floor() as u32;
        // Timestamps can arrive out of order; the display never goes backwards.
        self.value = self.value.max(eased.min(self.end));

        Frame {
            value: self.value,
            finished: progress >= 1.0,
        }
    }
}
