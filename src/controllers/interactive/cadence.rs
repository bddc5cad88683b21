use std::time::Duration;

const FALLBACK_FRAME_RATE_HZ: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceTick {
    pub should_render: bool,
    pub dropped: u32,
}

/// Fixed-rate frame clock. At most one frame is due per call; ticks that
/// piled up behind a slow frame are dropped, not replayed.
#[derive(Debug, Clone)]
pub struct FrameCadence {
    interval: Duration,
    accumulator: Duration,
}

impl FrameCadence {
    #[must_use]
    pub fn new(frame_rate_hz: f64) -> Self {
        let hz = if frame_rate_hz.is_finite() && frame_rate_hz > 0.0 {
            frame_rate_hz
        } else {
            FALLBACK_FRAME_RATE_HZ
        };

        Self {
            interval: Duration::from_secs_f64(1.0 / hz).max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn advance(&mut self, elapsed: Duration) -> CadenceTick {
        self.accumulator = self.accumulator.saturating_add(elapsed);

        let ticks_available = self.accumulator.as_nanos() / self.interval.as_nanos();
        if ticks_available == 0 {
            return CadenceTick {
                should_render: false,
                dropped: 0,
            };
        }

        let remainder = self.accumulator.as_nanos() % self.interval.as_nanos();
        // remainder < interval, which itself fits in a Duration
        self.accumulator = Duration::from_nanos(remainder as u64);

        CadenceTick {
            should_render: true,
            dropped: u32::try_from(ticks_available - 1).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn time_until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FrameCadence {
    fn default() -> Self {
        Self::new(FALLBACK_FRAME_RATE_HZ)
    }
}
