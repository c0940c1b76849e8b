//! Per-frame timing and display scale

/// Smallest time step handed to ImGui, which asserts on zero
pub(crate) const MIN_DELTA_TIME: f32 = 1.0e-5;

/// Step used before a previous counter value exists
pub(crate) const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Time step from SDL's performance counter
#[derive(Debug, Default)]
pub(crate) struct FrameClock {
    previous: u64,
}

impl FrameClock {
    pub fn tick(&mut self, counter: u64, frequency: u64) -> f32 {
        let delta = if self.previous > 0 && frequency > 0 {
            (counter.saturating_sub(self.previous) as f64 / frequency as f64) as f32
        } else {
            FIRST_FRAME_DELTA
        };
        self.previous = counter;
        delta.max(MIN_DELTA_TIME)
    }
}

/// Drawable pixels per window coordinate on each axis
pub(crate) fn framebuffer_scale(display_size: [f32; 2], framebuffer_size: [f32; 2]) -> [f32; 2] {
    std::array::from_fn(|axis| {
        if display_size[axis] > 0.0 {
            framebuffer_size[axis] / display_size[axis]
        } else {
            1.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_sixtieth() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(5_000, 1_000), FIRST_FRAME_DELTA);
        assert_eq!(clock.tick(5_500, 1_000), 0.5);
    }

    #[test]
    fn stalled_counter_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(10, 1_000);
        assert_eq!(clock.tick(10, 1_000), MIN_DELTA_TIME);
    }

    #[test]
    fn retina_scale() {
        assert_eq!(framebuffer_scale([640.0, 480.0], [1280.0, 960.0]), [2.0, 2.0]);
        assert_eq!(framebuffer_scale([640.0, 0.0], [640.0, 0.0]), [1.0, 1.0]);
    }
}
