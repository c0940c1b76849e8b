//! Per-frame timing and display scale

/// Smallest time step handed to ImGui, which asserts on zero
pub(crate) const MIN_DELTA_TIME: f32 = 1.0e-5;

/// Time step from GLFW's clock, in seconds
///
/// The very first frame has no previous time, so ImGui keeps its own default.
#[derive(Debug, Default)]
pub(crate) struct FrameClock {
    previous: f64,
}

impl FrameClock {
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let delta = (self.previous > 0.0).then(|| ((now - self.previous) as f32).max(MIN_DELTA_TIME));
        self.previous = now;
        delta
    }
}

/// Framebuffer pixels per screen coordinate on each axis
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
    fn first_tick_has_no_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1.5), None);
        assert_eq!(clock.tick(1.75), Some(0.25));
    }

    #[test]
    fn delta_is_never_zero() {
        let mut clock = FrameClock::default();
        clock.tick(2.0);
        assert_eq!(clock.tick(2.0), Some(MIN_DELTA_TIME));
    }

    #[test]
    fn scale_on_hidpi_and_minimized() {
        assert_eq!(framebuffer_scale([1280.0, 720.0], [2560.0, 1440.0]), [2.0, 2.0]);
        assert_eq!(framebuffer_scale([0.0, 720.0], [0.0, 720.0]), [1.0, 1.0]);
    }
}
