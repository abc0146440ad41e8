//! Post-process from shaded radiance to display-ready color.
//!
//! Each channel goes through, in order: a linear adjust, a clamp to
//! `[0, 1]`, gamma `1/2.2`, and a smoothstep contrast curve.

use crate::scene::Color;
use crate::util::math;

pub const LINEAR_GAIN: f32 = 1.1;
pub const LINEAR_OFFSET: f32 = 0.02;
pub const GAMMA_EXPONENT: f32 = 1.0 / 2.2;

#[inline]
pub fn linear_adjust(c: f32) -> f32 {
    c * LINEAR_GAIN - LINEAR_OFFSET
}

#[inline]
pub fn gamma(c: f32) -> f32 {
    c.powf(GAMMA_EXPONENT)
}

#[inline]
pub fn contrast(c: f32) -> f32 {
    c * c * (3.0 - 2.0 * c)
}

pub fn tone_map_channel(c: f32) -> f32 {
    contrast(gamma(math::clamp(linear_adjust(c), 0.0, 1.0)))
}

pub fn tone_map(color: Color) -> Color {
    math::map_channels(color, tone_map_channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_red_is_clamped_before_gamma() {
        let adjusted = linear_adjust(1.0);
        assert!(adjusted > 1.0);
        assert_eq!(math::clamp(adjusted, 0.0, 1.0), 1.0);
        assert_eq!(tone_map_channel(1.0), 1.0);
    }

    #[test]
    fn black_and_white_are_fixed_points() {
        assert_eq!(tone_map(Color::ZERO), Color::ZERO);
        assert_eq!(tone_map(Color::ONE), Color::ONE);
    }

    #[test]
    fn small_values_are_crushed_to_black() {
        assert_eq!(tone_map_channel(0.01), 0.0);
        assert_eq!(tone_map_channel(-3.0), 0.0);
    }

    #[test]
    fn mid_grey_follows_the_curve() {
        let c = 0.5;
        let expected = {
            let g = (0.5f32 * 1.1 - 0.02).powf(1.0 / 2.2);
            g * g * (3.0 - 2.0 * g)
        };
        assert_relative_eq!(tone_map_channel(c), expected, epsilon = 1e-6);
    }

    #[test]
    fn curve_is_monotonic_on_unit_interval() {
        let mut previous = tone_map_channel(0.0);
        for i in 1..=100 {
            let value = tone_map_channel(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn channels_are_independent() {
        let mapped = tone_map(Color::new(2.0, 0.0, 0.5));
        assert_eq!(mapped.x, 1.0);
        assert_eq!(mapped.y, 0.0);
        assert_relative_eq!(mapped.z, tone_map_channel(0.5));
    }
}
