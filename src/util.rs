pub mod math {
    use glam::Vec3;

    /// Returns `low` if `value` is below it, `high` if above, `value` otherwise.
    pub fn clamp(value: f32, low: f32, high: f32) -> f32 {
        if value < low {
            low
        } else if value > high {
            high
        } else {
            value
        }
    }

    /// Per-channel [`clamp`].
    pub fn clamp_color(color: Vec3, low: f32, high: f32) -> Vec3 {
        map_channels(color, |c| clamp(c, low, high))
    }

    #[inline]
    pub fn map_channels(v: Vec3, f: impl Fn(f32) -> f32) -> Vec3 {
        Vec3::new(f(v.x), f(v.y), f(v.z))
    }

    /// Mirror the unit direction `l` about the unit normal `n`, given their
    /// (possibly clamped) cosine: `2 * cos * n - l`.
    #[inline]
    pub fn reflect(l: Vec3, n: Vec3, cos: f32) -> Vec3 {
        2.0 * cos * n - l
    }

}
