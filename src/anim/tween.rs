use glam::Vec3;

use super::ease::Ease;

/// Values a tween can interpolate between.
pub trait Interpolate: Copy {
    fn lerp(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolate for Vec3 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// Repeat policy after the first cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

/// A continuously varying value over time: start/end values, a duration,
/// an easing curve, a repeat policy, and an optional yoyo reverse phase.
///
/// Sampling is a pure function of elapsed time; the tween holds no
/// playhead, so the owner decides what side effects follow a sample.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Interpolate> {
    start: T,
    end: T,
    duration: f32,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            ease: Ease::Linear,
            repeat: Repeat::Count(1),
            yoyo: false,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn start_value(&self) -> T {
        self.start
    }

    pub fn end_value(&self) -> T {
        self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Value at `time` seconds after the tween started. Times before zero
    /// clamp to the start; times past a finite repeat count rest on the
    /// final value.
    pub fn sample(&self, time: f32) -> T {
        T::lerp(self.start, self.end, self.ease.apply(self.fraction_at(time)))
    }

    /// True once a finite tween has played out all cycles.
    pub fn is_finished(&self, time: f32) -> bool {
        match self.repeat {
            Repeat::Count(n) => time >= n as f32 * self.duration,
            Repeat::Infinite => false,
        }
    }

    fn fraction_at(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let time = time.max(0.0);
        let cycle = (time / self.duration).floor();

        if let Repeat::Count(n) = self.repeat {
            if cycle >= n as f32 {
                // Rest on the value the last cycle ended at.
                return if self.yoyo && n % 2 == 0 { 0.0 } else { 1.0 };
            }
        }

        let mut fraction = (time - cycle * self.duration) / self.duration;
        if self.yoyo && (cycle as u64) % 2 == 1 {
            fraction = 1.0 - fraction;
        }
        fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_linear_sample() {
        let tween = Tween::new(0.0f32, 10.0, 2.0);
        assert!((tween.sample(0.0) - 0.0).abs() < EPSILON);
        assert!((tween.sample(1.0) - 5.0).abs() < EPSILON);
        assert!((tween.sample(2.0) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_accessors() {
        let tween = Tween::new(1.0f32, 3.0, 2.5);
        assert_eq!(tween.start_value(), 1.0);
        assert_eq!(tween.end_value(), 3.0);
        assert_eq!(tween.duration(), 2.5);
    }

    #[test]
    fn test_negative_time_clamps_to_start() {
        let tween = Tween::new(2.0f32, 4.0, 1.0);
        assert!((tween.sample(-5.0) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_finite_tween_rests_on_end() {
        let tween = Tween::new(0.0f32, 1.0, 1.0);
        assert!((tween.sample(1.5) - 1.0).abs() < EPSILON);
        assert!((tween.sample(100.0) - 1.0).abs() < EPSILON);
        assert!(tween.is_finished(1.0));
        assert!(!tween.is_finished(0.5));
    }

    #[test]
    fn test_finite_yoyo_rests_on_start_after_even_cycles() {
        let tween = Tween::new(0.0f32, 1.0, 1.0).repeat(Repeat::Count(2)).yoyo(true);
        // Cycle 0 forward, cycle 1 reversed: ends back at the start value.
        assert!((tween.sample(2.5) - 0.0).abs() < EPSILON);

        let odd = Tween::new(0.0f32, 1.0, 1.0).repeat(Repeat::Count(3)).yoyo(true);
        assert!((odd.sample(3.5) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_infinite_repeat_restarts_each_cycle() {
        let tween = Tween::new(0.0f32, 1.0, 2.0).repeat(Repeat::Infinite);
        assert!((tween.sample(1.9) - 0.95).abs() < EPSILON);
        assert!((tween.sample(2.0) - 0.0).abs() < EPSILON);
        assert!((tween.sample(2.1) - 0.05).abs() < EPSILON);
        assert!(!tween.is_finished(1e9));
    }

    #[test]
    fn test_yoyo_reverses_on_odd_cycles() {
        let tween = Tween::new(0.0f32, 1.0, 1.0).repeat(Repeat::Infinite).yoyo(true);
        assert!((tween.sample(0.25) - 0.25).abs() < EPSILON);
        // Second cycle runs backwards instead of snapping to the start.
        assert!((tween.sample(1.25) - 0.75).abs() < EPSILON);
        assert!((tween.sample(1.75) - 0.25).abs() < EPSILON);
        // Third cycle runs forward again.
        assert!((tween.sample(2.25) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_yoyo_symmetry_around_pair_midpoint() {
        let tween = Tween::new(0.0f32, 1.0, 2.0)
            .repeat(Repeat::Infinite)
            .yoyo(true)
            .ease(Ease::SineInOut);
        for i in 0..=40 {
            let t = i as f32 / 40.0 * 2.0;
            let forward = tween.sample(t);
            let back = tween.sample(4.0 - t);
            assert!((forward - back).abs() < 1e-4, "t={}", t);
        }
    }

    #[test]
    fn test_zero_duration_yields_end() {
        let tween = Tween::new(0.0f32, 7.0, 0.0);
        assert!((tween.sample(0.0) - 7.0).abs() < EPSILON);
        assert!((tween.sample(3.0) - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_tween() {
        let tween = Tween::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), 2.0);
        let mid = tween.sample(1.0);
        assert!((mid - Vec3::new(1.0, 2.0, 3.0)).length() < EPSILON);
    }

    #[test]
    fn test_eased_sample_stays_between_endpoints() {
        let tween = Tween::new(0.25f32, 0.75, 1.0)
            .ease(Ease::PowerInOut)
            .repeat(Repeat::Infinite)
            .yoyo(true);
        for i in 0..=200 {
            let v = tween.sample(i as f32 * 0.05);
            assert!((0.25..=0.75).contains(&v), "escaped hull at sample {}", i);
        }
    }
}
