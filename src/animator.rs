use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::anim::{Ease, Repeat, Tween};
use crate::color::Color;
use crate::scene::SceneContext;

/// One full turn on x and y over six seconds, restarting forever.
pub const SPIN_DURATION: f32 = 6.0;
/// Material color oscillates to its target and back over two seconds each way.
pub const COLOR_CYCLE_DURATION: f32 = 2.0;
/// Background sits halfway between black and the current material color.
pub const BACKGROUND_BLEND: f32 = 0.5;

/// Owns the two animation drivers and applies their sampled values to the
/// scene. The tweens themselves are side-effect free; this is the single
/// place that decides what a sample mutates.
#[derive(Debug, Clone)]
pub struct SceneAnimator {
    spin: Tween<Vec3>,
    color_cycle: Tween<Color>,
}

impl SceneAnimator {
    /// Color target channels are drawn from [0, 1) once; every yoyo bounce
    /// oscillates toward and away from that same target.
    pub fn new(base_color: Color, rng: &mut impl Rng) -> Self {
        let target = Color::new(rng.gen(), rng.gen(), rng.gen());
        Self::with_color_target(base_color, target)
    }

    pub fn with_color_target(base_color: Color, target: Color) -> Self {
        let spin = Tween::new(Vec3::ZERO, Vec3::new(TAU, TAU, 0.0), SPIN_DURATION)
            .ease(Ease::PowerInOut)
            .repeat(Repeat::Infinite);

        let color_cycle = Tween::new(base_color, target, COLOR_CYCLE_DURATION)
            .ease(Ease::SineInOut)
            .repeat(Repeat::Infinite)
            .yoyo(true);

        Self { spin, color_cycle }
    }

    /// Write the state both drivers dictate at `time` into the scene:
    /// mesh rotation, material color, and the derived background blend.
    pub fn apply(&self, scene: &mut SceneContext, time: f32) {
        scene.mesh.rotation = self.spin.sample(time);

        let color = self.color_cycle.sample(time);
        scene.mesh.material.color = color;
        scene.background = Color::BLACK.lerp(color, BACKGROUND_BLEND);
    }

    pub fn spin(&self) -> &Tween<Vec3> {
        &self.spin
    }

    pub fn color_cycle(&self) -> &Tween<Color> {
        &self.color_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> SceneAnimator {
        SceneAnimator::with_color_target(
            Color::from_hex(0xff7b00),
            Color::new(0.3, 0.7, 0.9),
        )
    }

    #[test]
    fn test_apply_at_zero_matches_initial_state() {
        let mut scene = SceneContext::new(800, 600);
        animator().apply(&mut scene, 0.0);

        assert_eq!(scene.mesh.rotation, Vec3::ZERO);
        let c = scene.mesh.material.color;
        assert!((c.r - 1.0).abs() < 1e-5);
        assert!((c.g - 123.0 / 255.0).abs() < 1e-5);
        assert!(c.b.abs() < 1e-5);
    }

    #[test]
    fn test_background_is_half_material_color() {
        let mut scene = SceneContext::new(800, 600);
        let animator = animator();

        for i in 0..100 {
            animator.apply(&mut scene, i as f32 * 0.37);
            let material = scene.mesh.material.color;
            let bg = scene.background;
            assert!((bg.r - material.r * BACKGROUND_BLEND).abs() < 1e-6);
            assert!((bg.g - material.g * BACKGROUND_BLEND).abs() < 1e-6);
            assert!((bg.b - material.b * BACKGROUND_BLEND).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rotation_reaches_full_turn_mid_cycle() {
        let mut scene = SceneContext::new(800, 600);
        animator().apply(&mut scene, SPIN_DURATION / 2.0);
        assert!((scene.mesh.rotation.x - TAU / 2.0).abs() < 1e-4);
        assert!((scene.mesh.rotation.y - TAU / 2.0).abs() < 1e-4);
        assert_eq!(scene.mesh.rotation.z, 0.0);
    }

    #[test]
    fn test_random_target_stays_in_unit_cube() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let animator = SceneAnimator::new(Color::BLACK, &mut rng);
            let target = animator.color_cycle().end_value();
            for channel in target.to_array() {
                assert!((0.0..1.0).contains(&channel));
            }
        }
    }
}
