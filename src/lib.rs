pub mod anim;
pub mod animator;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod color;
pub mod geometry;
pub mod orbit;
pub mod renderer;
pub mod scene;

pub use animator::SceneAnimator;
pub use camera::Camera;
pub use clock::Clock;
pub use color::Color;
pub use orbit::OrbitControls;
pub use renderer::Renderer;
pub use scene::SceneContext;
