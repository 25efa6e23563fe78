use cgmath::{InnerSpace, Vector3};
use std::f32::consts::PI;

/// Parametric 3D curve sampled over `t` in `0.0..=1.0`
pub trait Curve {
    fn point(&self, t: f32) -> Vector3<f32>;

    /// Unit tangent, estimated by central difference
    fn tangent(&self, t: f32) -> Vector3<f32> {
        const DELTA: f32 = 1e-4;
        let t1 = (t - DELTA).max(0.0);
        let t2 = (t + DELTA).min(1.0);
        (self.point(t2) - self.point(t1)).normalize()
    }
}

/// One and a bit periods of a sine wave along X, the "S" shape in the demo scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineCurve {
    pub scale: f32,
}

impl SineCurve {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }
}

impl Curve for SineCurve {
    fn point(&self, t: f32) -> Vector3<f32> {
        let x = t * 7.5 - 1.5;
        let y = (2.0 * PI * t).sin();
        Vector3::new(x, y, 0.0) * self.scale
    }
}
