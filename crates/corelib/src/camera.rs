use crate::{Mat4, Vec3, input::CameraKeys};

/// Pitch limit (radians) that keeps the camera from flipping over the pole.
pub const PITCH_LIMIT: f32 = 1.4;

/// Camera orbiting the origin on a sphere, driven by yaw/pitch (right-handed).
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Rotation around +Y, radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, radians, clamped to `±PITCH_LIMIT`.
    pub pitch: f32,
    pub radius: f32,
    /// Angle applied per update while a key is held.
    pub step: f32,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius: 4.0,
            step: 0.02,
            fov_y_rad: 45f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// One frame of keyboard steering.
    pub fn apply_input(&mut self, keys: &CameraKeys) {
        if keys.left {
            self.yaw -= self.step;
        }
        if keys.right {
            self.yaw += self.step;
        }
        if keys.up {
            self.pitch += self.step;
        }
        if keys.down {
            self.pitch -= self.step;
        }
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        self.radius * Vec3::new(cp * sy, sp, cp * cy)
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// wgpu-style projection: NDC depth in [0,1] between near and far.
    #[inline]
    pub fn proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, aspect, self.z_near, self.z_far)
    }

    /// Aspect ratio of a framebuffer; a zero-height (minimized) window maps to 1.
    #[inline]
    pub fn aspect_for(width: u32, height: u32) -> f32 {
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    #[inline]
    pub fn proj_view(&self, aspect: f32) -> Mat4 {
        self.proj(aspect) * self.view()
    }
}
