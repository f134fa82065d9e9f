use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Pitch is kept just short of the poles so `look_at_rh` never receives a
/// view direction parallel to the up axis.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Pan-orbit camera state: a target point orbited at a distance, Z-up.
///
/// Pure math — owns no GPU resources, so the orbit behavior is testable
/// without a device. [`CameraController`] pairs it with the uniform buffer.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Distance from the target to the eye.
    pub distance: f32,
    /// Azimuth angle in radians.
    pub yaw: f32,
    /// Elevation angle in radians, clamped short of the poles.
    pub pitch: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    distance_min: f32,
    distance_max: f32,
    orbit_speed: f32,
    zoom_speed: f32,
    pan_speed: f32,
}

impl OrbitCamera {
    /// Build an orbit camera from the configured projection and control
    /// parameters, starting at a three-quarter view of the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        use std::f32::consts::FRAC_PI_4;
        let mut orbit = Self {
            target: Vec3::ZERO,
            distance: options.distance,
            yaw: FRAC_PI_4,
            pitch: FRAC_PI_4,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            distance_min: options.distance_min,
            distance_max: options.distance_max,
            orbit_speed: options.orbit_speed,
            zoom_speed: options.zoom_speed,
            pan_speed: options.pan_speed,
        };
        orbit.clamp();
        orbit
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(self.distance_min, self.distance_max);
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Eye position in world space for the current orbit state.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target
            + Vec3::new(
                cos_pitch * cos_yaw * self.distance,
                cos_pitch * sin_yaw * self.distance,
                sin_pitch * self.distance,
            )
    }

    /// Rotate around the target by a screen-space mouse delta.
    pub fn orbit(&mut self, delta: Vec2) {
        log::trace!("orbit delta: {delta}");
        self.yaw -= delta.x * self.orbit_speed;
        self.pitch += delta.y * self.orbit_speed;
        self.clamp();
    }

    /// Move toward/away from the target by a scroll amount.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        self.distance -= scroll * self.zoom_speed;
        self.clamp();
    }

    /// Translate the target along the camera's right/up plane.
    pub fn pan(&mut self, delta: Vec2) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        let right = Vec3::new(-sin_yaw, cos_yaw, 0.0);
        let forward = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch);
        let up = forward.cross(right).normalize();

        let pan_distance = self.distance * self.pan_speed;
        self.target -= (right * delta.x - up * delta.y) * pan_distance;
    }

    /// Snapshot the orbit state as a [`Camera`] for the given aspect ratio.
    #[must_use]
    pub fn to_camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Z,
            aspect,
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

/// Orbit camera paired with its GPU uniform buffer and bind group.
pub struct CameraController {
    /// Orbit control state.
    pub orbit: OrbitCamera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer (64 bytes).
    pub buffer: wgpu::Buffer,
    /// Bind group layout shared by all pipelines.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group at group 0, binding 0.
    pub bind_group: wgpu::BindGroup,
    aspect: f32,
}

impl CameraController {
    /// Create the controller and its GPU binding.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let orbit = OrbitCamera::from_options(options);
        let aspect = context.config.width as f32 / context.config.height.max(1) as f32;

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&orbit.to_camera(aspect));

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });

        Self {
            orbit,
            uniform,
            buffer,
            layout,
            bind_group,
            aspect,
        }
    }

    /// Track a new viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Rebuild the uniform from the orbit state and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform
            .update_view_proj(&self.orbit.to_camera(self.aspect));
        log::trace!("view_proj: {:?}", self.uniform.view_proj);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbit() -> OrbitCamera {
        OrbitCamera::from_options(&CameraOptions::default())
    }

    #[test]
    fn eye_sits_on_positive_x_at_zero_angles() {
        let mut cam = orbit();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        let eye = cam.eye();
        assert!((eye - Vec3::new(cam.distance, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut cam = orbit();
        cam.orbit(Vec2::new(0.0, 1e6));
        assert!(cam.pitch <= PITCH_LIMIT);
        cam.orbit(Vec2::new(0.0, -1e6));
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn zoom_respects_distance_limits() {
        let mut cam = orbit();
        cam.zoom(1e9);
        let min = cam.distance;
        cam.zoom(-1e9);
        let max = cam.distance;
        assert!(min > 0.0);
        assert!(max >= min);
        // Zero scroll is a no-op.
        let before = cam.distance;
        cam.zoom(0.0);
        assert_eq!(cam.distance, before);
    }

    #[test]
    fn horizontal_pan_keeps_target_height() {
        let mut cam = orbit();
        let before = cam.target;
        cam.pan(Vec2::new(25.0, 0.0));
        // The camera-right axis is horizontal in a Z-up world.
        assert_eq!(cam.target.z, before.z);
        assert!(cam.target != before);
    }
}
