//! Orbit scene: one planet circling the origin, moons circling the planet.

use std::f32::consts::TAU;

use crate::{CoreError, CoreResult, Vec3, transform::Transform};

/// Layout parameters. Angular speeds are radians per second of sim time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub planet_orbit_radius: f32,
    pub planet_angular_speed: f32,
    pub planet_scale: f32,
    pub moon_count: u32,
    pub moon_orbit_radius: f32,
    pub moon_angular_speed: f32,
    pub moon_scale: f32,
    /// Amplitude of the per-moon vertical offset.
    pub moon_bob: f32,
    /// Self-spin of moon `i` is `spin_base + spin_step * i`.
    pub spin_base: f32,
    pub spin_step: f32,
    pub spin_axis: Vec3,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            planet_orbit_radius: 1.2,
            planet_angular_speed: 0.6,
            planet_scale: 0.6,
            moon_count: 6,
            moon_orbit_radius: 0.8,
            moon_angular_speed: 1.4,
            moon_scale: 0.35,
            moon_bob: 0.2,
            spin_base: 0.8,
            spin_step: 0.25,
            spin_axis: Vec3::new(0.4, 1.0, 0.2),
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> CoreResult<()> {
        let finite = [
            ("planet_orbit_radius", self.planet_orbit_radius),
            ("planet_angular_speed", self.planet_angular_speed),
            ("planet_scale", self.planet_scale),
            ("moon_orbit_radius", self.moon_orbit_radius),
            ("moon_angular_speed", self.moon_angular_speed),
            ("moon_scale", self.moon_scale),
            ("moon_bob", self.moon_bob),
            ("spin_base", self.spin_base),
            ("spin_step", self.spin_step),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::InvalidScene(format!("{name} is not finite")));
        }
        if self.planet_scale <= 0.0 || self.moon_scale <= 0.0 {
            return Err(CoreError::InvalidScene("scales must be positive".into()));
        }
        if !self.spin_axis.is_finite() || self.spin_axis.length_squared() == 0.0 {
            return Err(CoreError::InvalidScene("spin axis must be non-zero".into()));
        }
        Ok(())
    }
}

/// Model transforms for one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub planet: Transform,
    pub moons: Vec<Transform>,
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitScene {
    params: SceneParams,
}

impl OrbitScene {
    pub fn new(params: SceneParams) -> CoreResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn planet_position(&self, t: f32) -> Vec3 {
        let p = &self.params;
        let a = p.planet_angular_speed * t;
        Vec3::new(p.planet_orbit_radius * a.cos(), 0.0, p.planet_orbit_radius * a.sin())
    }

    pub fn layout(&self, t: f32) -> CoreResult<SceneLayout> {
        if !t.is_finite() {
            return Err(CoreError::InvalidScene(format!("time {t} is not finite")));
        }
        let p = &self.params;
        let planet_pos = self.planet_position(t);

        let moons = (0..p.moon_count)
            .map(|i| {
                let base = TAU * i as f32 / p.moon_count as f32;
                let ang = base + p.moon_angular_speed * t;
                let offset = Vec3::new(
                    p.moon_orbit_radius * ang.cos(),
                    p.moon_bob * (3.0 * base).sin(),
                    p.moon_orbit_radius * ang.sin(),
                );
                let spin = p.spin_base + p.spin_step * i as f32;
                Transform::from_axis_angle(
                    planet_pos + offset,
                    p.spin_axis,
                    spin * t,
                    Vec3::splat(p.moon_scale),
                )
            })
            .collect();

        Ok(SceneLayout {
            planet: Transform {
                scale: Vec3::splat(p.planet_scale),
                ..Transform::from_translation(planet_pos)
            },
            moons,
        })
    }
}
