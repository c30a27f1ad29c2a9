use serde::{Deserialize, Serialize};

/// Three component vector (`FMOD_VECTOR`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Position and orientation of a listener or event instance (`FMOD_3D_ATTRIBUTES`).
///
/// `forward` and `up` must be unit length and perpendicular; the native side
/// rejects anything else with `InvalidVector`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes3d {
    pub position: Vector,
    pub velocity: Vector,
    pub forward: Vector,
    pub up: Vector,
}

impl Attributes3d {
    /// Attributes at `position`, at rest, facing +Z with +Y up.
    pub fn at(position: Vector) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for Attributes3d {
    fn default() -> Self {
        Self {
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            forward: Vector::new(0.0, 0.0, 1.0),
            up: Vector::new(0.0, 1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn layout_matches_native() {
        assert_eq!(size_of::<Vector>(), 12);
        assert_eq!(size_of::<Attributes3d>(), 48);
    }

    #[test]
    fn default_orientation_is_forward_z_up_y() {
        let attributes = Attributes3d::at(Vector::new(1.0, 2.0, 3.0));
        assert_eq!(attributes.position, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(attributes.velocity, Vector::ZERO);
        assert_eq!(attributes.forward, Vector::new(0.0, 0.0, 1.0));
        assert_eq!(attributes.up, Vector::new(0.0, 1.0, 0.0));
    }
}
