/// Builders for the primitive transforms used by the animation
use crate::error::TransformError;
use crate::matrix::{HomogeneousPoint, Transform};

/// Rotation angles around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxisAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn about_x(angle: f64) -> Self {
        Self::new(angle, 0.0, 0.0)
    }

    pub fn about_y(angle: f64) -> Self {
        Self::new(0.0, angle, 0.0)
    }

    pub fn about_z(angle: f64) -> Self {
        Self::new(0.0, 0.0, angle)
    }

    /// Combined rotation about the origin: `Rx * Ry * Rz`
    pub fn rotation_matrix(&self) -> Transform {
        rotation_x(self.x)
            .multiply(&rotation_y(self.y))
            .multiply(&rotation_z(self.z))
    }
}

/// Perspective projection with the viewpoint at (0, 0, d) onto the plane z = 0.
///
/// x and y pass through, z is flattened, and w becomes `w - z / d` for the
/// perspective divide.
pub fn projection(distance: f64) -> Result<Transform, TransformError> {
    if distance == 0.0 {
        return Err(TransformError::ZeroProjectionDistance);
    }
    Ok(perspective(distance))
}

/// Unchecked projection; `distance` must be non-zero
pub(crate) fn perspective(distance: f64) -> Transform {
    Transform::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, -1.0 / distance, 1.0],
    ])
}

/// Translation carrying `start` onto `end`. Only x, y and z are compared.
pub fn translation_between(start: &HomogeneousPoint, end: &HomogeneousPoint) -> Transform {
    let dx = end.x() - start.x();
    let dy = end.y() - start.y();
    let dz = end.z() - start.z();
    Transform::from_rows([
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(angle: f64) -> Transform {
    let (s, c) = angle.sin_cos();
    Transform::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(angle: f64) -> Transform {
    let (s, c) = angle.sin_cos();
    Transform::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(angle: f64) -> Transform {
    let (s, c) = angle.sin_cos();
    Transform::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about an arbitrary pivot.
///
/// Moves `pivot` to the origin, applies `Rx * Ry * Rz`, then moves back.
pub fn rotate_about_pivot(x: f64, y: f64, z: f64, pivot: &HomogeneousPoint) -> Transform {
    rotate_angles_about_pivot(&AxisAngles::new(x, y, z), pivot)
}

pub fn rotate_angles_about_pivot(angles: &AxisAngles, pivot: &HomogeneousPoint) -> Transform {
    let origin = HomogeneousPoint::new(0.0, 0.0, 0.0, 0.0);
    let to_origin = translation_between(pivot, &origin);
    let back = translation_between(&origin, pivot);

    back.multiply(&angles.rotation_matrix()).multiply(&to_origin)
}

/// Uniform scale about the origin
pub fn scale(factor: f64) -> Transform {
    Transform::from_rows([
        [factor, 0.0, 0.0, 0.0],
        [0.0, factor, 0.0, 0.0],
        [0.0, 0.0, factor, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
