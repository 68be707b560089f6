/// Mapping a frame transform over an entity's vertices
use log::warn;

use crate::error::FrameError;
use crate::geometry::Entity;
use crate::matrix::{HomogeneousPoint, Transform};

/// A point on the viewing plane after the perspective divide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transform a single point and divide by the resulting w
pub fn project_point(transform: &Transform, point: &HomogeneousPoint) -> Option<ScreenPoint> {
    let p = transform.apply(point);
    if p.w() == 0.0 {
        return None;
    }
    Some(ScreenPoint::new(p.x() / p.w(), p.y() / p.w()))
}

/// Project every point in order, failing on the first one that lands on w = 0
pub fn project_points(
    transform: &Transform,
    points: &[HomogeneousPoint],
) -> Result<Vec<ScreenPoint>, FrameError> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            project_point(transform, p).ok_or(FrameError::DegenerateProjection { index })
        })
        .collect()
}

/// A vertex left out of a projected frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedVertex {
    pub polyline: usize,
    pub vertex: usize,
}

/// Screen-space outlines of one entity for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedEntity {
    /// One outline per mesh polyline, in mesh order
    pub polylines: Vec<Vec<ScreenPoint>>,
    pub skipped: Vec<SkippedVertex>,
}

impl ProjectedEntity {
    pub fn is_degenerate(&self) -> bool {
        !self.skipped.is_empty()
    }
}

impl Entity {
    /// Project every polyline, dropping vertices that land on w = 0
    pub fn project(&self, transform: &Transform) -> ProjectedEntity {
        let mut projected = ProjectedEntity {
            polylines: Vec::with_capacity(self.mesh.polylines.len()),
            skipped: Vec::new(),
        };

        for (polyline, line) in self.mesh.polylines.iter().enumerate() {
            let mut screen = Vec::with_capacity(line.len());
            for (vertex, point) in line.points.iter().enumerate() {
                match project_point(transform, point) {
                    Some(p) => screen.push(p),
                    None => {
                        warn!(
                            "{}: vertex {} of polyline {} projects to w = 0, skipped",
                            self.name, vertex, polyline
                        );
                        projected.skipped.push(SkippedVertex { polyline, vertex });
                    }
                }
            }
            projected.polylines.push(screen);
        }

        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Mesh;
    use crate::transform::projection;

    #[test]
    fn test_origin_projects_to_center() {
        let d100 = projection(100.0).unwrap();
        assert_eq!(
            project_point(&d100, &HomogeneousPoint::origin()),
            Some(ScreenPoint::new(0.0, 0.0))
        );
    }

    #[test]
    fn test_project_points_preserves_order() {
        let d100 = projection(100.0).unwrap();
        let points = vec![
            HomogeneousPoint::from_euclidean(1.0, 2.0, 0.0),
            HomogeneousPoint::from_euclidean(-3.0, 4.0, 0.0),
            HomogeneousPoint::from_euclidean(5.0, -6.0, 50.0),
        ];
        let screen = project_points(&d100, &points).unwrap();
        assert_eq!(
            screen,
            vec![
                ScreenPoint::new(1.0, 2.0),
                ScreenPoint::new(-3.0, 4.0),
                ScreenPoint::new(10.0, -12.0),
            ]
        );
    }

    #[test]
    fn test_point_at_viewpoint_is_degenerate() {
        let d100 = projection(100.0).unwrap();
        let points = vec![
            HomogeneousPoint::from_euclidean(1.0, 1.0, 0.0),
            HomogeneousPoint::from_euclidean(0.0, 0.0, 100.0),
        ];
        assert_eq!(
            project_points(&d100, &points),
            Err(FrameError::DegenerateProjection { index: 1 })
        );
    }

    #[test]
    fn test_entity_skips_degenerate_vertices() {
        let mesh = Mesh::homogenize(vec![
            vec![[1.0, 1.0, 0.0], [2.0, 2.0, 100.0], [3.0, 3.0, 0.0]],
            vec![[4.0, 4.0, 0.0]],
        ]);
        let entity = Entity::new("probe", mesh);
        let projected = entity.project(&projection(100.0).unwrap());

        assert!(projected.is_degenerate());
        assert_eq!(projected.skipped, vec![SkippedVertex { polyline: 0, vertex: 1 }]);
        assert_eq!(
            projected.polylines,
            vec![
                vec![ScreenPoint::new(1.0, 1.0), ScreenPoint::new(3.0, 3.0)],
                vec![ScreenPoint::new(4.0, 4.0)],
            ]
        );
    }
}
