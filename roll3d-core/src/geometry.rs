/// Mesh and entity model for the animated objects
use crate::matrix::{HomogeneousPoint, Transform};
use crate::transform::{scale, translation_between};

/// An ordered outline of homogeneous points, drawn as a connected line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<HomogeneousPoint>,
}

impl Polyline {
    pub fn new(points: Vec<HomogeneousPoint>) -> Self {
        Self { points }
    }

    /// Outline through the given points that returns to its first point
    pub fn closed(mut points: Vec<HomogeneousPoint>) -> Self {
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A wireframe mesh composed of face outlines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub polylines: Vec<Polyline>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    /// Lift face lists of Euclidean points into homogeneous form (w = 1)
    pub fn homogenize(faces: Vec<Vec<[f64; 3]>>) -> Self {
        let polylines = faces
            .into_iter()
            .map(|face| {
                Polyline::new(
                    face.into_iter()
                        .map(|[x, y, z]| HomogeneousPoint::from_euclidean(x, y, z))
                        .collect(),
                )
            })
            .collect();
        Self { polylines }
    }

    /// Every vertex in face order
    pub fn vertices(&self) -> impl Iterator<Item = &HomogeneousPoint> {
        self.polylines.iter().flat_map(|p| p.points.iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.polylines.iter().map(Polyline::len).sum()
    }

    /// Mean of all vertex positions, with w = 1
    pub fn center(&self) -> Option<HomogeneousPoint> {
        let count = self.vertex_count();
        if count == 0 {
            return None;
        }
        let (sx, sy, sz) = self
            .vertices()
            .fold((0.0, 0.0, 0.0), |(x, y, z), p| (x + p.x(), y + p.y(), z + p.z()));
        let n = count as f64;
        Some(HomogeneousPoint::from_euclidean(sx / n, sy / n, sz / n))
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        let polylines = self
            .polylines
            .iter()
            .map(|p| Polyline::new(p.points.iter().map(|v| transform.apply(v)).collect()))
            .collect();
        Self { polylines }
    }

    /// Move the mesh center onto `target`, then scale about the origin.
    ///
    /// The resulting center is `factor * target`.
    pub fn placed(&self, target: &HomogeneousPoint, factor: f64) -> Self {
        let Some(center) = self.center() else {
            return self.clone();
        };
        let placement = scale(factor).multiply(&translation_between(&center, target));
        self.transformed(&placement)
    }

    /// House wireframe one unit tall: walls, gable roof and a door
    pub fn house() -> Self {
        let faces = vec![
            // Front wall with gable
            vec![
                [-0.4, -0.5, 0.3],
                [0.4, -0.5, 0.3],
                [0.4, 0.1, 0.3],
                [0.0, 0.5, 0.3],
                [-0.4, 0.1, 0.3],
            ],
            // Back wall with gable
            vec![
                [-0.4, -0.5, -0.3],
                [0.4, -0.5, -0.3],
                [0.4, 0.1, -0.3],
                [0.0, 0.5, -0.3],
                [-0.4, 0.1, -0.3],
            ],
            // Side walls
            vec![[0.4, -0.5, 0.3], [0.4, -0.5, -0.3], [0.4, 0.1, -0.3], [0.4, 0.1, 0.3]],
            vec![[-0.4, -0.5, 0.3], [-0.4, -0.5, -0.3], [-0.4, 0.1, -0.3], [-0.4, 0.1, 0.3]],
            // Roof
            vec![[0.4, 0.1, 0.3], [0.0, 0.5, 0.3], [0.0, 0.5, -0.3], [0.4, 0.1, -0.3]],
            vec![[-0.4, 0.1, 0.3], [0.0, 0.5, 0.3], [0.0, 0.5, -0.3], [-0.4, 0.1, -0.3]],
            // Door
            vec![[-0.1, -0.5, 0.3], [-0.1, -0.15, 0.3], [0.1, -0.15, 0.3], [0.1, -0.5, 0.3]],
        ];
        Self::closed_faces(faces)
    }

    /// Icosahedron face outlines with unit circumradius
    pub fn ball() -> Self {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let norm = (1.0 + phi * phi).sqrt();
        let (a, b) = (1.0 / norm, phi / norm);

        let v: [[f64; 3]; 12] = [
            [-a, b, 0.0],
            [a, b, 0.0],
            [-a, -b, 0.0],
            [a, -b, 0.0],
            [0.0, -a, b],
            [0.0, a, b],
            [0.0, -a, -b],
            [0.0, a, -b],
            [b, 0.0, -a],
            [b, 0.0, a],
            [-b, 0.0, -a],
            [-b, 0.0, a],
        ];
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let faces = FACES
            .iter()
            .map(|face| face.iter().map(|&i| v[i]).collect::<Vec<_>>())
            .collect();
        Self::closed_faces(faces)
    }

    fn closed_faces(faces: Vec<Vec<[f64; 3]>>) -> Self {
        let mut mesh = Self::homogenize(faces);
        for polyline in &mut mesh.polylines {
            *polyline = Polyline::closed(std::mem::take(&mut polyline.points));
        }
        mesh
    }
}

/// An animated object: a mesh loaded once and the pivot it rests on
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub mesh: Mesh,
    pub rest_position: HomogeneousPoint,
}

impl Entity {
    /// Wrap a mesh, taking its center as the rest position
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        let rest_position = mesh.center().unwrap_or_else(HomogeneousPoint::origin);
        Self {
            name: name.into(),
            mesh,
            rest_position,
        }
    }
}
