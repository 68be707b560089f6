/// roll3d Core Library - homogeneous transforms and the animation timeline
///
/// This library provides the stateless core of the animation: 4x4
/// transforms, the per-entity timeline, perspective projection of meshes
/// and OBJ/VRML loading.

pub mod error;
pub mod frame;
pub mod geometry;
pub mod loader;
pub mod matrix;
pub mod obj;
pub mod scene;
pub mod timeline;
pub mod transform;
pub mod wrl;

// Re-export commonly used types
pub use error::{ChoreographyError, FrameError, LoadError, ObjError, TransformError, WrlError};
pub use frame::{project_point, project_points, ProjectedEntity, ScreenPoint, SkippedVertex};
pub use geometry::{Entity, Mesh, Polyline};
pub use loader::MeshFormat;
pub use matrix::{HomogeneousPoint, Transform};
pub use scene::{Actor, Scene, SceneFrame};
pub use timeline::{Choreography, Frame, Phase, Role, Timeline};
pub use transform::{projection, rotate_about_pivot, scale, translation_between, AxisAngles};
