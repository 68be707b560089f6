/// The two-entity scene driven by the timeline
use crate::frame::ProjectedEntity;
use crate::geometry::{Entity, Mesh};
use crate::matrix::HomogeneousPoint;
use crate::timeline::{Frame, Phase, Role, Timeline};

/// Where the house sits before scaling
pub const HOUSE_ANCHOR: [f64; 3] = [-5.0, 4.0, 3.0];
/// Where the ball sits before scaling
pub const BALL_ANCHOR: [f64; 3] = [10.0, -0.5, 0.0];

/// An entity together with the motion script it follows
#[derive(Debug, Clone)]
pub struct Actor {
    pub role: Role,
    pub entity: Entity,
}

/// Output of one frame for every actor, in scene order
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub frame: Frame,
    pub actors: Vec<(Role, Phase, ProjectedEntity)>,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub actors: Vec<Actor>,
}

impl Scene {
    /// House and ball placed and scaled for the scripted sequence
    pub fn standard(house: &Mesh, ball: &Mesh, house_scale: f64, ball_scale: f64) -> Self {
        let [hx, hy, hz] = HOUSE_ANCHOR;
        let [bx, by, bz] = BALL_ANCHOR;
        let house = house.placed(&HomogeneousPoint::from_euclidean(hx, hy, hz), house_scale);
        let ball = ball.placed(&HomogeneousPoint::from_euclidean(bx, by, bz), ball_scale);

        Self {
            actors: vec![
                Actor {
                    role: Role::Ball,
                    entity: Entity::new("ball", ball),
                },
                Actor {
                    role: Role::House,
                    entity: Entity::new("house", house),
                },
            ],
        }
    }

    pub fn actor(&self, role: Role) -> Option<&Actor> {
        self.actors.iter().find(|a| a.role == role)
    }

    /// Evaluate the timeline for every actor and project its mesh
    pub fn frame(&self, timeline: &Timeline, frame: Frame) -> SceneFrame {
        let actors = self
            .actors
            .iter()
            .map(|actor| {
                let entity = &actor.entity;
                let transform = timeline.transform(actor.role, frame, &entity.rest_position);
                (
                    actor.role,
                    timeline.phase(actor.role, frame),
                    entity.project(&transform),
                )
            })
            .collect();
        SceneFrame { frame, actors }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::standard(&Mesh::house(), &Mesh::ball(), 3.0, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_placement() {
        let scene = Scene::default();
        let ball = &scene.actor(Role::Ball).unwrap().entity;
        let house = &scene.actor(Role::House).unwrap().entity;

        assert_relative_eq!(ball.rest_position.x(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(ball.rest_position.y(), -1.0, epsilon = 1e-9);
        assert_relative_eq!(house.rest_position.x(), -15.0, epsilon = 1e-9);
        assert_relative_eq!(house.rest_position.z(), 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_keeps_polyline_shape() {
        let scene = Scene::default();
        let timeline = Timeline::default();
        let out = scene.frame(&timeline, 30);

        assert_eq!(out.actors.len(), 2);
        for ((_, _, projected), actor) in out.actors.iter().zip(&scene.actors) {
            assert!(!projected.is_degenerate());
            let lengths: Vec<usize> = projected.polylines.iter().map(Vec::len).collect();
            let expected: Vec<usize> =
                actor.entity.mesh.polylines.iter().map(|p| p.len()).collect();
            assert_eq!(lengths, expected);
        }
        assert_eq!(out.actors[0].1, Phase::RollForward);
        assert_eq!(out.actors[1].1, Phase::Idle);
    }
}
