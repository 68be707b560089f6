/// Frame-indexed choreography for the ball and the house
///
/// Every transform is recomputed from the frame index and the entity's
/// rest position alone; nothing is carried between frames.
use std::f64::consts::TAU;
use std::fmt;
use std::ops::RangeInclusive;

use log::debug;

use crate::error::ChoreographyError;
use crate::matrix::{HomogeneousPoint, Transform};
use crate::transform::{
    perspective, projection, rotate_angles_about_pivot, translation_between, AxisAngles,
};

/// Index of an animation frame
pub type Frame = i64;

/// Tunable parameters of the scripted sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    /// Distance of the viewpoint from the z = 0 viewing plane
    pub projection_distance: f64,
    /// Number of frames the driver plays
    pub frame_count: u32,
    /// Frames in which the ball rolls towards the viewer
    pub roll_forward: RangeInclusive<Frame>,
    /// Frames in which the ball rolls sideways
    pub roll_sideways: RangeInclusive<Frame>,
    /// Frames in which the camera circles the world origin
    pub orbit: RangeInclusive<Frame>,
    /// Distance moved along z per frame while rolling forward
    pub forward_step: f64,
    /// Distance moved along x per frame while rolling sideways
    pub side_step: f64,
    /// Frames per full turn of the ball while rolling
    pub roll_period: f64,
    /// Frames per full camera revolution
    pub orbit_period: f64,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            projection_distance: 100.0,
            frame_count: 150,
            roll_forward: 0..=49,
            roll_sideways: 50..=64,
            orbit: 65..=149,
            forward_step: 0.5,
            side_step: -2.0,
            roll_period: 100.0,
            orbit_period: 84.0,
        }
    }
}

impl Choreography {
    /// Offset along z once the forward roll is over
    pub fn forward_travel(&self) -> f64 {
        self.forward_step * span(&self.roll_forward)
    }

    /// Offset along x once the sideways roll is over
    pub fn side_travel(&self) -> f64 {
        self.side_step * span(&self.roll_sideways)
    }

    fn validate(&self) -> Result<(), ChoreographyError> {
        if self.roll_period == 0.0 {
            return Err(ChoreographyError::ZeroPeriod { field: "roll_period" });
        }
        if self.orbit_period == 0.0 {
            return Err(ChoreographyError::ZeroPeriod { field: "orbit_period" });
        }

        let phases = [
            (Phase::RollForward, &self.roll_forward),
            (Phase::RollSideways, &self.roll_sideways),
            (Phase::CameraOrbit, &self.orbit),
        ];
        for (i, (first, a)) in phases.iter().enumerate() {
            for (second, b) in &phases[i + 1..] {
                let disjoint = a.is_empty()
                    || b.is_empty()
                    || a.end() < b.start()
                    || b.end() < a.start();
                if !disjoint {
                    return Err(ChoreographyError::OverlappingPhases {
                        first: first.name(),
                        second: second.name(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn span(range: &RangeInclusive<Frame>) -> f64 {
    (range.end() - range.start()) as f64
}

/// A contiguous range of frames sharing one motion law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Ball travels towards the viewer, rolling about x
    RollForward,
    /// Ball travels along x, rolling about z
    RollSideways,
    /// Ball frozen; camera circles the world origin about y
    CameraOrbit,
    /// No motion law applies; projection only
    Idle,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::RollForward => "roll forward",
            Phase::RollSideways => "roll sideways",
            Phase::CameraOrbit => "camera orbit",
            Phase::Idle => "idle",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which motion script an entity follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Ball,
    House,
}

/// A validated choreography with its projection matrix cached
#[derive(Debug, Clone)]
pub struct Timeline {
    config: Choreography,
    projection: Transform,
}

impl Timeline {
    pub fn new(config: Choreography) -> Result<Self, ChoreographyError> {
        let projection = projection(config.projection_distance)?;
        config.validate()?;
        debug!(
            "timeline: forward {:?}, sideways {:?}, orbit {:?}, d = {}",
            config.roll_forward, config.roll_sideways, config.orbit, config.projection_distance
        );
        Ok(Self { config, projection })
    }

    pub fn config(&self) -> &Choreography {
        &self.config
    }

    pub fn projection(&self) -> &Transform {
        &self.projection
    }

    /// Frames the driver should play, in order
    pub fn frames(&self) -> impl Iterator<Item = Frame> {
        0..Frame::from(self.config.frame_count)
    }

    pub fn ball_phase(&self, frame: Frame) -> Phase {
        let c = &self.config;
        if c.roll_forward.contains(&frame) {
            Phase::RollForward
        } else if c.roll_sideways.contains(&frame) {
            Phase::RollSideways
        } else if c.orbit.contains(&frame) {
            Phase::CameraOrbit
        } else {
            Phase::Idle
        }
    }

    pub fn house_phase(&self, frame: Frame) -> Phase {
        if self.config.orbit.contains(&frame) {
            Phase::CameraOrbit
        } else {
            Phase::Idle
        }
    }

    pub fn phase(&self, role: Role, frame: Frame) -> Phase {
        match role {
            Role::Ball => self.ball_phase(frame),
            Role::House => self.house_phase(frame),
        }
    }

    pub fn transform(&self, role: Role, frame: Frame, rest: &HomogeneousPoint) -> Transform {
        match role {
            Role::Ball => self.ball_transform(frame, rest),
            Role::House => self.house_transform(frame),
        }
    }

    /// Composite transform `projection * rotation * translation` for the ball.
    ///
    /// While rolling, the pivot is the ball's translated center for this frame.
    pub fn ball_transform(&self, frame: Frame, rest: &HomogeneousPoint) -> Transform {
        let c = &self.config;
        let (current, rotation) = match self.ball_phase(frame) {
            Phase::RollForward => {
                let t = (frame - c.roll_forward.start()) as f64;
                let current = rest.offset(0.0, 0.0, c.forward_step * t);
                let angle = TAU * (t / c.roll_period);
                (current, rotate_angles_about_pivot(&AxisAngles::about_x(angle), &current))
            }
            Phase::RollSideways => {
                let t = (frame - c.roll_sideways.start()) as f64;
                let current = rest.offset(c.side_step * t, 0.0, c.forward_travel());
                let angle = TAU * (t / c.roll_period);
                (current, rotate_angles_about_pivot(&AxisAngles::about_z(angle), &current))
            }
            Phase::CameraOrbit => {
                let current = rest.offset(c.side_travel(), 0.0, c.forward_travel());
                (current, self.orbit_rotation(frame))
            }
            Phase::Idle => (*rest, Transform::identity()),
        };

        self.projection
            .multiply(&rotation)
            .multiply(&translation_between(rest, &current))
    }

    /// Composite transform for the house, which never leaves its rest position
    pub fn house_transform(&self, frame: Frame) -> Transform {
        match self.house_phase(frame) {
            Phase::CameraOrbit => self.projection.multiply(&self.orbit_rotation(frame)),
            _ => self.projection,
        }
    }

    /// Camera orbit about y through the world origin
    fn orbit_rotation(&self, frame: Frame) -> Transform {
        let t = (frame - self.config.orbit.start()) as f64;
        let angle = (-TAU / self.config.orbit_period) * t;
        rotate_angles_about_pivot(
            &AxisAngles::about_y(angle),
            &HomogeneousPoint::new(0.0, 0.0, 0.0, 0.0),
        )
    }
}

impl Default for Timeline {
    fn default() -> Self {
        let config = Choreography::default();
        let projection = perspective(config.projection_distance);
        Self { config, projection }
    }
}
