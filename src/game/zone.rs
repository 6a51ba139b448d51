// game/zone.rs

use bevy::prelude::*;

/// Axis-aligned drop target region in world space.
///
/// Attached to the zone entity alongside its `Transform`; drop evaluation
/// tests the release point against the zone's world-space rectangle.
#[derive(Component, Debug, Clone, Copy)]
pub struct DropZone {
    pub half_extents: Vec2,
}

impl DropZone {
    pub fn new(width: f32, height: f32) -> Self {
        DropZone {
            half_extents: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Is `point` inside the zone centered at `center`?
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let d = (point - center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_points_inside_and_on_the_edge() {
        let zone = DropZone::new(140.0, 80.0);
        let center = Vec2::new(50.0, -30.0);

        assert!(zone.contains(center, center));
        assert!(zone.contains(center, center + Vec2::new(70.0, 40.0)));
        assert!(zone.contains(center, center - Vec2::new(70.0, 40.0)));
    }

    #[test]
    fn rejects_points_outside() {
        let zone = DropZone::new(140.0, 80.0);
        let center = Vec2::ZERO;

        assert!(!zone.contains(center, Vec2::new(70.1, 0.0)));
        assert!(!zone.contains(center, Vec2::new(0.0, -40.1)));
        assert!(!zone.contains(center, Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn follows_the_zone_center() {
        let zone = DropZone::new(60.0, 60.0);
        let point = Vec2::new(100.0, 100.0);

        assert!(!zone.contains(Vec2::ZERO, point));
        assert!(zone.contains(Vec2::new(100.0, 100.0), point));
    }
}
