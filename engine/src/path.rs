//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Path engine: expands a path type into an ordered point sequence
//!
//! Every sequence starts with the caller's start point, unmodified. All
//! following points lie inside the roaming bounds shrunk by [`MARGIN`].
//! Bounds use a y-up convention, so the upper half of the area is towards
//! `max_y`.

use rand::Rng;
use std::f64::consts::PI;
use stuck_common::{Bounds, PathType, Point};

/// Distance kept between generated points and the edge of the bounds
pub const MARGIN: f64 = 40.0;

/// Upper limit for a segment count hint
pub const MAX_SEGMENTS: usize = 32;

/// Inset used for fully random waypoints when the area is large enough
const CHAOS_MARGIN: f64 = 60.0;

/// Maximum per-axis step of a random drift
const DRIFT_STEP: f64 = 25.0;

/// Linear interpolation from `from` to `to` in `steps` equal steps.
///
/// Produces the points at `t = i / steps` for `i` in `1..=steps`: the start
/// is excluded and the end is included. Zero steps yields just the end.
pub fn interpolate(from: Point, to: Point, steps: usize) -> Vec<Point> {
    if steps == 0 {
        return vec![to];
    }
    (1..=steps)
        .map(|i| from.lerp(&to, i as f64 / steps as f64))
        .collect()
}

/// Generates motion paths inside a fixed roaming area
#[derive(Debug, Clone, PartialEq)]
pub struct PathEngine {
    bounds: Bounds,
}

impl PathEngine {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replace the roaming area, e.g. after the screen was resized
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Region every generated point after the start must fall in
    pub fn interior(&self) -> Bounds {
        self.bounds.inset(MARGIN)
    }

    /// Expand `path_type` into points, starting at `start` and heading along
    /// `direction` radians.
    ///
    /// `segment_count_hint` overrides the number of steps of the linear
    /// generators (straight, diagonal and sprint). Only random drift and
    /// full screen chaos consume `rng`.
    ///
    /// Never fails. Bounds narrower than twice the margin yield the start
    /// repeated; a non-finite start is replaced by the centre of the bounds
    /// and a non-finite heading by zero.
    pub fn generate_path<R: Rng + ?Sized>(
        &self,
        path_type: PathType,
        start: Point,
        direction: f64,
        segment_count_hint: Option<usize>,
        rng: &mut R,
    ) -> Vec<Point> {
        let start = if start.is_finite() {
            start
        } else if self.bounds.is_finite() {
            self.bounds.center()
        } else {
            Point::default()
        };

        let interior = self.interior();
        if interior.is_empty() {
            tracing::debug!(
                "Bounds {:?} leave no interior for {}, holding position",
                self.bounds,
                path_type
            );
            return vec![start, start];
        }

        let sketch = Sketch {
            bounds: self.bounds,
            interior,
            start,
            anchor: interior.clamp(start),
            direction: if direction.is_finite() { direction } else { 0.0 },
        };
        let steps = |default: usize| {
            segment_count_hint
                .map(|hint| hint.clamp(1, MAX_SEGMENTS))
                .unwrap_or(default)
        };

        let tail = match path_type {
            PathType::Straight => sketch.straight(steps(4)),
            PathType::RightAngle => sketch.right_angle(),
            PathType::Arc => sketch.arc(),
            PathType::Spiral => sketch.spiral(),
            PathType::SCurve => sketch.s_curve(),
            PathType::AlongEdge => sketch.along_edge(),
            PathType::RandomDrift => sketch.random_drift(rng),
            PathType::CenterBounce => sketch.center_bounce(),
            PathType::FullScreenChaos => sketch.full_screen_chaos(rng),
            PathType::FixedPendulum => sketch.fixed_pendulum(),
            PathType::Diagonal => sketch.diagonal(steps(6)),
            PathType::ClockwiseEdge => sketch.clockwise_edge(),
            PathType::Burst => sketch.burst(),
            PathType::Curve => sketch.curve(),
            PathType::Sprint => sketch.sprint(steps(4)),
            PathType::UpperHalfJump => sketch.upper_half_jump(),
        };

        // Interpolation rounding may stray an ulp past the interior edge.
        let mut points = Vec::with_capacity(tail.len() + 1);
        points.push(start);
        points.extend(tail.into_iter().map(|point| interior.clamp(point)));
        tracing::trace!("Generated {} with {} points", path_type, points.len());
        points
    }
}

/// Inputs of a single generation. Generators return the points after the
/// start; `anchor` is the start clamped into the interior, so segments
/// interpolated from it never leave the interior.
struct Sketch {
    bounds: Bounds,
    interior: Bounds,
    start: Point,
    anchor: Point,
    direction: f64,
}

impl Sketch {
    fn clamp(&self, point: Point) -> Point {
        self.interior.clamp(point)
    }

    fn short_side(&self) -> f64 {
        self.bounds.width().min(self.bounds.height())
    }

    /// Clamped point `length` away from the start along the heading
    fn ahead(&self, length: f64) -> Point {
        self.clamp(self.start.offset(self.direction, length))
    }

    fn straight(&self, steps: usize) -> Vec<Point> {
        interpolate(self.anchor, self.ahead(self.short_side() * 0.3), steps)
    }

    /// Step away from the nearer edges, then turn at a right angle.
    fn right_angle(&self) -> Vec<Point> {
        let dx = if self.start.x < self.bounds.mid_x() { 50.0 } else { -50.0 };
        let dy = if self.start.y < self.bounds.mid_y() { 40.0 } else { -40.0 };
        let corner = Point::new(self.start.x + dx, self.start.y + dy);
        let turn = if corner.y < self.bounds.mid_y() { 30.0 } else { -30.0 };

        let corner = self.clamp(corner);
        let end = self.clamp(Point::new(corner.x, corner.y + turn));
        let mut points = vec![corner];
        points.extend(interpolate(corner, end, 3));
        points
    }

    fn arc(&self) -> Vec<Point> {
        let radius = 40.0;
        (1..=5)
            .map(|i| {
                let angle = self.direction + PI / 6.0 * i as f64;
                self.clamp(self.start.offset(angle, radius))
            })
            .collect()
    }

    fn s_curve(&self) -> Vec<Point> {
        let first = self.clamp(Point::new(self.start.x + 30.0, self.start.y + 20.0));
        let second = self.clamp(Point::new(self.start.x + 60.0, self.start.y - 10.0));
        let end = self.clamp(Point::new(self.start.x + 80.0, self.start.y + 15.0));

        let mut points = interpolate(self.anchor, first, 2);
        points.extend(interpolate(first, second, 2));
        points.extend(interpolate(second, end, 2));
        points
    }

    fn interior_corners(&self) -> [Point; 4] {
        let i = &self.interior;
        [
            Point::new(i.min_x, i.max_y),
            Point::new(i.max_x, i.max_y),
            Point::new(i.max_x, i.min_y),
            Point::new(i.min_x, i.min_y),
        ]
    }

    /// Patrol the interior rectangle, nearest corner first, closing the loop.
    fn along_edge(&self) -> Vec<Point> {
        let corners = self.interior_corners();
        let nearest = corners
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                self.start
                    .distance(a)
                    .partial_cmp(&self.start.distance(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        (0..=corners.len())
            .map(|i| corners[(nearest + i) % corners.len()])
            .collect()
    }

    fn random_drift<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let mut current = self.anchor;
        (0..4)
            .map(|_| {
                current = self.clamp(Point::new(
                    current.x + rng.random_range(-DRIFT_STEP..=DRIFT_STEP),
                    current.y + rng.random_range(-DRIFT_STEP..=DRIFT_STEP),
                ));
                current
            })
            .collect()
    }

    /// Walk to the centre, then overshoot away from where we came from.
    fn center_bounce(&self) -> Vec<Point> {
        let center = self.clamp(self.bounds.center());
        let away = self.clamp(Point::new(
            center.x + (center.x - self.start.x) * 0.5,
            center.y + (center.y - self.start.y) * 0.5,
        ));
        let mut points = interpolate(self.anchor, center, 3);
        points.extend(interpolate(center, away, 2));
        points
    }

    fn full_screen_chaos<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let region = match self.bounds.inset(CHAOS_MARGIN) {
            region if !region.is_empty() => region,
            _ => self.interior,
        };
        (0..3)
            .map(|_| {
                Point::new(
                    rng.random_range(region.min_x..=region.max_x),
                    rng.random_range(region.min_y..=region.max_y),
                )
            })
            .collect()
    }

    fn fixed_pendulum(&self) -> Vec<Point> {
        let y = self.anchor.y;
        let left = self.clamp(Point::new(self.bounds.min_x + 50.0, y));
        let right = self.clamp(Point::new(self.bounds.max_x - 50.0, y));
        vec![left, right, left]
    }

    fn diagonal(&self, steps: usize) -> Vec<Point> {
        interpolate(self.anchor, self.ahead(80.0), steps)
    }

    /// Full lap of the interior rectangle, clockwise from the top right.
    fn clockwise_edge(&self) -> Vec<Point> {
        let i = &self.interior;
        vec![
            Point::new(i.max_x, i.max_y),
            Point::new(i.max_x, i.min_y),
            Point::new(i.min_x, i.min_y),
            Point::new(i.min_x, i.max_y),
            Point::new(i.max_x, i.max_y),
        ]
    }

    fn burst(&self) -> Vec<Point> {
        vec![self.ahead(self.short_side() * 0.4)]
    }

    /// Zig-zag outwards, alternating the heading by an eighth turn.
    fn curve(&self) -> Vec<Point> {
        let mut angle = self.direction;
        (0..6)
            .map(|i| {
                angle += if i % 2 == 0 { PI / 8.0 } else { -PI / 8.0 };
                self.clamp(self.start.offset(angle, 35.0 * (i + 1) as f64))
            })
            .collect()
    }

    fn sprint(&self, steps: usize) -> Vec<Point> {
        interpolate(self.anchor, self.ahead(self.short_side() * 0.5), steps)
    }

    fn upper_half_jump(&self) -> Vec<Point> {
        let top = self.bounds.max_y - 80.0;
        let mid = self.bounds.mid_x();
        [mid - 40.0, mid + 40.0, mid - 30.0, mid + 30.0]
            .into_iter()
            .map(|x| self.clamp(Point::new(x, top)))
            .collect()
    }

    fn spiral(&self) -> Vec<Point> {
        (1..=6)
            .map(|i| {
                let angle = i as f64 * PI / 4.0;
                self.clamp(self.start.offset(angle, 15.0 * i as f64))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(width: f64, height: f64) -> PathEngine {
        PathEngine::new(Bounds::from_size(width, height))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    #[test]
    fn test_interpolate_excludes_start_includes_end() {
        let points = interpolate(Point::new(0.0, 0.0), Point::new(10.0, 20.0), 2);
        assert_eq!(points, vec![Point::new(5.0, 10.0), Point::new(10.0, 20.0)]);
    }

    #[test]
    fn test_interpolate_zero_steps() {
        let points = interpolate(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 0);
        assert_eq!(points, vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_straight_from_corner() {
        let engine = engine(200.0, 200.0);
        let points =
            engine.generate_path(PathType::Straight, Point::new(0.0, 0.0), 0.0, None, &mut rng());
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        for pair in points.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        let last = points.last().unwrap();
        assert!((last.x - 60.0).abs() < 1e-9);
        assert!((40.0..=160.0).contains(&last.x));
        assert_eq!(last.y, 40.0);
    }

    #[test]
    fn test_segment_hint_controls_linear_paths() {
        let engine = engine(400.0, 400.0);
        let start = Point::new(200.0, 200.0);
        let points = engine.generate_path(PathType::Sprint, start, 0.0, Some(10), &mut rng());
        assert_eq!(points.len(), 11);
        let points = engine.generate_path(PathType::Diagonal, start, 0.0, Some(0), &mut rng());
        assert_eq!(points.len(), 2);
        let points = engine.generate_path(PathType::Straight, start, 0.0, Some(1_000), &mut rng());
        assert_eq!(points.len(), MAX_SEGMENTS + 1);
        // Geometric generators ignore the hint.
        let points = engine.generate_path(PathType::Burst, start, 0.0, Some(10), &mut rng());
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_burst_is_two_points() {
        let engine = engine(300.0, 500.0);
        let start = Point::new(150.0, 250.0);
        let points = engine.generate_path(PathType::Burst, start, PI / 2.0, None, &mut rng());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], start);
        assert!((points[1].x - 150.0).abs() < 1e-9);
        assert!((points[1].y - 370.0).abs() < 1e-9);
    }

    #[test]
    fn test_clockwise_edge_laps_interior() {
        let engine = engine(300.0, 300.0);
        let start = Point::new(150.0, 150.0);
        let points = engine.generate_path(PathType::ClockwiseEdge, start, 0.0, None, &mut rng());
        assert_eq!(
            points,
            vec![
                start,
                Point::new(260.0, 260.0),
                Point::new(260.0, 40.0),
                Point::new(40.0, 40.0),
                Point::new(40.0, 260.0),
                Point::new(260.0, 260.0),
            ]
        );
    }

    #[test]
    fn test_along_edge_visits_nearest_corner_first() {
        let engine = engine(300.0, 300.0);
        let start = Point::new(250.0, 30.0);
        let points = engine.generate_path(PathType::AlongEdge, start, 0.0, None, &mut rng());
        assert_eq!(points.len(), 6);
        assert_eq!(points[1], Point::new(260.0, 40.0));
        assert_eq!(points[5], points[1]);
    }

    #[test]
    fn test_fixed_pendulum_swings_on_one_row() {
        let engine = engine(400.0, 300.0);
        let start = Point::new(200.0, 120.0);
        let points = engine.generate_path(PathType::FixedPendulum, start, 0.0, None, &mut rng());
        assert_eq!(
            points,
            vec![
                start,
                Point::new(50.0, 120.0),
                Point::new(350.0, 120.0),
                Point::new(50.0, 120.0),
            ]
        );
    }

    #[test]
    fn test_upper_half_jump_stays_near_top() {
        let engine = engine(400.0, 800.0);
        let start = Point::new(200.0, 100.0);
        let points = engine.generate_path(PathType::UpperHalfJump, start, 0.0, None, &mut rng());
        assert_eq!(points.len(), 5);
        assert!(points[1..].iter().all(|p| p.y == 720.0));
    }

    #[test]
    fn test_center_bounce_passes_through_center() {
        let engine = engine(400.0, 400.0);
        let start = Point::new(100.0, 100.0);
        let points = engine.generate_path(PathType::CenterBounce, start, 0.0, None, &mut rng());
        assert_eq!(points.len(), 6);
        assert_eq!(points[3], Point::new(200.0, 200.0));
        assert_eq!(points[5], Point::new(250.0, 250.0));
    }

    #[test]
    fn test_randomized_paths_are_reproducible_with_seed() {
        let engine = engine(400.0, 400.0);
        let start = Point::new(200.0, 200.0);
        for path in [PathType::RandomDrift, PathType::FullScreenChaos] {
            let a = engine.generate_path(path, start, 0.0, None, &mut StdRng::seed_from_u64(3));
            let b = engine.generate_path(path, start, 0.0, None, &mut StdRng::seed_from_u64(3));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_point_counts() {
        let engine = engine(390.0, 844.0);
        let start = Point::new(195.0, 422.0);
        let expected = [
            (PathType::Straight, 5),
            (PathType::RightAngle, 5),
            (PathType::Arc, 6),
            (PathType::Spiral, 7),
            (PathType::SCurve, 7),
            (PathType::AlongEdge, 6),
            (PathType::RandomDrift, 5),
            (PathType::CenterBounce, 6),
            (PathType::FullScreenChaos, 4),
            (PathType::FixedPendulum, 4),
            (PathType::Diagonal, 7),
            (PathType::ClockwiseEdge, 6),
            (PathType::Burst, 2),
            (PathType::Curve, 7),
            (PathType::Sprint, 5),
            (PathType::UpperHalfJump, 5),
        ];
        for (path, count) in expected {
            let points = engine.generate_path(path, start, 1.0, None, &mut rng());
            assert_eq!(points.len(), count, "{}", path);
        }
    }

    #[test]
    fn test_degenerate_bounds_hold_position() {
        let engine = engine(60.0, 500.0);
        let start = Point::new(30.0, 250.0);
        for path in PathType::ALL {
            let points = engine.generate_path(path, start, 0.0, None, &mut rng());
            assert_eq!(points, vec![start, start], "{}", path);
        }
    }

    #[test]
    fn test_non_finite_inputs_never_leak() {
        let engine = engine(300.0, 300.0);
        for path in PathType::ALL {
            let points =
                engine.generate_path(path, Point::new(f64::NAN, 10.0), f64::NAN, None, &mut rng());
            assert!(points.iter().all(Point::is_finite), "{}", path);
            assert_eq!(points[0], Point::new(150.0, 150.0));
        }
    }

    #[test]
    fn test_points_stay_inside_interior_from_outside_start() {
        let engine = engine(250.0, 180.0);
        let interior = engine.interior();
        let start = Point::new(-50.0, 400.0);
        for path in PathType::ALL {
            let points = engine.generate_path(path, start, 2.5, None, &mut rng());
            assert_eq!(points[0], start);
            assert!(points.len() >= 2);
            for point in &points[1..] {
                assert!(interior.contains(point), "{} produced {:?}", path, point);
            }
        }
    }
}
