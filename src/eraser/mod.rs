//! Soft eraser.
//!
//! Shapes touched by the eraser disc are removed whole. Freehand paths are
//! cut where they cross the disc boundary and the pieces inside the disc
//! lose opacity, so repeated passes fade a stroke out gradually.

mod split;

use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::geometry::{calculate_bounds, distance_to_segment, midpoint, point_in_circle};
use crate::id_generator;
use crate::stroke::{PathEntity, PathKind, PathRef, StrokeSettings};

pub use split::{Fragment, split_polyline};

/// Tuning for the eraser. Serialized as part of the board config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserConfig {
    /// Radius never drops below this, however thin the stroke width
    pub min_radius: f32,
    /// Radius per unit of stroke width
    pub radius_per_width: f32,
    /// Extra reach when testing the defining points of rectangles,
    /// circles and triangles
    pub shape_hit_slop: f32,
    /// Fragments at or below this opacity are removed
    pub drop_opacity: f32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            min_radius: Self::MIN_RADIUS_DEFAULT,
            radius_per_width: Self::RADIUS_PER_WIDTH_DEFAULT,
            shape_hit_slop: Self::SHAPE_HIT_SLOP_DEFAULT,
            drop_opacity: Self::DROP_OPACITY_DEFAULT,
        }
    }
}

impl EraserConfig {
    pub const MIN_RADIUS_DEFAULT: f32 = 10.0;
    pub const RADIUS_PER_WIDTH_DEFAULT: f32 = 2.0;
    pub const SHAPE_HIT_SLOP_DEFAULT: f32 = 20.0;
    pub const DROP_OPACITY_DEFAULT: f32 = 0.05;

    pub fn radius_for(&self, stroke_width: f32) -> f32 {
        (stroke_width * self.radius_per_width).max(self.min_radius)
    }

    /// Opacity of the current settings, clamped into `(0, 1]`
    pub fn strength_for(&self, opacity: f32) -> f32 {
        opacity.clamp(f32::EPSILON, 1.0)
    }

    /// Eraser sized and weighted from the settings active when a gesture
    /// starts.
    pub fn eraser(&self, settings: &StrokeSettings) -> Eraser {
        Eraser {
            radius: self.radius_for(settings.stroke_width),
            strength: self.strength_for(settings.opacity),
            shape_hit_slop: self.shape_hit_slop,
            drop_opacity: self.drop_opacity,
        }
    }
}

/// A sized eraser disc, applied at a different center for each pointer
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eraser {
    pub radius: f32,
    pub strength: f32,
    pub shape_hit_slop: f32,
    pub drop_opacity: f32,
}

impl Eraser {
    pub fn new(radius: f32, strength: f32) -> Self {
        Self {
            radius,
            strength,
            shape_hit_slop: EraserConfig::SHAPE_HIT_SLOP_DEFAULT,
            drop_opacity: EraserConfig::DROP_OPACITY_DEFAULT,
        }
    }

    /// Erases around `center`.
    ///
    /// Returns `None` when no path was touched, so callers can keep the
    /// list they already have. Untouched paths are carried over as the
    /// same `Arc`.
    pub fn erase(&self, center: Pos2, paths: &[PathRef]) -> Option<Vec<PathRef>> {
        let mut changed = false;
        let mut result = Vec::with_capacity(paths.len());

        for path in paths {
            match self.erase_path(center, path) {
                None => result.push(Arc::clone(path)),
                Some(replacement) => {
                    changed = true;
                    result.extend(replacement);
                }
            }
        }

        changed.then_some(result)
    }

    /// `None` if the path is untouched, otherwise what replaces it
    /// (possibly nothing).
    fn erase_path(&self, center: Pos2, path: &PathEntity) -> Option<Vec<PathRef>> {
        match path.kind() {
            PathKind::Freehand => self.erase_freehand(center, path),
            _ => self.touches_shape(center, path).then(Vec::new),
        }
    }

    fn touches_shape(&self, center: Pos2, path: &PathEntity) -> bool {
        let (Some(start), Some(end)) = (path.start(), path.end()) else {
            return false;
        };

        if path.kind() == PathKind::Arrow {
            return distance_to_segment(center, start, end) < self.radius;
        }

        let reach = self.radius + self.shape_hit_slop;
        [start, end, midpoint(start, end)]
            .into_iter()
            .any(|point| point_in_circle(point, center, reach))
    }

    fn erase_freehand(&self, center: Pos2, path: &PathEntity) -> Option<Vec<PathRef>> {
        let points = path.points();
        let base_opacity = path.opacity();

        if let [point] = points {
            if !point_in_circle(*point, center, self.radius) {
                return None;
            }
            let opacity = base_opacity - self.strength;
            if opacity <= self.drop_opacity {
                log::debug!("Eraser removed point path {}", path.id());
                return Some(Vec::new());
            }
            return Some(vec![self.derive(path, "faded", points.to_vec(), opacity)]);
        }

        // Cheap reject before walking every segment
        if !calculate_bounds(points, self.radius).contains(center) {
            return None;
        }
        let fragments = split_polyline(points, center, self.radius)?;

        let survivors: Vec<PathRef> = fragments
            .into_iter()
            .filter_map(|fragment| {
                let (tag, opacity) = if fragment.inside {
                    ("in", base_opacity - self.strength)
                } else {
                    ("out", base_opacity)
                };
                (opacity > self.drop_opacity)
                    .then(|| self.derive(path, tag, fragment.points, opacity))
            })
            .collect();

        log::debug!(
            "Eraser split path {} into {} surviving fragments",
            path.id(),
            survivors.len()
        );
        Some(survivors)
    }

    fn derive(&self, parent: &PathEntity, tag: &str, points: Vec<Pos2>, opacity: f32) -> PathRef {
        PathEntity::new_ref(
            id_generator::derive_fragment_id(parent.id(), tag),
            parent.kind(),
            points,
            parent.settings().with_opacity(opacity),
        )
    }
}
