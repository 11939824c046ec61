use crate::geometry::{Point, Stroke};
use serde::Serialize;

/// Coordinate used for an axis whose bounding-box extent is zero.
pub const DEGENERATE_AXIS_VALUE: f64 = 0.5;

/// A stroke mapped into the unit square by [`normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStroke {
    points: Vec<Point>,
}

impl NormalizedStroke {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_stroke(self) -> Stroke {
        Stroke::new(self.points)
    }
}

/// Translates and rescales `stroke` so its bounding box becomes [0,1]x[0,1].
///
/// Each axis is scaled independently. An axis with zero extent (a vertical or
/// horizontal line, or a single repeated point) maps to
/// [`DEGENERATE_AXIS_VALUE`].
pub fn normalize(stroke: &Stroke) -> NormalizedStroke {
    let Some(bb) = stroke.bounding_box() else {
        return NormalizedStroke { points: Vec::new() };
    };

    let points = stroke
        .points()
        .iter()
        .map(|p| {
            Point::new(
                scale_axis(p.x, bb.min_x, bb.width()),
                scale_axis(p.y, bb.min_y, bb.height()),
            )
        })
        .collect();

    NormalizedStroke { points }
}

fn scale_axis(value: f64, min: f64, extent: f64) -> f64 {
    if extent == 0.0 {
        DEGENERATE_AXIS_VALUE
    } else {
        (value - min) / extent
    }
}
