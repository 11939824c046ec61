use crate::error::RecognitionError;
use crate::geometry::{Point, Stroke};
use crate::Result;
use tracing::trace;

/// Default number of points a stroke is resampled to.
pub const DEFAULT_RESAMPLE_COUNT: usize = 64;

/// Resamples `stroke` into exactly `n` points spaced evenly along its path.
///
/// The first output point is the first input point. A synthesized point
/// becomes the start of the next segment, so spacing is measured from the
/// last emitted point rather than from the input vertices. When rounding
/// leaves the walk short, the final input point is repeated until `n` points
/// exist. A zero-length path yields `n` copies of its first point.
pub fn resample(stroke: &Stroke, n: usize) -> Result<Stroke> {
    if n < 2 {
        return Err(RecognitionError::InvalidResampleCount { n });
    }
    stroke.validate()?;

    let points = stroke.points();
    let first = points[0];
    let last = points[points.len() - 1];

    let total_length = stroke.path_length();
    if total_length == 0.0 {
        trace!(n, "zero-length stroke, emitting repeated point");
        return Ok(Stroke::new(vec![first; n]));
    }

    let interval = total_length / (n - 1) as f64;
    let mut resampled: Vec<Point> = Vec::with_capacity(n);
    resampled.push(first);

    let mut accumulated = 0.0;
    let mut previous = first;
    let mut index = 1;

    // `accumulated < interval` holds at the top of every iteration, so a
    // segment that crosses the interval boundary has non-zero length.
    while index < points.len() && resampled.len() < n {
        let current = points[index];
        let segment = previous.distance_to(&current);

        if accumulated + segment >= interval {
            let t = (interval - accumulated) / segment;
            let synthesized = previous.lerp(&current, t);
            resampled.push(synthesized);
            previous = synthesized;
            accumulated = 0.0;
        } else {
            accumulated += segment;
            previous = current;
            index += 1;
        }
    }

    let padded = n - resampled.len();
    if padded > 0 {
        trace!(padded, "padding resampled stroke with final point");
        resampled.resize(n, last);
    }

    Ok(Stroke::new(resampled))
}
