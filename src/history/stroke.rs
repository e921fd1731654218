use crate::foundation::core::{BrushSize, Point};

/// One captured pointer sample in backing-store pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SamplePoint {
    /// Backing-store x.
    pub x: f64,
    /// Backing-store y.
    pub y: f64,
    /// Brush diameter active when the owning gesture started.
    pub brush_size: BrushSize,
}

impl SamplePoint {
    /// Build a sample at `p` with `brush_size`.
    pub fn new(p: Point, brush_size: BrushSize) -> Self {
        Self {
            x: p.x,
            y: p.y,
            brush_size,
        }
    }

    /// Position as a point.
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A finalized, non-empty paint gesture.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    points: Vec<SamplePoint>,
}

impl Stroke {
    /// Finalize `points` into a stroke; `None` when there is nothing to commit.
    pub fn new(points: Vec<SamplePoint>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    /// Samples in capture order.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Rendered width of the whole stroke: the first sample's brush diameter.
    pub fn width(&self) -> BrushSize {
        self.points[0].brush_size
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Incremental line piece drawn while a gesture is still in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Previous sample position.
    pub from: Point,
    /// Newly captured position.
    pub to: Point,
    /// Gesture brush diameter.
    pub width: BrushSize,
}

#[cfg(test)]
#[path = "../../tests/unit/history/stroke.rs"]
mod tests;
