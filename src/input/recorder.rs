use crate::foundation::core::{BrushSize, Point};
use crate::history::stroke::{SamplePoint, Segment, Stroke};

/// Gesture capture state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecorderState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Between pointer-down and pointer-up.
    Recording {
        /// Brush diameter snapshotted at gesture start.
        brush: BrushSize,
        /// Samples captured so far.
        points: Vec<SamplePoint>,
    },
}

/// Turns pointer-down / move / up into finalized strokes.
#[derive(Clone, Debug, Default)]
pub struct StrokeRecorder {
    state: RecorderState,
}

impl StrokeRecorder {
    /// Idle recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    /// `true` between `begin` and `finish`.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    /// Start a gesture at `at`. Any unfinished buffer is discarded.
    pub fn begin(&mut self, at: Point, brush: BrushSize) {
        self.state = RecorderState::Recording {
            brush,
            points: vec![SamplePoint::new(at, brush)],
        };
    }

    /// Append `to` to the running gesture and return the piece to draw for live feedback.
    ///
    /// The sample carries the brush captured in `begin`, whatever the control shows now.
    pub fn extend(&mut self, to: Point) -> Option<Segment> {
        let RecorderState::Recording { brush, points } = &mut self.state else {
            return None;
        };
        let from = points.last().map(|p| p.position()).unwrap_or(to);
        points.push(SamplePoint::new(to, *brush));
        Some(Segment {
            from,
            to,
            width: *brush,
        })
    }

    /// End the gesture and hand back the stroke to commit, if any samples were captured.
    pub fn finish(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            RecorderState::Idle => None,
            RecorderState::Recording { points, .. } => Stroke::new(points),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/recorder.rs"]
mod tests;
