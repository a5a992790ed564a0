use egui::{Color32, Pos2, Rect, Vec2};

use super::Surface;

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Clear,
    SetFillColor(Color32),
    SetStrokeColor(Color32),
    SetLineWidth(f32),
    Translate(Vec2),
    Rotate(f32),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    Arc { center: Pos2, radius: f32 },
    ClosePath,
    Fill,
    Stroke,
    FillRect(Rect),
    StrokeRect(Rect),
}

/// A surface that draws nothing and records every call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    calls: Vec<SurfaceCall>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Vec2::new(500.0, 500.0))
    }
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Sum of every translate offset recorded so far
    pub fn net_translation(&self) -> Vec2 {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Translate(offset) => Some(*offset),
                _ => None,
            })
            .fold(Vec2::ZERO, |sum, offset| sum + offset)
    }

    /// Sum of every rotation recorded so far, in radians
    pub fn net_rotation(&self) -> f32 {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Rotate(radians) => Some(*radians),
                _ => None,
            })
            .sum()
    }

    /// Number of calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.calls.push(SurfaceCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.calls.push(SurfaceCall::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(SurfaceCall::SetLineWidth(width));
    }

    fn translate(&mut self, offset: Vec2) {
        self.calls.push(SurfaceCall::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.calls.push(SurfaceCall::Rotate(radians));
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, point: Pos2) {
        self.calls.push(SurfaceCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.calls.push(SurfaceCall::LineTo(point));
    }

    fn arc(&mut self, center: Pos2, radius: f32) {
        self.calls.push(SurfaceCall::Arc { center, radius });
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn fill(&mut self) {
        self.calls.push(SurfaceCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(SurfaceCall::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(SurfaceCall::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.calls.push(SurfaceCall::StrokeRect(rect));
    }
}
