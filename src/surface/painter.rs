use egui::emath::Rot2;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::tessellate::fill_mesh;
use super::{Surface, rect_corners};

/// Segments used to approximate a full circle
const ARC_SEGMENTS: usize = 64;

/// A surface that draws onto an egui [`Painter`].
///
/// egui shapes have no transform stack, so the surface keeps the current frame
/// itself and maps every local point to screen space as it is added to the path.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Option<Color32>,
    translation: Vec2,
    rotation: f32,
    fill_color: Color32,
    stroke: Stroke,
    path: Vec<Pos2>,
    closed: bool,
    /// The path is a lone arc, which egui can fill directly
    convex: bool,
}

impl std::fmt::Debug for PainterSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PainterSurface")
            .field("rect", &self.rect)
            .field("translation", &self.translation)
            .field("rotation", &self.rotation)
            .field("path_len", &self.path.len())
            .finish_non_exhaustive()
    }
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface covering `rect`. Canvas coordinates start at `rect.min`.
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            background: None,
            translation: Vec2::ZERO,
            rotation: 0.0,
            fill_color: Color32::BLACK,
            stroke: Stroke::new(1.0, Color32::BLACK),
            path: Vec::new(),
            closed: false,
            convex: false,
        }
    }

    /// Paint `color` over the whole rect on `clear`. Without a background,
    /// clearing leaves what lies underneath visible (used for the preview layer).
    pub fn with_background(mut self, color: Color32) -> Self {
        self.background = Some(color);
        self
    }

    /// Map a point from the current local frame to screen space
    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + self.translation + Rot2::from_angle(self.rotation) * point.to_vec2()
    }

    fn add_polygon(&self, points: Vec<Pos2>, fill: Color32, stroke: Stroke) {
        if points.len() >= 3 {
            self.painter.add(Shape::convex_polygon(points, fill, stroke));
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        if let Some(background) = self.background {
            self.painter.rect_filled(self.rect, 0.0, background);
        }
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn translate(&mut self, offset: Vec2) {
        self.translation += Rot2::from_angle(self.rotation) * offset;
    }

    fn rotate(&mut self, radians: f32) {
        self.rotation += radians;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
        self.convex = false;
    }

    fn move_to(&mut self, point: Pos2) {
        // egui paths are single polylines, a move restarts the path
        self.path.clear();
        self.path.push(self.to_screen(point));
        self.convex = false;
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.push(self.to_screen(point));
        self.convex = false;
    }

    fn arc(&mut self, center: Pos2, radius: f32) {
        self.convex = self.path.is_empty();
        for i in 0..ARC_SEGMENTS {
            let angle = std::f32::consts::TAU * i as f32 / ARC_SEGMENTS as f32;
            let point = center + Vec2::angled(angle) * radius;
            self.path.push(self.to_screen(point));
        }
        self.closed = true;
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn fill(&mut self) {
        if self.convex {
            self.add_polygon(self.path.clone(), self.fill_color, Stroke::NONE);
        } else if let Some(mesh) = fill_mesh(&self.path, self.fill_color) {
            self.painter.add(Shape::mesh(mesh));
        }
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let shape = if self.closed {
            Shape::closed_line(self.path.clone(), self.stroke)
        } else {
            Shape::line(self.path.clone(), self.stroke)
        };
        self.painter.add(shape);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let corners = rect_corners(rect).map(|corner| self.to_screen(corner));
        self.add_polygon(corners.to_vec(), self.fill_color, Stroke::NONE);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let corners = rect_corners(rect).map(|corner| self.to_screen(corner));
        self.painter.add(Shape::closed_line(corners.to_vec(), self.stroke));
    }
}
