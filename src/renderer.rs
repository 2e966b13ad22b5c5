use egui::{Color32, Painter, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::document::Document;
use crate::stroke::Stroke;

pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// One polyline shape per stroke, in draw order, shifted by `origin`.
///
/// Strokes with fewer than two points have nothing to draw and are skipped.
pub fn stroke_shapes(strokes: &[Stroke], origin: Vec2) -> Vec<Shape> {
    strokes
        .iter()
        .filter(|stroke| stroke.is_renderable())
        .map(|stroke| {
            let points = stroke.points().iter().map(|point| *point + origin).collect();
            Shape::line(points, EguiStroke::new(stroke.width(), stroke.color()))
        })
        .collect()
}

/// Paint the whole drawing into `rect`, with the document origin at its top-left
pub fn paint_document(painter: &Painter, rect: Rect, document: &Document) {
    painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
    painter.extend(stroke_shapes(document.strokes(), rect.min.to_vec2()));
}
