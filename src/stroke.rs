use egui::{Color32, Pos2};

/// One freehand squiggle: the points in draw order plus the pen it was drawn with.
///
/// A stroke with fewer than two points is still valid data (a single click
/// produces one), it just has nothing to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Create an empty stroke drawn with the given pen
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
        }
    }

    pub fn with_points(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Whether the stroke has enough points to be drawn as a line
    pub fn is_renderable(&self) -> bool {
        self.points.len() > 1
    }
}
