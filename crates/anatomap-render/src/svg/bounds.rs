use crate::model::BodyDrawing;
use anatomap_core::ViewBox;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PathBounds {
    fn point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include_point(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn to_view_box(self) -> ViewBox {
        ViewBox {
            min_x: self.min_x,
            min_y: self.min_y,
            width: self.max_x - self.min_x,
            height: self.max_y - self.min_y,
        }
    }
}

/// Bounds of a path's absolute points, including curve control points.
///
/// Control points keep the box conservative without solving for curve extrema. Parsing stops
/// at the first malformed segment; `None` when no point was read.
pub fn path_bounds(d: &str) -> Option<PathBounds> {
    let mut bounds: Option<PathBounds> = None;
    let mut include = |x: f64, y: f64| {
        bounds
            .get_or_insert(PathBounds::point(x, y))
            .include_point(x, y)
    };

    for segment in SimplifyingPathParser::from(d) {
        let Ok(segment) = segment else {
            break;
        };
        match segment {
            SimplePathSegment::MoveTo { x, y } | SimplePathSegment::LineTo { x, y } => {
                include(x, y)
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                include(x1, y1);
                include(x, y);
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                include(x1, y1);
                include(x2, y2);
                include(x, y);
            }
            SimplePathSegment::ClosePath => {}
        }
    }
    bounds
}

/// Union of every instruction's path bounds.
pub fn drawing_bounds(drawing: &BodyDrawing<'_>) -> Option<PathBounds> {
    drawing
        .instructions
        .iter()
        .filter_map(|i| path_bounds(i.path))
        .reduce(PathBounds::union)
}
