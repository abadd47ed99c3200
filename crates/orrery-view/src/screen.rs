#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point2,
    pub max: Point2,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Rect {
    pub fn from_min_size(min: Point2, size: Vec2) -> Self {
        Self {
            min,
            max: Point2::new(min.x + size.x, min.y + size.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl std::ops::Sub for Point2 {
    type Output = Vec2;

    fn sub(self, other: Point2) -> Self::Output {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

/// Pixel-space canvas region used to map client coordinates into NDC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    rect: Rect,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            rect: Rect::from_min_size(Point2::new(0.0, 0.0), Vec2::new(width, height)),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn aspect(&self) -> Option<f64> {
        let (w, h) = (self.rect.width(), self.rect.height());
        if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() {
            Some(w / h)
        } else {
            None
        }
    }

    /// Client pixels to normalized device coordinates, +Y up, each axis in
    /// `[-1, 1]` across the viewport. `None` for an empty viewport or
    /// non-finite input.
    pub fn to_ndc(&self, client: Point2) -> Option<Point2> {
        self.aspect()?;
        if !client.is_finite() {
            return None;
        }
        let x = (client.x - self.rect.min.x) / self.rect.width() * 2.0 - 1.0;
        let y = -((client.y - self.rect.min.y) / self.rect.height()) * 2.0 + 1.0;
        Some(Point2::new(x, y))
    }
}
