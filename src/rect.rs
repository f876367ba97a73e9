use ggez::graphics;

/// A rectangle centered at (x, y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - (self.width / 2.0)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - (self.height / 2.0)
    }
}

// ggez rects are anchored at their top-left corner.
impl From<Rect> for graphics::Rect {
    fn from(rect: Rect) -> Self {
        graphics::Rect::new(rect.left(), rect.top(), rect.width, rect.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_top_left_anchored_rect() {
        let rect = Rect { x: 40.0, y: 60.0, width: 20.0, height: 10.0 };
        let converted = graphics::Rect::from(rect);
        assert_eq!((converted.x, converted.y), (30.0, 55.0));
        assert_eq!((converted.w, converted.h), (20.0, 10.0));
    }
}
