use crate::rect::Rect;

/// Side length of a grid cell in pixels.
pub const CELL_SIZE: f32 = 20.0;

/// Integer address of a cell on the placement grid. Not a pixel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a pixel position to the nearest cell.
    pub fn from_pixel(px: f32, py: f32) -> Self {
        Self {
            x: round_half_down(px / CELL_SIZE),
            y: round_half_down(py / CELL_SIZE),
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The on-screen square for this cell. It is centered on the cell's nominal pixel point, so
    /// the top-left sits half a cell up and to the left of it.
    pub fn to_pixel_rect(self, cell_size: f32) -> Rect {
        Rect {
            x: self.x as f32 * cell_size,
            y: self.y as f32 * cell_size,
            width: cell_size,
            height: cell_size,
        }
    }
}

// Halfway values resolve toward negative infinity, so a cursor sitting exactly on the shared edge
// of two cells picks the upper-left one.
fn round_half_down(value: f32) -> i32 {
    (value - 0.5).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_centers_map_back_to_their_cell() {
        for k in -5..5 {
            for j in -5..5 {
                let (px, py) = (20.0 * k as f32 + 10.0, 20.0 * j as f32 + 10.0);
                assert_eq!(GridCoord::from_pixel(px, py), GridCoord::new(k, j));
                assert_eq!(GridCoord::from_pixel(px - 0.5, py - 0.5), GridCoord::new(k, j));
            }
        }
    }

    #[test]
    fn from_pixel_rounds_to_nearest() {
        assert_eq!(GridCoord::from_pixel(0.0, 0.0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::from_pixel(9.9, 10.1), GridCoord::new(0, 1));
        assert_eq!(GridCoord::from_pixel(109.0, 31.0), GridCoord::new(5, 2));
        assert_eq!(GridCoord::from_pixel(-11.0, -9.0), GridCoord::new(-1, 0));
    }

    #[test]
    fn from_pixel_ties_round_toward_upper_left() {
        assert_eq!(GridCoord::from_pixel(10.0, 30.0), GridCoord::new(0, 1));
        assert_eq!(GridCoord::from_pixel(50.0, 70.0), GridCoord::new(2, 3));
        assert_eq!(GridCoord::from_pixel(-10.0, -30.0), GridCoord::new(-1, -2));
    }

    #[test]
    fn offset_translates_without_touching_the_original() {
        let origin = GridCoord::new(3, -2);
        assert_eq!(origin.offset(-4, 7), GridCoord::new(-1, 5));
        assert_eq!(origin, GridCoord::new(3, -2));
    }

    #[test]
    fn pixel_rect_is_inset_by_half_a_cell() {
        let rect = GridCoord::new(4, 2).to_pixel_rect(CELL_SIZE);
        assert_eq!((rect.left(), rect.top()), (70.0, 30.0));
        assert_eq!((rect.width, rect.height), (20.0, 20.0));

        let rect = GridCoord::new(0, 0).to_pixel_rect(CELL_SIZE);
        assert_eq!((rect.left(), rect.top()), (-10.0, -10.0));
    }
}
