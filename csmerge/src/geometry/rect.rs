//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

#[derive(Copy, Clone, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn strictly_intersects(&self, other: Rect) -> bool {
        !(self.x >= other.x + other.width || other.x >= self.x + self.width ||
            self.y >= other.y + other.height || other.y >= self.y + self.height)
    }

    pub fn strict_intersection(&self, other: Rect) -> Option<Rect> {
        if !self.strictly_intersects(other) { None }
        else {
            let x1 = self.x.max(other.x);
            let x2 = (self.x + self.width).min(other.x + other.width);
            let y1 = self.y.max(other.y);
            let y2 = (self.y + self.height).min(other.y + other.height);

            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        }
    }

    pub fn contains_point(&self, pt: Point) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.x + self.width >= pt.x && self.y + self.height >= pt.y
    }

    pub fn enclosing_rect_of_two_points(pt1: Point, pt2: Point) -> Rect {
        let x1 = pt1.x.min(pt2.x);
        let x2 = pt1.x.max(pt2.x);
        let y1 = pt1.y.min(pt2.y);
        let y2 = pt1.y.max(pt2.y);
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}
