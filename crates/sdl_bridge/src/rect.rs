//! Points and rectangles
//!
//! The header-inline helpers (`SDL_PointInRect`, `SDL_RectEmpty`,
//! `SDL_RectsEqualEpsilon`, ...) are not exported by the library and are
//! implemented here. The exported algorithms are forwarded through [`Sdl`].

use std::ffi::c_int;

use bytemuck::{Pod, Zeroable};

use crate::context::Sdl;
use crate::error::{to_c_int, Result};

/// `SDL_FLT_EPSILON`
pub const FLT_EPSILON: f32 = 1.192_092_9e-7;

/// Integer point (`SDL_Point`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

/// Floating point point (`SDL_FPoint`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

/// Integer rectangle with the origin at the upper left (`SDL_Rect`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

/// Floating point rectangle (`SDL_FRect`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl FPoint {
    /// Create a point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for FPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True if `point` lies inside; the right and bottom edges are exclusive
    pub const fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    /// True if the rectangle has no area
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Exact equality (`SDL_RectsEqual`)
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl FRect {
    /// Create a rectangle
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// True if `point` lies inside; all edges are inclusive
    pub fn contains_point(&self, point: FPoint) -> bool {
        point.x >= self.x && point.x <= self.x + self.w && point.y >= self.y && point.y <= self.y + self.h
    }

    /// True if either dimension is negative; a zero-sized rectangle is a point
    pub fn is_empty(&self) -> bool {
        self.w < 0.0 || self.h < 0.0
    }

    /// Component-wise equality within `epsilon`
    pub fn equals_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
            && (self.h - other.h).abs() <= epsilon
    }

    /// Equality within [`FLT_EPSILON`]
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_epsilon(other, FLT_EPSILON)
    }
}

impl From<Rect> for FRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
    }
}

pub(crate) fn rect_ptr(rect: Option<&Rect>) -> *const Rect {
    rect.map_or(std::ptr::null(), |r| r as *const _)
}

pub(crate) fn frect_ptr(rect: Option<&FRect>) -> *const FRect {
    rect.map_or(std::ptr::null(), |r| r as *const _)
}

impl Sdl {
    /// True if two rectangles overlap
    pub fn has_rect_intersection(&self, a: &Rect, b: &Rect) -> bool {
        unsafe { (self.api().SDL_HasRectIntersection)(a, b) }
    }

    /// Overlap of two rectangles, `None` when they are disjoint
    pub fn rect_intersection(&self, a: &Rect, b: &Rect) -> Option<Rect> {
        let mut result = Rect::default();
        unsafe { (self.api().SDL_GetRectIntersection)(a, b, &mut result) }.then_some(result)
    }

    /// Smallest rectangle containing both
    pub fn rect_union(&self, a: &Rect, b: &Rect) -> Result<Rect> {
        let mut result = Rect::default();
        self.check(unsafe { (self.api().SDL_GetRectUnion)(a, b, &mut result) })?;
        Ok(result)
    }

    /// Smallest rectangle enclosing the points (optionally clipped); `None` if none are inside
    pub fn rect_enclosing_points(&self, points: &[Point], clip: Option<&Rect>) -> Result<Option<Rect>> {
        let count = to_c_int("point count", points.len())?;
        let mut result = Rect::default();
        let found = unsafe {
            (self.api().SDL_GetRectEnclosingPoints)(points.as_ptr(), count, rect_ptr(clip), &mut result)
        };
        Ok(found.then_some(result))
    }

    /// Clip a line segment to a rectangle
    pub fn rect_and_line_intersection(&self, rect: &Rect, start: Point, end: Point) -> Option<(Point, Point)> {
        let (mut x1, mut y1, mut x2, mut y2): (c_int, c_int, c_int, c_int) = (start.x, start.y, end.x, end.y);
        let hit = unsafe {
            (self.api().SDL_GetRectAndLineIntersection)(rect, &mut x1, &mut y1, &mut x2, &mut y2)
        };
        hit.then(|| (Point::new(x1, y1), Point::new(x2, y2)))
    }

    /// Float variant of [`Self::has_rect_intersection`]
    pub fn has_rect_intersection_float(&self, a: &FRect, b: &FRect) -> bool {
        unsafe { (self.api().SDL_HasRectIntersectionFloat)(a, b) }
    }

    /// Float variant of [`Self::rect_intersection`]
    pub fn rect_intersection_float(&self, a: &FRect, b: &FRect) -> Option<FRect> {
        let mut result = FRect::default();
        unsafe { (self.api().SDL_GetRectIntersectionFloat)(a, b, &mut result) }.then_some(result)
    }

    /// Float variant of [`Self::rect_union`]
    pub fn rect_union_float(&self, a: &FRect, b: &FRect) -> Result<FRect> {
        let mut result = FRect::default();
        self.check(unsafe { (self.api().SDL_GetRectUnionFloat)(a, b, &mut result) })?;
        Ok(result)
    }

    /// Float variant of [`Self::rect_enclosing_points`]
    pub fn rect_enclosing_points_float(&self, points: &[FPoint], clip: Option<&FRect>) -> Result<Option<FRect>> {
        let count = to_c_int("point count", points.len())?;
        let mut result = FRect::default();
        let found = unsafe {
            (self.api().SDL_GetRectEnclosingPointsFloat)(points.as_ptr(), count, frect_ptr(clip), &mut result)
        };
        Ok(found.then_some(result))
    }

    /// Float variant of [`Self::rect_and_line_intersection`]
    pub fn rect_and_line_intersection_float(&self, rect: &FRect, start: FPoint, end: FPoint) -> Option<(FPoint, FPoint)> {
        let (mut x1, mut y1, mut x2, mut y2) = (start.x, start.y, end.x, end.y);
        let hit = unsafe {
            (self.api().SDL_GetRectAndLineIntersectionFloat)(rect, &mut x1, &mut y1, &mut x2, &mut y2)
        };
        hit.then(|| (FPoint::new(x1, y1), FPoint::new(x2, y2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_point_excludes_far_edges() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains_point(Point::new(10, 10)));
        assert!(rect.contains_point(Point::new(14, 14)));
        assert!(!rect.contains_point(Point::new(15, 10)));
        assert!(!rect.contains_point(Point::new(9, 12)));
    }

    #[test]
    fn test_frect_contains_point_includes_edges() {
        let rect = FRect::new(0.0, 0.0, 2.0, 2.0);
        assert!(rect.contains_point(FPoint::new(2.0, 2.0)));
        assert!(!rect.contains_point(FPoint::new(2.01, 1.0)));
    }

    #[test]
    fn test_empty_rules_differ_for_float() {
        assert!(Rect::new(0, 0, 0, 4).is_empty());
        assert!(Rect::new(0, 0, -1, 4).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());

        assert!(!FRect::new(0.0, 0.0, 0.0, 0.0).is_empty());
        assert!(FRect::new(0.0, 0.0, -0.5, 1.0).is_empty());
    }

    #[test]
    fn test_float_equality_uses_epsilon() {
        let a = FRect::new(1.0, 2.0, 3.0, 4.0);
        let b = FRect::new(1.0 + FLT_EPSILON / 2.0, 2.0, 3.0, 4.0);
        assert!(a.equals(&b));
        assert!(!a.equals(&FRect::new(1.001, 2.0, 3.0, 4.0)));
        assert!(a.equals_epsilon(&FRect::new(1.001, 2.0, 3.0, 4.0), 0.01));
        assert!(Rect::new(1, 2, 3, 4).equals(&Rect::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_rect_to_frect() {
        let rect: FRect = Rect::new(-3, 4, 10, 20).into();
        assert_eq!(rect, FRect::new(-3.0, 4.0, 10.0, 20.0));
        let point: FPoint = Point::new(7, -2).into();
        assert_eq!(point, FPoint::new(7.0, -2.0));
    }

    #[test]
    fn test_rects_cast_to_ints() {
        let rects = [Rect::new(1, 2, 3, 4), Rect::new(5, 6, 7, 8)];
        let ints: &[i32] = bytemuck::cast_slice(&rects);
        assert_eq!(ints, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(rect_ptr(None).is_null());
        assert!(!frect_ptr(Some(&FRect::default())).is_null());
    }
}
