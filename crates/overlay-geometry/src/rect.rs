//! Rectangle and size value types

/// Axis-aligned rectangle stored as top/left corner plus extent
///
/// `right` and `bottom` are derived from the stored pair so the two views
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The zero rectangle at the origin
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge (`left + width`)
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`)
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when `other` lies entirely inside this rectangle
    ///
    /// Edges count as inside, so a rectangle contains itself.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.top >= self.top
            && other.left >= self.left
            && other.bottom() <= self.bottom()
            && other.right() <= self.right()
    }

    /// Pairwise intersection, or `None` when the rectangles share no area
    ///
    /// Touching edges produce no area and therefore return `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());

        if bottom <= top || right <= left {
            return None;
        }

        Some(Rect {
            top,
            left,
            width: right - left,
            height: bottom - top,
        })
    }
}

/// Intrinsic width/height of a floating panel before any constraint applies
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Intersection of every rectangle in the list
///
/// Reduces left to right; the result does not depend on input order. Returns
/// `None` for an empty list or as soon as any pairwise step produces no
/// common area.
pub fn intersect_all(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    let mut acc = *first;
    for rect in rest {
        acc = acc.intersection(rect)?;
    }
    Some(acc)
}
