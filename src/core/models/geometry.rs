//! Vertical geometry of rendered list items
//!
//! Only the vertical extent matters for insertion-point computation, so a
//! rectangle is reduced to its top edge and height.

use serde::{Deserialize, Serialize};

/// Vertical bounds of a rendered element, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
    /// Top edge
    pub top: f64,
    /// Height (never negative)
    pub height: f64,
}

/// Serialized form of [`Rect`]; decoding goes through [`Rect::new`]
#[derive(Debug, Deserialize)]
struct RectFields {
    top: f64,
    height: f64,
}

impl From<RectFields> for Rect {
    fn from(fields: RectFields) -> Self {
        Self::new(fields.top, fields.height)
    }
}

/// Which half of a rectangle a pointer falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Strictly above the vertical midpoint
    Upper,
    /// At or below the vertical midpoint
    Lower,
}

impl Rect {
    /// Create a rectangle; a negative height is treated as zero
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    /// Bottom edge
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical midpoint
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Whether `y` lies within the closed interval `[top, bottom]`
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }

    /// Half of this rectangle that `y` falls in
    #[must_use]
    pub fn half_of(&self, y: f64) -> Half {
        if y < self.mid_y() { Half::Upper } else { Half::Lower }
    }

    /// Insertion slot for a pointer over this rectangle at list `index`
    ///
    /// Upper half inserts before the item, lower half after it.
    #[must_use]
    pub fn slot(&self, index: usize, y: f64) -> usize {
        match self.half_of(y) {
            Half::Upper => index,
            Half::Lower => index + 1,
        }
    }
}

/// Insertion slot among `rects`, or `None` when the pointer is past them all
///
/// Items are scanned in display order. A pointer above an item's top edge
/// inserts before that item; a pointer inside an item uses the half rule.
#[must_use]
pub fn slot_among(pointer_y: f64, rects: &[Rect]) -> Option<usize> {
    rects.iter().enumerate().find_map(|(index, rect)| {
        if pointer_y < rect.top {
            Some(index)
        } else if rect.contains_y(pointer_y) {
            Some(rect.slot(index, pointer_y))
        } else {
            None
        }
    })
}

/// Insertion index for a pointer over a vertical list of item rectangles
///
/// Same as [`slot_among`], except that a pointer past every bottom edge
/// inserts at the end.
#[must_use]
pub fn insertion_index(pointer_y: f64, rects: &[Rect]) -> usize {
    slot_among(pointer_y, rects).unwrap_or(rects.len())
}
