use std::collections::HashMap;

use crate::core::models::{
    BoundingBox,
    CardId,
};

/// Something on screen whose bounds can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementHandle {
    Card(CardId),
    Bookmark,
}

/// Bounds lookup for rendered elements. `None` means the element is not
/// currently laid out.
pub trait Measure {
    fn measure(&self, handle: ElementHandle) -> Option<BoundingBox>;
}

/// Bounds recorded by widgets during the current frame.
///
/// Call [`LayoutRegistry::begin_frame`] before drawing so that anything not
/// drawn this frame reads as unavailable.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    rects: HashMap<ElementHandle, BoundingBox>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.rects.clear();
    }

    pub fn record(&mut self, handle: ElementHandle, bounds: BoundingBox) {
        // Zero-area widgets are not measurable.
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            self.rects.remove(&handle);
            return;
        }
        self.rects.insert(handle, bounds);
    }
}

impl Measure for LayoutRegistry {
    fn measure(&self, handle: ElementHandle) -> Option<BoundingBox> {
        self.rects.get(&handle).copied()
    }
}
