//! Resize target abstraction
//!
//! The resizer reads the element's rendered size and writes its inline
//! size. The browser binding implements this over `HtmlElement`; `StyleBox`
//! is a plain in-memory element for headless use and tests.

use std::collections::HashMap;

use crate::math::Size;
use crate::style::{format_px, parse_px_or_zero};

/// An element whose size the resizer mutates
pub trait ResizeTarget {
    /// Rendered value of a style property (e.g. `"200px"` for `width`)
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Set an inline style property
    fn set_style(&mut self, property: &str, value: &str);

    /// Current rendered size, with non-numeric values read as 0
    fn computed_size(&self) -> Size {
        let read = |property| {
            self.computed_style(property)
                .map(|value| parse_px_or_zero(&value))
                .unwrap_or(0.0)
        };
        Size::new(read("width"), read("height"))
    }

    /// Write a size as pixel lengths.
    ///
    /// Negative dimensions are skipped and the previous value stays.
    fn apply_size(&mut self, size: Size) {
        if size.width >= 0.0 {
            self.set_style("width", &format_px(size.width));
        }
        if size.height >= 0.0 {
            self.set_style("height", &format_px(size.height));
        }
    }
}

/// In-memory element holding style properties as strings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBox {
    styles: HashMap<String, String>,
}

impl StyleBox {
    /// Create an element with the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        let mut element = Self::default();
        element.apply_size(Size::new(width, height));
        element
    }

    /// Raw style value
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

impl ResizeTarget for StyleBox {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.styles.get(property).cloned()
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }
}
