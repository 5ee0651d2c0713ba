use crate::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Space around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 40,
            left: 60,
        }
    }
}

/// Outer size of one chart plus its margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(960, 350)
    }
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    /// Inner plot size `(width, height)`.
    pub fn plot_size(&self) -> Result<(f64, f64), EncodeError> {
        let m = self.margin;
        let w = m
            .left
            .checked_add(m.right)
            .and_then(|x| self.width.checked_sub(x))
            .filter(|w| *w > 0);
        let h = m
            .top
            .checked_add(m.bottom)
            .and_then(|y| self.height.checked_sub(y))
            .filter(|h| *h > 0);
        match (w, h) {
            (Some(w), Some(h)) => Ok((w as f64, h as f64)),
            _ => Err(EncodeError::InvalidFrame {
                width: self.width,
                height: self.height,
            }),
        }
    }
}
