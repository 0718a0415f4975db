//! Screen geometry computed once at mount

/// Finger-to-card movement ratio applied to drag deltas.
pub const DRAG_RATIO: f64 = 0.7;

/// Cumulative drag distance (in screen px) that commits a card swap on release.
pub const SLIDE_THRESHOLD: f64 = 85.0;

/// Fraction of the viewport height where the raised card rests.
const TOP_DIVISOR: f64 = 3.5;

/// Window dimensions in CSS pixels, read once when the screen mounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Card dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub width: f64,
    pub height: f64,
}

impl CardMetrics {
    /// Fixed 260x156 card, matching the artwork's native size.
    pub fn fixed() -> Self {
        Self {
            width: 260.0,
            height: 156.0,
        }
    }

    /// Card sized to the viewport: 70% of the width at a 1.7 aspect ratio.
    pub fn from_viewport(viewport: Viewport) -> Self {
        let width = viewport.width * 0.7;
        Self {
            width,
            height: width / 1.7,
        }
    }
}

/// Snap positions and drag parameters for one screen instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub card: CardMetrics,
    /// Resting scroll position of a raised card.
    pub top_position: f64,
    /// Resting scroll position of a lowered card.
    pub bottom_position: f64,
    pub drag_ratio: f64,
    pub slide_threshold: f64,
}

impl Layout {
    pub fn new(viewport: Viewport, card: CardMetrics) -> Self {
        Self {
            card,
            top_position: viewport.height / TOP_DIVISOR,
            bottom_position: viewport.height - card.height / 3.0,
            drag_ratio: DRAG_RATIO,
            slide_threshold: SLIDE_THRESHOLD,
        }
    }

    /// Layout with the default viewport-proportional card.
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::new(viewport, CardMetrics::from_viewport(viewport))
    }

    /// Distance between the two snap positions.
    pub fn max_scroll_distance(&self) -> f64 {
        self.bottom_position - self.top_position
    }
}
