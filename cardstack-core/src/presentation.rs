//! Scroll-to-pose mapping for the two cards

use crate::interpolate::{Interpolation, MotionError};
use crate::layout::Layout;

/// Derived styling for one card at a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub translate_y: f64,
    pub label_opacity: f64,
    pub description_translate_y: f64,
    pub description_opacity: f64,
}

/// Interpolation tables mapping the scroll position to card poses.
///
/// Built once per layout. The virtual card fades its label out and slides
/// its description in as the stack scrolls down; the physical card mirrors
/// that, with its own vertical translation tracking the scroll position
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseMapper {
    top_translate: Interpolation,
    top_label_opacity: Interpolation,
    top_description_translate: Interpolation,
    top_description_opacity: Interpolation,
    bottom_label_opacity: Interpolation,
    bottom_description_translate: Interpolation,
    bottom_description_opacity: Interpolation,
}

impl PoseMapper {
    /// Fails when the snap positions sit so close together that the
    /// breakpoint tables collapse (under ~100px of scroll travel).
    pub fn new(layout: &Layout) -> Result<Self, MotionError> {
        let top = layout.top_position;
        let bottom = layout.bottom_position;
        let overlap = layout.card.height / 1.5;

        Ok(Self {
            top_translate: Interpolation::new(vec![top, bottom], vec![-overlap, top])?,
            top_label_opacity: Interpolation::new(
                vec![top, top + 20.0, top + 40.0, bottom],
                vec![1.0, 0.2, 0.1, 0.0],
            )?,
            top_description_translate: Interpolation::new(
                vec![top, bottom - 60.0, bottom],
                vec![-100.0, -90.0, 10.0],
            )?,
            top_description_opacity: Interpolation::new(
                vec![top, bottom - 10.0, bottom],
                vec![0.0, 0.6, 1.0],
            )?,
            bottom_label_opacity: Interpolation::new(
                vec![top, bottom - 40.0, bottom - 20.0, bottom],
                vec![0.0, 0.1, 0.2, 1.0],
            )?,
            bottom_description_translate: Interpolation::new(
                vec![top, top + 100.0, bottom],
                vec![10.0, 90.0, 100.0],
            )?,
            bottom_description_opacity: Interpolation::new(
                vec![top, top + 60.0, bottom],
                vec![1.0, 0.0, 0.0],
            )?,
        })
    }

    /// Pose of the virtual (top) card.
    pub fn top(&self, scroll: f64) -> CardPose {
        CardPose {
            translate_y: self.top_translate.sample(scroll),
            label_opacity: self.top_label_opacity.sample(scroll),
            description_translate_y: self.top_description_translate.sample(scroll),
            description_opacity: self.top_description_opacity.sample(scroll),
        }
    }

    /// Pose of the physical (bottom) card. Its translation is the scroll
    /// position itself.
    pub fn bottom(&self, scroll: f64) -> CardPose {
        CardPose {
            translate_y: scroll,
            label_opacity: self.bottom_label_opacity.sample(scroll),
            description_translate_y: self.bottom_description_translate.sample(scroll),
            description_opacity: self.bottom_description_opacity.sample(scroll),
        }
    }
}
