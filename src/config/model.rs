use std::collections::HashSet;

use serde_json::Number;

use crate::{
    config::screen::ScreenName,
    foundation::error::{LcmError, LcmResult},
};

/// Opaque settings carried through unchanged.
pub type Passthrough = serde_json::Map<String, serde_json::Value>;

/// The device GUI configuration: screens plus settings this crate never interprets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfigDocument {
    pub screens: Vec<ScreenEntry>,
    #[serde(flatten)]
    pub settings: Passthrough,
}

/// Display program for one named screen.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenEntry {
    pub name: ScreenName,
    pub frames: Vec<ScreenFrame>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

/// One step of a screen's display program.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<TextFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_config: Option<FrameConfig>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameConfig {
    pub duration: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<FrameTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<Number>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameTransition {
    SlideLeft,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Position, size and alignment shared by text and image frames.
///
/// Numbers are kept as written so entries this crate does not touch round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameGeometry {
    pub x: Number,
    pub y: Number,
    pub w: Number,
    pub h: Number,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            x: Number::from(0u32),
            y: Number::from(0u32),
            w: Number::from(0u32),
            h: Number::from(0u32),
            horizontal: HorizontalAlign::default(),
            vertical: VerticalAlign::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextFrame {
    #[serde(flatten)]
    pub geometry: FrameGeometry,
    pub size: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Number>,
    pub strs: Vec<String>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAnimation {
    Static,
    Slideshow,
    Breathing,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageFrame {
    #[serde(flatten)]
    pub geometry: FrameGeometry,
    pub file: String,
    pub animation: ImageAnimation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_loop: Option<bool>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl ConfigDocument {
    /// Check the one-entry-per-screen invariant.
    pub fn validate(&self) -> LcmResult<()> {
        let mut seen = HashSet::with_capacity(self.screens.len());
        for entry in &self.screens {
            if !seen.insert(entry.name) {
                return Err(LcmError::validation(format!(
                    "screen '{}' appears more than once in the configuration document",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    pub fn screen(&self, name: ScreenName) -> Option<&ScreenEntry> {
        self.screens.iter().find(|entry| entry.name == name)
    }
}

impl ScreenEntry {
    /// Entry that shows a single image frame.
    pub fn single_image(name: ScreenName, image: ImageFrame) -> Self {
        Self {
            name,
            frames: vec![ScreenFrame {
                images: Some(vec![image]),
                ..ScreenFrame::default()
            }],
            extra: Passthrough::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
