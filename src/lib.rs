//! lcm-animate prepares animations for the 240×240 LCM screen of a doorbell and merges them into
//! the device's GUI configuration.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: a source path becomes a [`FrameSource`] (frame directory, animated GIF, static
//!    image or tiled single image)
//! 2. **Validate**: directory entries are probed in parallel; frames that are not accepted images
//!    or do not match the first frame's dimensions are skipped with a warning
//! 3. **Composite**: frames are flattened over black and laid out left to right in one RGB strip
//! 4. **Time**: the per-animation duration comes from an explicit duration or a framerate
//! 5. **Merge**: the new [`ScreenEntry`] replaces any entry for the same screen in a
//!    [`ConfigDocument`] loaded from a [`ConfigSource`]
//! 6. **Deploy**: the written document and asset go to a [`DeployGateway`] unless it is a dry run
//!
//! The ring chime has a smaller pipeline of its own, see [`run_chime`].
#![forbid(unsafe_code)]

pub mod config;
pub mod deploy;
pub mod foundation;
pub mod ingest;
pub mod pipeline;
pub mod render;
pub mod timing;

pub use config::{
    merge::merge_screen,
    model::{
        ConfigDocument, FrameGeometry, HorizontalAlign, ImageAnimation, ImageFrame, ScreenEntry,
        ScreenFrame, VerticalAlign,
    },
    screen::ScreenName,
    sounds::{ChimeSpec, SoundConfig, merge_chime},
    source::ConfigSource,
    workspace::Workspace,
};
pub use deploy::{
    gateway::{DeployGateway, DeviceTarget, SshGateway},
    plan::{RemoteLayout, RemoteStep},
};
pub use foundation::{
    core::{Framerate, ImageDimensions},
    error::{LcmError, LcmResult},
};
pub use ingest::classify::{FrameSource, classify};
pub use pipeline::{
    Outcome,
    animation::{AnimationReport, AnimationRequest, run_animation},
    chime::{ChimeReport, ChimeRequest, run_chime},
};
pub use render::composite::composite_slideshow;
pub use timing::{TimingSpec, resolve_duration};
