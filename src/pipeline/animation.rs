//! Animation ingestion: source path in, device asset and merged GUI configuration out.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{debug, info, warn};

use crate::{
    config::{
        merge::merge_screen,
        model::{
            ConfigDocument, FrameGeometry, HorizontalAlign, ImageAnimation, ImageFrame,
            Passthrough, ScreenEntry, VerticalAlign,
        },
        screen::ScreenName,
        source::{ConfigSource, ensure_parent_dir, write_document},
        workspace::Workspace,
    },
    deploy::gateway::DeployGateway,
    foundation::{
        core::{Framerate, ImageDimensions},
        error::{LcmError, LcmResult},
    },
    ingest::{
        animated::extract_pages,
        classify::{FrameSource, classify},
        sequence::scan_sequence,
    },
    pipeline::Outcome,
    render::composite::{composite_slideshow, write_png},
    timing::{TimingSpec, resolve_duration},
};

/// Everything needed to put one animation on one screen.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    pub screen: ScreenName,
    /// Image file or frame directory, relative to the animations root.
    pub image: String,
    pub timing: TimingSpec,
    /// Frame count of a single tiled image.
    pub frames: Option<u32>,
    pub animation_loop: bool,
    /// Treat a single still image as a tiled slideshow rather than a static image.
    pub slideshow: bool,
    pub x: i32,
    pub y: i32,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Write artifacts but do not deploy them.
    pub dry_run: bool,
}

impl AnimationRequest {
    pub fn new(screen: ScreenName, image: impl Into<String>) -> Self {
        Self {
            screen,
            image: image.into(),
            timing: TimingSpec::default(),
            frames: None,
            animation_loop: true,
            slideshow: true,
            x: 0,
            y: 0,
            horizontal: HorizontalAlign::default(),
            vertical: VerticalAlign::default(),
            dry_run: false,
        }
    }

    /// Reject inputs that would only fail after the asset has been written.
    pub fn validate(&self) -> LcmResult<()> {
        if let Some(fps) = self.timing.framerate {
            Framerate::new(fps)?;
        }
        Ok(())
    }
}

/// The asset written to the output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedAsset {
    /// File name referenced from the configuration and used on the device.
    pub file_name: String,
    pub path: PathBuf,
    /// Size of a single frame (for tiled images, the derived per-frame size).
    pub frame_dimensions: ImageDimensions,
    pub frame_count: u32,
    /// `false` only for a static image.
    pub animated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationReport {
    pub outcome: Outcome,
    pub asset: PreparedAsset,
    pub duration_ms: u32,
    pub config_path: PathBuf,
    pub document: ConfigDocument,
}

/// Run the whole animation pipeline.
///
/// classify, validate, composite or copy, resolve timing, build the entry, merge, write the
/// configuration, then deploy unless `dry_run`. Any error stops the run before the configuration is
/// written.
#[tracing::instrument(skip_all, fields(screen = %request.screen, image = %request.image))]
pub fn run_animation(
    request: &AnimationRequest,
    workspace: &Workspace,
    config: &ConfigSource,
    gateway: &dyn DeployGateway,
) -> LcmResult<AnimationReport> {
    request.validate()?;

    info!("loading configuration from {}", config.describe());
    let document: ConfigDocument = config.load()?;
    document.validate()?;

    let source_path = workspace.animation_source(&request.image)?;
    info!("importing animation from source '{}'", source_path.display());
    let source = classify(&source_path, request.slideshow, request.frames)?;
    debug!("'{}' is a {}", source.path().display(), source.kind());

    let asset = prepare_asset(&source, &workspace.output_root)?;
    let duration_ms = resolve_duration(request.timing, asset.frame_count)?;

    let entry = build_screen_entry(request, &asset, duration_ms);
    let document = merge_screen(&document, entry);

    let config_path = workspace.lcm_config_path();
    write_document(&config_path, &document)?;
    info!("wrote animations config file to '{}'", config_path.display());

    let mut report = AnimationReport {
        outcome: Outcome::DryRun,
        asset,
        duration_ms,
        config_path,
        document,
    };
    if request.dry_run {
        info!("dry run: not sending the new config to the device");
        return Ok(report);
    }

    gateway.deploy_animation(&report.config_path, &report.asset.path, request.screen)?;
    report.outcome = Outcome::Deployed;
    Ok(report)
}

/// Produce the device asset for `source` inside `output_root`.
pub fn prepare_asset(source: &FrameSource, output_root: &Path) -> LcmResult<PreparedAsset> {
    match source {
        FrameSource::ImageSequence { dir } => {
            let seq = scan_sequence(dir)?;
            info!(
                "found image sequence with {} {} images",
                seq.len(),
                seq.dimensions
            );
            let frames = seq.decode_frames()?;
            let strip = composite_slideshow(&frames, seq.dimensions)?;

            let file_name = format!("{}.png", file_name(dir)?);
            let path = output_root.join(&file_name);
            write_png(&strip, &path)?;
            info!("wrote slideshow image file to '{}'", path.display());

            Ok(PreparedAsset {
                file_name,
                path,
                frame_dimensions: seq.dimensions,
                frame_count: count_u32(seq.len())?,
                animated: true,
            })
        }
        FrameSource::AnimatedImage { path: src } => {
            let anim = extract_pages(src)?;
            let strip = composite_slideshow(&anim.pages, anim.dimensions)?;

            let stem = src.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
                LcmError::input(format!("'{}' has no usable file name", src.display()))
            })?;
            let file_name = format!("{stem}.png");
            let path = output_root.join(&file_name);
            write_png(&strip, &path)?;
            info!("wrote slideshow image file to '{}'", path.display());

            Ok(PreparedAsset {
                file_name,
                path,
                frame_dimensions: anim.dimensions,
                frame_count: anim.page_count()?,
                animated: true,
            })
        }
        FrameSource::StaticImage { path: src } => {
            info!("creating single static image");
            let dims = probe_dimensions(src)?;
            let (file_name, path) = copy_verbatim(src, output_root)?;
            Ok(PreparedAsset {
                file_name,
                path,
                frame_dimensions: dims,
                frame_count: 1,
                animated: false,
            })
        }
        FrameSource::TiledImage { path: src, frames } => {
            info!("creating single image animation of {frames} frames");
            let dims = probe_dimensions(src)?;
            if dims.width % frames.get() != 0 {
                warn!(
                    "image width {} is not a multiple of {frames} frames",
                    dims.width
                );
            }
            let (file_name, path) = copy_verbatim(src, output_root)?;
            Ok(PreparedAsset {
                file_name,
                path,
                frame_dimensions: dims.split(*frames),
                frame_count: frames.get(),
                animated: true,
            })
        }
    }
}

/// The single-image GUI entry for `asset`.
///
/// Every asset, a static image included, is shown as a slideshow: a static image is a one-frame
/// slideshow. Image geometry `w` is always `0`: the device derives frame width from the asset
/// width and `count`.
pub fn build_screen_entry(
    request: &AnimationRequest,
    asset: &PreparedAsset,
    duration_ms: u32,
) -> ScreenEntry {
    let image = ImageFrame {
        geometry: FrameGeometry {
            x: request.x.into(),
            y: request.y.into(),
            w: 0u32.into(),
            h: asset.frame_dimensions.height.into(),
            horizontal: request.horizontal,
            vertical: request.vertical,
        },
        file: asset.file_name.clone(),
        animation: ImageAnimation::Slideshow,
        duration: Some(duration_ms.into()),
        count: Some(asset.frame_count.into()),
        animation_loop: Some(request.animation_loop),
        extra: Passthrough::new(),
    };

    ScreenEntry::single_image(request.screen, image)
}

fn probe_dimensions(path: &Path) -> LcmResult<ImageDimensions> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| LcmError::decode(format!("read image '{}': {e}", path.display())))?;
    ImageDimensions::new(width, height)
}

fn copy_verbatim(src: &Path, output_root: &Path) -> LcmResult<(String, PathBuf)> {
    let file_name = file_name(src)?.to_string();
    let path = output_root.join(&file_name);
    ensure_parent_dir(&path)?;
    std::fs::copy(src, &path)
        .with_context(|| format!("copy '{}' to '{}'", src.display(), path.display()))?;
    info!("copied image file to '{}'", path.display());
    Ok((file_name, path))
}

fn file_name(path: &Path) -> LcmResult<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LcmError::input(format!("'{}' has no usable file name", path.display())))
}

fn count_u32(n: usize) -> LcmResult<u32> {
    u32::try_from(n).map_err(|_| LcmError::validation(format!("{n} frames is too many")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/animation.rs"]
mod tests;
