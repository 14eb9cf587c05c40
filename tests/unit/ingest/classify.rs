use super::*;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, b"not decoded during classification").unwrap();
    p
}

#[test]
fn directory_wins_even_with_image_like_name() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("walk.png");
    std::fs::create_dir(&dir).unwrap();
    assert_eq!(
        classify(&dir, false, None).unwrap(),
        FrameSource::ImageSequence { dir }
    );
}

#[test]
fn gif_is_animated_regardless_of_slideshow_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let gif = touch(tmp.path(), "wave.gif");
    for slideshow in [true, false] {
        assert_eq!(
            classify(&gif, slideshow, None).unwrap(),
            FrameSource::AnimatedImage { path: gif.clone() }
        );
    }
}

#[test]
fn still_image_without_slideshow_is_static() {
    let tmp = tempfile::tempdir().unwrap();
    let png = touch(tmp.path(), "logo.png");
    assert_eq!(
        classify(&png, false, Some(4)).unwrap(),
        FrameSource::StaticImage { path: png }
    );
}

#[test]
fn still_image_with_slideshow_is_tiled() {
    let tmp = tempfile::tempdir().unwrap();
    let webp = touch(tmp.path(), "strip.webp");
    let source = classify(&webp, true, Some(6)).unwrap();
    assert_eq!(
        source,
        FrameSource::TiledImage {
            path: webp,
            frames: NonZeroU32::new(6).unwrap()
        }
    );
    assert_eq!(source.kind(), "tiled single image");
}

#[test]
fn tiled_without_frame_count_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let jpg = touch(tmp.path(), "strip.jpg");
    for frames in [None, Some(0)] {
        let err = classify(&jpg, true, frames).unwrap_err();
        assert!(matches!(err, LcmError::Input(_)));
        assert!(err.to_string().contains("frame count"));
    }
}

#[test]
fn unknown_extensions_are_unrecognized() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["notes.txt", "LOGO.PNG", "Wave.GIF", "noext"] {
        let p = touch(tmp.path(), name);
        let err = classify(&p, false, None).unwrap_err();
        assert!(err.to_string().contains("unrecognized input shape"), "{name}");
    }
}

#[test]
fn missing_source_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let err = classify(&tmp.path().join("ghost.gif"), true, None).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
