use super::*;

#[test]
fn dimensions_reject_zero_sides() {
    assert!(ImageDimensions::new(0, 10).is_err());
    assert!(ImageDimensions::new(10, 0).is_err());
    assert_eq!(
        ImageDimensions::new(240, 120).unwrap().to_string(),
        "240×120"
    );
}

#[test]
fn tiled_and_split_are_inverse_for_exact_strips() {
    let frame = ImageDimensions::new(100, 40).unwrap();
    let strip = frame.tiled(3).unwrap();
    assert_eq!(strip, ImageDimensions { width: 300, height: 40 });
    assert_eq!(strip.split(NonZeroU32::new(3).unwrap()), frame);
}

#[test]
fn split_truncates_remainder() {
    let strip = ImageDimensions::new(250, 40).unwrap();
    assert_eq!(strip.split(NonZeroU32::new(3).unwrap()).width, 83);
    assert_eq!(strip.split(NonZeroU32::MIN), strip);
}

#[test]
fn tiled_overflow_is_an_error() {
    let frame = ImageDimensions::new(u32::MAX, 1).unwrap();
    assert!(frame.tiled(2).is_err());
}

#[test]
fn framerate_rejects_non_positive_and_nan() {
    assert!(Framerate::new(0.0).is_err());
    assert!(Framerate::new(-3.0).is_err());
    assert!(Framerate::new(f64::NAN).is_err());
    assert!(Framerate::new(f64::INFINITY).is_err());
}

#[test]
fn framerate_frames_to_ms_rounds() {
    assert_eq!(Framerate::new(10.0).unwrap().frames_to_ms(5), 500);
    assert_eq!(Framerate::new(30.0).unwrap().frames_to_ms(1), 33);
    assert_eq!(Framerate::new(24.0).unwrap().frames_to_ms(7), 292);
    assert_eq!(Framerate::new(3.0).unwrap().frames_to_ms(2), 667);
}
