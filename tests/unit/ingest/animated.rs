use super::*;

use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

fn write_gif(path: &Path, pages: u8, w: u32, h: u32) {
    let f = File::create(path).unwrap();
    let mut encoder = GifEncoder::new(f);
    let frames = (0..pages).map(|i| {
        let img = RgbaImage::from_pixel(w, h, Rgba([i * 40, 255 - i * 40, 0, 255]));
        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(100, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

#[test]
fn extracts_every_page_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let gif = tmp.path().join("wave.gif");
    write_gif(&gif, 5, 12, 8);

    let anim = extract_pages(&gif).unwrap();
    assert_eq!(anim.page_count().unwrap(), 5);
    assert_eq!(anim.dimensions, ImageDimensions::new(12, 8).unwrap());
    for (i, page) in anim.pages.iter().enumerate() {
        assert_eq!(page.dimensions(), (12, 8));
        let red = page.get_pixel(0, 0).0[0];
        assert!(red.abs_diff(i as u8 * 40) <= 8, "page {i} red {red}");
    }
}

#[test]
fn single_page_gif_is_one_frame() {
    let tmp = tempfile::tempdir().unwrap();
    let gif = tmp.path().join("still.gif");
    write_gif(&gif, 1, 4, 4);
    assert_eq!(extract_pages(&gif).unwrap().page_count().unwrap(), 1);
}

#[test]
fn garbage_is_a_decode_error() {
    let tmp = tempfile::tempdir().unwrap();
    let gif = tmp.path().join("broken.gif");
    std::fs::write(&gif, b"GIF89a but not really").unwrap();
    assert!(extract_pages(&gif).is_err());
}

#[test]
fn page_count_matches_decoded_pages() {
    let anim = AnimatedFrames {
        pages: vec![RgbaImage::new(2, 2); 3],
        dimensions: ImageDimensions::new(2, 2).unwrap(),
    };
    assert_eq!(anim.page_count().unwrap(), 3);
}
