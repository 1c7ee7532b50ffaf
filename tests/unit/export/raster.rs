use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000" opacity="0.5"/></svg>"##;

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[0, 0, 0, 0]);
}

#[test]
fn png_has_requested_size_and_straight_color() {
    let png = rasterize_png(SQUARE, 16).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (16, 16));
    let [r, g, b, a] = img.get_pixel(8, 8).0;
    assert!(r >= 250, "red channel {r}");
    assert_eq!((g, b), (0, 0));
    assert!((120..=136).contains(&a), "alpha {a}");
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(rasterize_png(SQUARE, 0), Err(CalwheelError::Export(_))));
    assert!(matches!(rasterize_png("not svg", 8), Err(CalwheelError::Other(_))));
}
