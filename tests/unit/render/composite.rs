use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [255, 255, 255, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_on_white_blends() {
    let white = [255, 255, 255, 255];
    let half_black = premultiply([0, 0, 0, 128]);
    let out = over(white, half_black);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 127);
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
    assert!(over_in_place(&mut dst, &[1, 2, 3, 255, 0, 0, 0, 0]).is_ok());
    assert_eq!(dst, [1, 2, 3, 255, 0, 0, 0, 0]);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    assert_eq!(
        premultiply([100, 50, 200, 128]),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
    assert_eq!(premultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(premultiply([9, 8, 7, 255]), [9, 8, 7, 255]);
}

#[test]
fn unpremultiply_inverts_opaque_and_clear() {
    assert_eq!(unpremultiply([9, 8, 7, 255]), [9, 8, 7, 255]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    let back = unpremultiply(premultiply([200, 100, 50, 200]));
    for (got, want) in back.iter().zip([200u8, 100, 50, 200]) {
        assert!(got.abs_diff(want) <= 1, "{back:?}");
    }
}

#[test]
fn in_place_helpers_cover_every_pixel() {
    let mut buf = vec![255, 255, 255, 0, 200, 100, 50, 255];
    premultiply_in_place(&mut buf);
    assert_eq!(buf, [0, 0, 0, 0, 200, 100, 50, 255]);
    unpremultiply_in_place(&mut buf);
    assert_eq!(buf, [0, 0, 0, 0, 200, 100, 50, 255]);
}
