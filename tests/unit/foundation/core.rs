use super::*;

#[test]
fn crop_region_rejects_empty_extent() {
    assert!(CropRegion::new(0, 0, 0, 10).is_err());
    assert!(CropRegion::new(0, 0, 10, 0).is_err());
    assert!(CropRegion::new(3, 4, 1, 1).is_ok());
}

#[test]
fn clamp_inside_is_identity() {
    let r = CropRegion::new(2, 3, 4, 5).unwrap();
    assert_eq!(r.clamp_to(10, 10), Some(r));
}

#[test]
fn clamp_trims_overhang() {
    let r = CropRegion::new(6, 8, 10, 10).unwrap();
    assert_eq!(
        r.clamp_to(10, 10),
        Some(CropRegion {
            x: 6,
            y: 8,
            width: 4,
            height: 2
        })
    );
}

#[test]
fn clamp_outside_is_none() {
    let r = CropRegion::new(10, 0, 5, 5).unwrap();
    assert_eq!(r.clamp_to(10, 10), None);
    let r = CropRegion::new(u32::MAX, u32::MAX, u32::MAX, 1).unwrap();
    assert_eq!(r.clamp_to(10, 10), None);
}

#[test]
fn parse_crop_region() {
    let r: CropRegion = "1, 2,30,40".parse().unwrap();
    assert_eq!(r, CropRegion::new(1, 2, 30, 40).unwrap());
    assert!("1,2,3".parse::<CropRegion>().is_err());
    assert!("a,b,c,d".parse::<CropRegion>().is_err());
    assert!("0,0,0,4".parse::<CropRegion>().is_err());
}

#[test]
fn default_color_is_opaque_white() {
    assert_eq!(Rgba8::default().to_array(), [255, 255, 255, 255]);
}
