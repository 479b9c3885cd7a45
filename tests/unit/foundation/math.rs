use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn usable_aspect_rejects_degenerate_values() {
    assert_eq!(usable_aspect(1.5), Some(1.5));
    assert_eq!(usable_aspect(0.0), None);
    assert_eq!(usable_aspect(-1.0), None);
    assert_eq!(usable_aspect(f64::NAN), None);
    assert_eq!(usable_aspect(f64::INFINITY), None);
}

#[test]
fn aspect_of_dimensions() {
    assert_eq!(aspect_of(400, 500), Some(0.8));
    assert_eq!(aspect_of(10, 0), None);
    assert_eq!(aspect_of(0, 10), None);
}

#[test]
fn height_for_aspect_rounds_and_floors_at_one() {
    assert_eq!(height_for_aspect(800, 1.0), Some(800));
    assert_eq!(height_for_aspect(2000, 0.8), Some(2500));
    assert_eq!(height_for_aspect(2000, 1.08), Some(1852));
    assert_eq!(height_for_aspect(1, 1000.0), Some(1));
    assert_eq!(height_for_aspect(u32::MAX, 1e-6), None);
}
