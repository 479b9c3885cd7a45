use super::*;

fn tiny_image() -> ComposedImage {
    ComposedImage {
        width: 1,
        height: 1,
        png: vec![1, 2, 3],
    }
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Lan".to_owned(),
        phone: "0900 000 000".to_owned(),
        notes: "matte, please".to_owned(),
    }
}

#[test]
fn payload_has_wire_shape() {
    let table = RateTable::ranged().unwrap();
    let p = OrderPayload::priced(&table, customer(), "Màng Sleeve", "5x7", 20, &tiny_image())
        .unwrap();
    let v: serde_json::Value = serde_json::from_str(&p.to_json().unwrap()).unwrap();

    assert_eq!(v["name"], "Lan");
    assert_eq!(v["phone"], "0900 000 000");
    assert_eq!(v["notes"], "matte, please");
    assert_eq!(v["category"], "Màng Sleeve");
    assert_eq!(v["size"], "5x7");
    assert_eq!(
        v["price"],
        serde_json::json!({ "unitPrice": 1300, "quantity": 20, "total": 26000 })
    );
    assert_eq!(v["image"], "data:image/png;base64,AQID");
    assert!(v["id"].as_str().unwrap().parse::<Uuid>().is_ok());

    // RFC 3339 UTC, e.g. 2026-10-18T09:30:00.123456Z
    let created = v["createdAt"].as_str().unwrap();
    let (date, clock) = created.split_once('T').unwrap();
    assert_eq!(date.len(), 10, "{created}");
    assert_eq!(date.as_bytes()[4], b'-');
    assert!(clock.ends_with('Z'), "{created}");
    assert!(date[..4].parse::<i32>().unwrap() >= 2024);
}

#[test]
fn unmatched_quantity_is_priced_zero() {
    let table = RateTable::ranged().unwrap();
    let p = OrderPayload::priced(&table, customer(), "Màng Sleeve", "5x7", 3, &tiny_image())
        .unwrap();
    assert_eq!(p.price, PriceBreakdown::new(0, 3));

    let p = OrderPayload::priced(&table, customer(), "nope", "5x7", 20, &tiny_image()).unwrap();
    assert_eq!(p.price.total, 0);
}

#[test]
fn free_bracket_is_a_match_not_a_miss() {
    let table = RateTable::from_json_str(r#"{"Sample":{"4x6":{"1-5":0,"6+":900}}}"#).unwrap();
    assert_eq!(resolve(&table, "Sample", "4x6", 2), Some(0));

    let p = OrderPayload::priced(&table, customer(), "Sample", "4x6", 2, &tiny_image()).unwrap();
    assert_eq!(p.price, PriceBreakdown::new(0, 2));
    let p = OrderPayload::priced(&table, customer(), "Sample", "4x6", 6, &tiny_image()).unwrap();
    assert_eq!(p.price.total, 5400);
}

#[test]
fn ids_are_fresh_per_payload() {
    let price = PriceBreakdown::new(1, 1);
    let a = OrderPayload::new(customer(), "c", "s", price, &tiny_image()).unwrap();
    let b = OrderPayload::new(customer(), "c", "s", price, &tiny_image()).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn payload_deserializes_back() {
    let price = PriceBreakdown::new(1500, 12);
    let p = OrderPayload::new(customer(), "c", "s", price, &tiny_image()).unwrap();
    let back: OrderPayload = serde_json::from_str(&p.to_json().unwrap()).unwrap();
    assert_eq!(back, p);
}
