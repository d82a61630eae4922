//! Eigenschaftsbasierte Tests für die Verträge der Formen.
//!
//! Verknüpfte Maße müssen hin und zurück übereinstimmen, Fläche und Umfang
//! folgen den geschlossenen Formeln, wiederholtes Skalieren multipliziert sich.

use approx::relative_eq;
use proptest::prelude::*;
use shapes::prelude::*;
use std::f64::consts::PI;

fn positive() -> impl Strategy<Value = f64> {
    1e-3..1e3_f64
}

fn factor() -> impl Strategy<Value = f64> {
    1e-2..1e2_f64
}

proptest! {
    #[test]
    fn circumference_follows_radius(r in positive()) {
        let circle = Circle::with_radius(r).unwrap();
        prop_assert!(relative_eq!(circle.circumference(), 2.0 * PI * r, max_relative = 1e-12));

        let back = Circle::with_circumference(circle.circumference()).unwrap();
        prop_assert!(relative_eq!(back.radius(), r, max_relative = 1e-12));
    }

    #[test]
    fn square_area_and_perimeter(s in positive()) {
        let square = Square::new(s).unwrap();
        prop_assert!(relative_eq!(square.area(), s * s, max_relative = 1e-12));
        prop_assert!(relative_eq!(square.perimeter(), 4.0 * s, max_relative = 1e-12));
    }

    #[test]
    fn radius_scaling_composes(r in positive(), a in factor(), b in factor()) {
        let mut stepwise = Circle::with_radius(r).unwrap();
        stepwise.scale(a, "radius").unwrap();
        stepwise.scale(b, "radius").unwrap();

        let mut once = Circle::with_radius(r).unwrap();
        once.scale(a * b, "radius").unwrap();

        prop_assert!(relative_eq!(stepwise.radius(), once.radius(), max_relative = 1e-12));
    }

    #[test]
    fn area_scaling_multiplies_area(s in positive(), k in factor()) {
        let mut square = Square::new(s).unwrap();
        let before = square.area();
        square.scale(k, "area").unwrap();
        prop_assert!(relative_eq!(square.area(), before * k, max_relative = 1e-9));

        let mut circle = Circle::with_radius(s).unwrap();
        let before = circle.area();
        circle.scale(k, "AREA").unwrap();
        prop_assert!(relative_eq!(circle.area(), before * k, max_relative = 1e-9));
    }

    #[test]
    fn unknown_scaling_mode_is_value_error(how in "[a-z]{1,12}") {
        prop_assume!(!["area", "radius", "circumference"].contains(&how.as_str()));
        let mut circle = Circle::with_radius(1.0).unwrap();
        let err = circle.scale(2.0, &how).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Value);
        prop_assert_eq!(circle.radius(), 1.0);
    }

    #[test]
    fn color_channels_in_range_are_accepted(r in 0i64..=255, g in 0i64..=255, b in 0i64..=255) {
        let color = Color::new(r, g, b).unwrap();
        prop_assert_eq!(color.to_string(), format!("({r}, {g}, {b})"));
    }

    #[test]
    fn color_channels_out_of_range_are_rejected(r in 256i64..10_000) {
        prop_assert_eq!(Color::new(r, 0, 0).unwrap_err().kind(), ErrorKind::Value);
        prop_assert_eq!(Color::new(0, -r, 0).unwrap_err().kind(), ErrorKind::Value);
    }
}

#[test]
fn documented_error_kinds() {
    assert_eq!(Circle::new(None, None).unwrap_err().kind(), ErrorKind::Argument);
    assert_eq!(
        Circle::new(Some(1.0), Some(1.0)).unwrap_err().kind(),
        ErrorKind::Argument
    );
    assert_eq!(Circle::with_radius(-1.0).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(Square::new(0.0).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(Color::new(256, 0, 0).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(Color::from_f64(1.5, 0.0, 0.0).unwrap_err().kind(), ErrorKind::Type);
}

#[test]
fn area_ordering() {
    let two = Circle::with_radius(2.0).unwrap();
    let larger = Circle::with_radius(2.5).unwrap();
    let same = Circle::with_radius(2.0).unwrap();

    assert!(ByArea(&two) < ByArea(&larger));
    assert!(!(ByArea(&two) < ByArea(&same)));
}

#[test]
fn circle_rejects_sides() {
    let mut circle = Circle::with_radius(1.0).unwrap();
    let err = circle.set_sides(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn square_area_scaling_scenario() {
    let mut square = Square::new(3.0).unwrap();
    square.scale(2.0, "area").unwrap();
    assert!(relative_eq!(square.side_length(), 4.2426, epsilon = 1e-4));
    assert!(relative_eq!(square.area(), 18.0, epsilon = 1e-9));
}

#[test]
fn circle_area_scaling_scenario() {
    let mut circle = Circle::with_radius(1.0).unwrap();
    circle.scale(4.0, "area").unwrap();
    assert!(relative_eq!(circle.radius(), 2.0, epsilon = 1e-12));
}
