use solar_nbody::vector::Vector3;

#[test]
fn componentwise_vector_arithmetic() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, -5.0, 0.5);

    assert_eq!(a + b, Vector3::new(5.0, -3.0, 3.5));
    assert_eq!(a - b, Vector3::new(-3.0, 7.0, 2.5));
    assert_eq!(a * b, Vector3::new(4.0, -10.0, 1.5));
    assert_eq!(a / b, Vector3::new(0.25, -0.4, 6.0));
}

#[test]
fn scalar_arithmetic_applies_to_every_component() {
    let v = Vector3::new(2.0, -4.0, 8.0);

    assert_eq!(v + 1.0, Vector3::new(3.0, -3.0, 9.0));
    assert_eq!(v - 1.0, Vector3::new(1.0, -5.0, 7.0));
    assert_eq!(v * 0.5, Vector3::new(1.0, -2.0, 4.0));
    assert_eq!(v / 2.0, Vector3::new(1.0, -2.0, 4.0));
}

#[test]
fn operators_leave_operands_untouched() {
    let a = Vector3::new(1.0, 1.0, 1.0);
    let b = Vector3::new(2.0, 3.0, 4.0);
    let _ = a + b;
    let _ = a * 10.0;
    assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(b, Vector3::new(2.0, 3.0, 4.0));
}

#[test]
fn accumulate_mutates_only_the_receiver() {
    let mut sum = Vector3::zero();
    let step = Vector3::new(0.5, -1.0, 2.0);
    sum += step;
    sum += step;
    assert_eq!(sum, Vector3::new(1.0, -2.0, 4.0));
    assert_eq!(step, Vector3::new(0.5, -1.0, 2.0));
}

#[test]
fn magnitude_is_euclidean_norm() {
    assert_eq!(Vector3::new(3.0, 4.0, 12.0).magnitude(), 13.0);
    assert_eq!(Vector3::new(-3.0, -4.0, 0.0).magnitude(), 5.0);
    assert_eq!(Vector3::zero().magnitude(), 0.0);
    assert!(Vector3::new(1e-200, 0.0, 0.0).magnitude() >= 0.0);
}

#[test]
fn division_by_zero_yields_non_finite_components() {
    let v = Vector3::new(1.0, -1.0, 0.0);

    let by_scalar = v / 0.0;
    assert_eq!(by_scalar.x, f64::INFINITY);
    assert_eq!(by_scalar.y, f64::NEG_INFINITY);
    assert!(by_scalar.z.is_nan());
    assert!(!by_scalar.is_finite());

    let by_vector = v / Vector3::new(2.0, 0.0, 1.0);
    assert_eq!(by_vector.x, 0.5);
    assert_eq!(by_vector.y, f64::NEG_INFINITY);
    assert!(!by_vector.is_finite());
}

#[test]
fn array_conversions_preserve_component_order() {
    let v = Vector3::from([7.0, 8.0, 9.0]);
    assert_eq!((v.x, v.y, v.z), (7.0, 8.0, 9.0));
    let back: [f64; 3] = v.into();
    assert_eq!(back, [7.0, 8.0, 9.0]);
    assert_eq!(Vector3::default(), Vector3::zero());
    assert_eq!(v.dot(&Vector3::new(1.0, 0.0, -1.0)), -2.0);
}
