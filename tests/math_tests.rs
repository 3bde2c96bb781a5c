use approx::assert_relative_eq;
use nbody_engine::math::Vector3;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);
    assert_eq!(diff.z, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);
    assert_eq!(2.0 * v1, scaled);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f64 + 4.0 + 9.0).sqrt());

    // Negation
    let neg = -v1;
    assert_eq!(neg, Vector3::new(-1.0, -2.0, -3.0));
}

#[test]
fn test_vector3_accumulation() {
    let mut acc = Vector3::zero();
    assert!(acc.is_zero());

    acc += Vector3::new(1.0, 0.5, -1.0);
    acc += Vector3::new(2.0, 0.5, -1.0);
    assert_eq!(acc, Vector3::new(3.0, 1.0, -2.0));

    acc -= Vector3::new(3.0, 1.0, -2.0);
    assert!(acc.is_zero());
}

#[test]
fn test_vector3_finiteness() {
    assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vector3::new(f64::INFINITY, 0.0, 0.0).is_finite());
    assert!(!Vector3::new(0.0, f64::NAN, 0.0).is_finite());
}
