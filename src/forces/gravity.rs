use crate::bodies::Body;
use crate::math::Vector3;

/// Gravitational constant
pub const G: f64 = 6.67408e-11;

/// Returns the Euclidean distance between two bodies' positions
#[inline]
pub fn distance(a: &Body, b: &Body) -> f64 {
    (b.position - a.position).length()
}

/// Gravitational acceleration contribution on a body at `at` due to a
/// single attractor of mass `mass` at `attractor`.
///
/// This is `G * m / d^3 * (attractor - at)`, the standard law-of-gravitation
/// term. There is no softening and no guard against zero separation: two
/// coincident positions divide by zero and the resulting infinite/NaN
/// acceleration propagates. Avoiding degenerate configurations is the
/// caller's responsibility.
#[inline]
pub fn pairwise_acceleration(at: Vector3, attractor: Vector3, mass: f64) -> Vector3 {
    let r = attractor - at;
    let d = r.length();
    r * (G * mass / (d * d * d))
}

/// Recomputes `bodies[index].acceleration` from scratch as the sum of the
/// gravitational contributions of every other body, and clears the body's
/// `collided` flag.
///
/// The flag reset is deliberately part of the acceleration phase: it must
/// happen before the same second's collision phase, which sets the flag back
/// for any newly colliding pair.
pub fn update_acceleration(bodies: &mut [Body], index: usize) {
    let at = bodies[index].position;
    let mut acceleration = Vector3::zero();

    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        acceleration += pairwise_acceleration(at, other.position, other.mass);
    }

    let body = &mut bodies[index];
    body.acceleration = acceleration;
    body.collided = false;
}
