use crate::bodies::Body;
use crate::forces::distance;

/// Returns true if the two bodies are collided.
///
/// Strict inequality: exact boundary contact does not count.
#[inline]
pub fn is_collided(a: &Body, b: &Body) -> bool {
    distance(a, b) < a.radius + b.radius
}

/// Resolves every colliding pair with per-axis elastic collision kinematics.
///
/// Pairs are visited in ascending `i`, then `j < i` ascending order. Both
/// bodies of a colliding pair are marked `collided` and both velocities are
/// replaced using the closed-form 1-D elastic formulas applied to each axis:
///
/// ```text
/// k1 = 2*m_j / (m_i + m_j)
/// k2 = (m_i - m_j) / (m_i + m_j)
/// k3 = 2*m_i / (m_j + m_i)
/// v_i' = k2 * v_i + k3 * v_j
/// v_j' = k1 * v_i - k2 * v_j
/// ```
///
/// `v_i` is captured before either write, so `v_j'` sees the pre-collision
/// value. A body colliding with several others in the same pass has its
/// velocity overwritten once per pair, each resolution reading the previous
/// one's result. That is a sequential approximation, not a simultaneous
/// multi-body resolution, and the pair order above is part of the engine's
/// observable behavior.
pub fn handle_collisions(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in 0..i {
            if !is_collided(&bodies[i], &bodies[j]) {
                continue;
            }

            let (mi, mj) = (bodies[i].mass, bodies[j].mass);
            let k1 = 2.0 * mj / (mi + mj);
            let k2 = (mi - mj) / (mi + mj);
            let k3 = 2.0 * mi / (mj + mi);

            let vi = bodies[i].velocity;
            let vj = bodies[j].velocity;

            bodies[i].velocity = vi * k2 + vj * k3;
            bodies[j].velocity = vi * k1 - vj * k2;
            bodies[i].collided = true;
            bodies[j].collided = true;
        }
    }
}
