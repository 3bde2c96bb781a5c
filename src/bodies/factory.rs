use crate::bodies::Body;
use crate::error::SimulationError;
use crate::math::Vector3;
use crate::Result;

use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Construct a body set from a whitespace-separated text description.
///
/// The format is the body count followed by one `x y z mass radius` record
/// per body. All bodies start at rest with no acceleration.
pub fn bodies_from_reader<R: Read>(mut reader: R) -> Result<Vec<Body>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let count: usize = next_value(&mut tokens, "body count")?;

    let mut bodies = Vec::with_capacity(count);
    for _ in 0..count {
        let x = next_value(&mut tokens, "position x")?;
        let y = next_value(&mut tokens, "position y")?;
        let z = next_value(&mut tokens, "position z")?;
        let mass = next_value(&mut tokens, "mass")?;
        let radius = next_value(&mut tokens, "radius")?;
        bodies.push(Body::new(Vector3::new(x, y, z), mass, radius));
    }

    Ok(bodies)
}

/// Construct a body set from a text file (see [`bodies_from_reader`])
pub fn bodies_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Body>> {
    let file = File::open(path)?;
    bodies_from_reader(file)
}

/// Generate `count` random bodies at rest.
///
/// Positions are uniform in a cube around the origin, masses and radii are
/// uniform in positive ranges, so the generated set satisfies the engine's
/// caller contract (positive mass, non-negative radius).
pub fn random_bodies<R: Rng>(count: usize, rng: &mut R) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(count);

    for _ in 0..count {
        let position = Vector3::new(
            rng.gen_range(-1.0e6..1.0e6),
            rng.gen_range(-1.0e6..1.0e6),
            rng.gen_range(-1.0e6..1.0e6),
        );
        let mass = rng.gen_range(1.0e20..1.0e24);
        let radius = rng.gen_range(1.0e2..1.0e4);
        bodies.push(Body::new(position, mass, radius));
    }

    bodies
}

fn next_value<'a, I, T>(tokens: &mut I, what: &str) -> Result<T>
where
    I: Iterator<Item = &'a str>,
    T: std::str::FromStr,
{
    let token = tokens
        .next()
        .ok_or_else(|| SimulationError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| SimulationError::Parse(format!("invalid {what}: {token:?}")))
}
