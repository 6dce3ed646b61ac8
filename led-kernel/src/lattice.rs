//! Lattice (improved Perlin) noise and its fractal sum
//!
//! The permutation table is the canonical Perlin sequence, compiled in and
//! duplicated to 512 entries so corner hashing never wraps. Rendered patterns
//! depend on this exact order.
//!
//! Both generators implement [`noise::NoiseFn`] so they plug into the `noise`
//! crate's combinators (`ScalePoint`, `Add`, `Turbulence`, ...).

use noise::NoiseFn;

use crate::octave::OctaveParams;

/// Canonical 256-entry Perlin permutation
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// The permutation repeated twice so `PERM[i + 1]` never needs a wrap
pub static PERM: [u8; 512] = duplicate(PERMUTATION);

const fn duplicate(table: [u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = table[i & 255];
        i += 1;
    }
    out
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the hashed gradient with `(x, y, z)`
///
/// The low 4 bits pick one of the 12 cube-edge directions (four repeated).
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = match h {
        0..=3 => y,
        12 | 14 => x,
        _ => z,
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

#[inline]
fn perm(i: usize) -> usize {
    PERM[i] as usize
}

/// Lattice cell index of a coordinate, wrapped to 0..256
#[inline]
fn cell(v: f64) -> usize {
    (v.floor() as i32 & 255) as usize
}

/// 3D lattice noise, mapped to approximately 0.0..1.0
///
/// Integer lattice points return exactly 0.5.
pub fn noise3d(x: f64, y: f64, z: f64) -> f64 {
    let (xi, yi, zi) = (cell(x), cell(y), cell(z));
    let x = x - x.floor();
    let y = y - y.floor();
    let z = z - z.floor();
    let (u, v, w) = (fade(x), fade(y), fade(z));

    let a = perm(xi) + yi;
    let aa = perm(a) + zi;
    let ab = perm(a + 1) + zi;
    let b = perm(xi + 1) + yi;
    let ba = perm(b) + zi;
    let bb = perm(b + 1) + zi;

    let near = lerp(
        v,
        lerp(u, grad(PERM[aa], x, y, z), grad(PERM[ba], x - 1.0, y, z)),
        lerp(
            u,
            grad(PERM[ab], x, y - 1.0, z),
            grad(PERM[bb], x - 1.0, y - 1.0, z),
        ),
    );
    let far = lerp(
        v,
        lerp(
            u,
            grad(PERM[aa + 1], x, y, z - 1.0),
            grad(PERM[ba + 1], x - 1.0, y, z - 1.0),
        ),
        lerp(
            u,
            grad(PERM[ab + 1], x, y - 1.0, z - 1.0),
            grad(PERM[bb + 1], x - 1.0, y - 1.0, z - 1.0),
        ),
    );

    (lerp(w, near, far) + 1.0) / 2.0
}

/// Fractal sum of [`noise3d`] octaves, halved
///
/// Zero octaves returns 0.0.
pub fn fractal_noise3d(x: f64, y: f64, z: f64, params: OctaveParams) -> f64 {
    let total: f64 = params
        .steps()
        .map(|(frequency, amplitude)| {
            let f = f64::from(frequency);
            f64::from(amplitude) * noise3d(f * x, f * y, f * z)
        })
        .sum();
    total / 2.0
}

/// [`noise3d`] as a `noise` crate source
#[derive(Debug, Clone, Copy, Default)]
pub struct Lattice;

impl NoiseFn<f64, 3> for Lattice {
    fn get(&self, point: [f64; 3]) -> f64 {
        noise3d(point[0], point[1], point[2])
    }
}

/// [`fractal_noise3d`] as a `noise` crate source
#[derive(Debug, Clone, Copy, Default)]
pub struct Fractal {
    pub params: OctaveParams,
}

impl Fractal {
    pub fn new(params: OctaveParams) -> Self {
        Self { params }
    }
}

impl NoiseFn<f64, 3> for Fractal {
    fn get(&self, point: [f64; 3]) -> f64 {
        fractal_noise3d(point[0], point[1], point[2], self.params)
    }
}
