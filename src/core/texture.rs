// Procedural wood-grain texture for the desk top.
//
// Generates an RGBA8 pixel buffer: warm walnut base, random specks, wavy
// dark grain lines and a handful of knots. Seeded so the output is
// deterministic and testable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASE: [u8; 3] = [0x6b, 0x44, 0x23];
const SPECK_DARK: [u8; 3] = [0x54, 0x35, 0x1b];
const SPECK_LIGHT: [u8; 3] = [0x8a, 0x5a, 0x32];
const GRAIN: [u8; 3] = [50, 30, 15];
const KNOT: [u8; 3] = [40, 20, 10];

pub struct WoodTexture {
    pub size: u32,
    /// RGBA8, row-major, `size * size * 4` bytes.
    pub pixels: Vec<u8>,
}

impl WoodTexture {
    #[inline]
    fn blend(&mut self, x: i64, y: i64, rgb: [u8; 3], alpha: f32) {
        let s = self.size as i64;
        if x < 0 || y < 0 || x >= s || y >= s {
            return;
        }
        let i = ((y * s + x) * 4) as usize;
        let a = alpha.clamp(0.0, 1.0);
        for c in 0..3 {
            let dst = self.pixels[i + c] as f32;
            self.pixels[i + c] = (dst + (rgb[c] as f32 - dst) * a) as u8;
        }
    }
}

pub fn wood_grain(size: u32, seed: u64) -> WoodTexture {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = (size as usize) * (size as usize);
    let mut pixels = Vec::with_capacity(n * 4);
    for _ in 0..n {
        pixels.extend_from_slice(&[BASE[0], BASE[1], BASE[2], 0xff]);
    }
    let mut tex = WoodTexture { size, pixels };

    // Speck noise, 2x2 blocks
    let specks = n / 26;
    for _ in 0..specks {
        let x = rng.gen_range(0..size) as i64;
        let y = rng.gen_range(0..size) as i64;
        let rgb = if rng.gen_bool(0.5) { SPECK_DARK } else { SPECK_LIGHT };
        for dy in 0..2 {
            for dx in 0..2 {
                tex.blend(x + dx, y + dy, rgb, 1.0);
            }
        }
    }

    // Wavy grain lines
    let lines = (size / 8).max(1);
    for i in 0..lines {
        let y0 = rng.gen_range(0.0..size as f32);
        let thickness = rng.gen_range(1.0..5.0);
        let alpha = rng.gen_range(0.2..0.6);
        for x in 0..size {
            let fx = x as f32;
            let wave = (fx * 0.01 + i as f32).sin() * 15.0 + (fx * 0.05).sin() * 2.0;
            let yc = y0 + wave;
            let half = thickness / 2.0;
            let mut dy = -half;
            while dy <= half {
                tex.blend(x as i64, (yc + dy) as i64, GRAIN, alpha);
                dy += 1.0;
            }
        }
    }

    // Knots: radial darkening with an outline ring
    for _ in 0..5 {
        let cx = rng.gen_range(0.0..size as f32);
        let cy = rng.gen_range(0.0..size as f32);
        let radius: f32 = rng.gen_range(10.0..30.0);
        let squash = 0.6;
        let r_i = radius.ceil() as i64;
        for dy in -r_i..=r_i {
            for dx in -(r_i * 2)..=(r_i * 2) {
                let ex = dx as f32 / radius;
                let ey = dy as f32 / (radius * squash);
                let d = (ex * ex + ey * ey).sqrt();
                if d < 1.0 {
                    let a = if d < 0.6 { 0.9 } else { 0.9 * (1.0 - (d - 0.6) / 0.4) };
                    tex.blend(cx as i64 + dx, cy as i64 + dy, KNOT, a * 0.7);
                } else if d < 1.5 && (d - 1.25).abs() < 0.1 {
                    tex.blend(cx as i64 + dx, cy as i64 + dy, GRAIN, 0.3);
                }
            }
        }
    }

    tex
}
