//! Procedural terrain generation.
//!
//! Heights are synthesized by superimposing several octaves of a random base
//! sequence. Each octave samples the base at a coarser stride, fills the gaps
//! with cosine interpolation, and contributes with a weight that halves as the
//! stride grows. The blended profile is normalized by the total weight and
//! rounded to whole rows.

use crate::constants::{BASE_HEIGHT_MAX, BASE_HEIGHT_MIN};
use crate::error::TerrainError;
use rand::Rng;
use std::f64::consts::PI;

/// One integer height per terrain column. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    heights: Vec<i32>,
}

impl Terrain {
    /// Build a terrain from explicit heights. Rejects empty or negative profiles.
    pub fn from_heights(heights: Vec<i32>) -> Result<Self, TerrainError> {
        if heights.is_empty() {
            return Err(TerrainError::ZeroWidth);
        }
        if let Some(column) = heights.iter().position(|&h| h < 0) {
            return Err(TerrainError::NegativeHeight { column });
        }
        Ok(Self { heights })
    }

    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// Height of `column`, or `None` past either edge.
    pub fn height_at(&self, column: i64) -> Option<i32> {
        usize::try_from(column)
            .ok()
            .and_then(|c| self.heights.get(c).copied())
    }
}

/// Smoothly blend `a` into `b`. `mu` runs from 0 (all `a`) to 1 (all `b`).
pub fn cosine_interpolate(a: f64, b: f64, mu: f64) -> f64 {
    let mu2 = (1.0 - (mu * PI).cos()) / 2.0;
    a * (1.0 - mu2) + b * mu2
}

/// Draw the random base sequence that every octave samples from.
pub fn base_sequence<R: Rng>(width: usize, rng: &mut R) -> Vec<f64> {
    (0..width)
        .map(|_| rng.gen_range(BASE_HEIGHT_MIN..BASE_HEIGHT_MAX))
        .collect()
}

/// Check generator parameters and return the coarsest octave stride.
fn coarsest_stride(width: usize, octaves: u32) -> Result<usize, TerrainError> {
    if octaves == 0 {
        return Err(TerrainError::ZeroOctaves);
    }
    if width == 0 {
        return Err(TerrainError::ZeroWidth);
    }
    let stride = 1usize
        .checked_shl(octaves - 1)
        .ok_or(TerrainError::TooManyOctaves { octaves })?;
    if width < stride {
        return Err(TerrainError::WidthTooNarrow { width, stride });
    }
    Ok(stride)
}

/// Blend `octaves` layers of `base` into a rounded height profile.
///
/// Pure: the same base sequence always yields the same profile.
pub fn blend_octaves(base: &[f64], octaves: u32) -> Result<Vec<i32>, TerrainError> {
    coarsest_stride(base.len(), octaves)?;

    let width = base.len();
    let mut blended = vec![0.0; width];
    let mut weight_sum = 0.0;

    for z in (1..=octaves).rev() {
        let weight = 1.0 / 2f64.powi(z as i32 - 1);
        let sample = 1usize << (octaves - z);
        weight_sum += weight;

        // Control points wrap: the last segment blends back into the first.
        let controls: Vec<f64> = base.iter().step_by(sample).copied().collect();
        let mut layer = Vec::with_capacity(controls.len() * sample);
        for (i, &a) in controls.iter().enumerate() {
            let b = controls[(i + 1) % controls.len()];
            layer.push(a);
            for j in 1..sample {
                let mu = j as f64 / sample as f64;
                layer.push(cosine_interpolate(a, b, mu));
            }
        }

        for (acc, value) in blended.iter_mut().zip(layer) {
            *acc += weight * value;
        }
    }

    Ok(blended
        .into_iter()
        .map(|h| (h / weight_sum).round() as i32)
        .collect())
}

/// Generate a fresh terrain `width` columns wide.
pub fn generate_terrain<R: Rng>(
    width: usize,
    octaves: u32,
    rng: &mut R,
) -> Result<Terrain, TerrainError> {
    // Validate before consuming randomness.
    coarsest_stride(width, octaves)?;
    let base = base_sequence(width, rng);
    let heights = blend_octaves(&base, octaves)?;
    Terrain::from_heights(heights)
}
