//! Bending calculator
//!
//! Only weights resting on the bottom row load the board. Their values are
//! summed per column, each half is folded so that index 0 is the column next
//! to the centre, consecutive columns are grouped into distribution areas and
//! every area is scaled by how far it sits from the centre:
//!
//! ```text
//! bending = Σ (right[i] - left[i]) * (scale_sensibility + i * distance_to_center_impact)
//! ```
//!
//! Positive bending means the right (machine) side is heavier. The result is
//! a raw signed magnitude; it is not clamped or normalised.

use crate::types::GameConfig;
use crate::weight::Weight;

/// Sum bottom-row weight values per column.
///
/// Weights on any other row, or outside the board, are ignored.
pub fn column_loads(weights: &[Weight], config: &GameConfig) -> Vec<i64> {
    let mut columns = vec![0i64; config.width as usize];
    let bottom = config.bottom_row();
    for weight in weights {
        let pos = weight.position();
        if pos.y != bottom {
            continue;
        }
        if let Some(slot) = usize::try_from(pos.x).ok().and_then(|x| columns.get_mut(x)) {
            *slot += weight.value() as i64;
        }
    }
    columns
}

/// Group `values` into consecutive chunks of `area` and sum each chunk.
///
/// A trailing partial chunk is summed over what remains. An `area` of 0 is
/// treated as 1.
pub fn calculate_array_distribution(values: &[i64], area: usize) -> Vec<i64> {
    values
        .chunks(area.max(1))
        .map(|chunk| chunk.iter().sum())
        .collect()
}

/// Impact multiplier of the distribution area at `index` from the centre.
pub fn impact_multiplier(index: usize, config: &GameConfig) -> i64 {
    config.scale_sensibility + index as i64 * config.distance_to_center_impact
}

/// Per-area loads of both halves, centre first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

/// Fold the column loads around the centre and bucket each side.
pub fn distribution(weights: &[Weight], config: &GameConfig) -> Distribution {
    let columns = column_loads(weights, config);
    let width = columns.len();

    // Odd widths leave the centre column out of both halves.
    let mut left = columns[..width / 2].to_vec();
    left.reverse();
    let right = &columns[(width + 1) / 2..];

    Distribution {
        left: calculate_array_distribution(&left, config.weight_distribution_area),
        right: calculate_array_distribution(right, config.weight_distribution_area),
    }
}

/// Signed bending of the board under `weights`.
pub fn calculate_bending(weights: &[Weight], config: &GameConfig) -> i64 {
    let Distribution { left, right } = distribution(weights, config);
    let areas = left.len().max(right.len());

    (0..areas)
        .map(|i| {
            let r = right.get(i).copied().unwrap_or(0);
            let l = left.get(i).copied().unwrap_or(0);
            (r - l) * impact_multiplier(i, config)
        })
        .sum()
}
