use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::ToolResult;
use crate::core::split::SplitRatios;

/// Disjoint assignment of samples to the three split buckets.
#[derive(Debug, Clone, Default)]
pub struct Partition<T> {
    pub train: Vec<T>,
    pub val: Vec<T>,
    pub test: Vec<T>,
}

impl<T> Partition<T> {
    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }
}

/// Shuffle `samples` and partition them by the given ratios.
///
/// Counts are `floor(ratio * total)` for train and val; the remainder
/// lands in the test bucket, so rounding loss always falls into the last
/// partition. When the test ratio is zero, the remainder past
/// `n_train + n_val` is discarded rather than assigned anywhere, so a
/// handful of samples can be dropped from the output when flooring
/// loses ground.
///
/// The RNG is caller-supplied so runs can be made reproducible; empty
/// input yields an empty partition without touching the ratios.
pub fn partition<T, R: Rng>(
    mut samples: Vec<T>,
    ratios: &SplitRatios,
    rng: &mut R,
) -> ToolResult<Partition<T>> {
    ratios.validate()?;

    let total = samples.len();
    if total == 0 {
        return Ok(Partition {
            train: Vec::new(),
            val: Vec::new(),
            test: Vec::new(),
        });
    }

    samples.shuffle(rng);

    // Multiply in f32: the single rounding step lands 0.7 * 10 on 7.0
    // exactly, where widening to f64 first would floor to 6.
    let n_train = ((ratios.train * total as f32) as usize).min(total);
    let n_val = (ratios.val * total as f32) as usize;

    let mut rest = samples.split_off(n_train);
    let train = samples;
    let n_val = n_val.min(rest.len());
    let remainder = rest.split_off(n_val);
    let val = rest;

    let test = if ratios.has_test() {
        remainder
    } else {
        Vec::new()
    };

    Ok(Partition { train, val, test })
}
