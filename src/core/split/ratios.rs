use crate::core::error::ToolError;

/// Target fractions for the train/val/test partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    pub train: f32,
    pub val: f32,
    pub test: f32,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.70,
            val: 0.20,
            test: 0.10,
        }
    }
}

impl SplitRatios {
    /// Check that the ratios are non-negative and sum to 1.0.
    ///
    /// The sum is rounded to 2 decimals before comparison, so 0.7 + 0.2 +
    /// 0.1 passes despite float accumulation error.
    pub fn validate(&self) -> Result<(), ToolError> {
        let sum = self.train + self.val + self.test;
        if self.train < 0.0 || self.val < 0.0 || self.test < 0.0 {
            return Err(ToolError::InvalidRatios(sum));
        }
        if (sum * 100.0).round() / 100.0 != 1.0 {
            return Err(ToolError::InvalidRatios(sum));
        }
        Ok(())
    }

    /// A zero test ratio disables the test partition entirely.
    pub fn has_test(&self) -> bool {
        self.test > 0.0
    }
}
