//! Per-filter sample history carried across streaming calls.

/// Trailing input and output samples of one [`Filter`](crate::Filter).
///
/// Both buffers are ordered oldest to newest, so `past_x().last()` is the most
/// recent input sample. Their lengths are fixed when the filter is built:
/// `len(b) - 1` inputs and `len(a) - 1` outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterHistory {
    past_x: Vec<f64>,
    past_y: Vec<f64>,
}

impl FilterHistory {
    /// Zeroed history remembering `inputs` past inputs and `outputs` past outputs.
    pub fn zeroed(inputs: usize, outputs: usize) -> Self {
        Self {
            past_x: vec![0.0; inputs],
            past_y: vec![0.0; outputs],
        }
    }

    /// Past input samples, oldest first.
    #[inline]
    pub fn past_x(&self) -> &[f64] {
        &self.past_x
    }

    /// Past output samples, oldest first.
    #[inline]
    pub fn past_y(&self) -> &[f64] {
        &self.past_y
    }

    /// Mutable past inputs. The length cannot change.
    #[inline]
    pub fn past_x_mut(&mut self) -> &mut [f64] {
        &mut self.past_x
    }

    /// Mutable past outputs. The length cannot change.
    #[inline]
    pub fn past_y_mut(&mut self) -> &mut [f64] {
        &mut self.past_y
    }

    /// Zeroes both buffers in place.
    pub fn clear(&mut self) {
        self.past_x.fill(0.0);
        self.past_y.fill(0.0);
    }

    /// Fills past inputs with `x` and past outputs with `y`.
    pub fn fill(&mut self, x: f64, y: f64) {
        self.past_x.fill(x);
        self.past_y.fill(y);
    }

    /// True when every remembered sample is zero.
    pub fn is_clear(&self) -> bool {
        self.past_x.iter().chain(self.past_y.iter()).all(|&s| s == 0.0)
    }
}
