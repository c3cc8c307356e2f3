use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("series is empty")]
    EmptyInput,

    #[error("series has {len} elements, but at least 2 are required")]
    InsufficientData { len: usize },

    #[error("series lengths differ ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("series has zero variance, correlation is undefined")]
    ZeroVariance,
}

/// Two equal-length numeric series, paired element-wise.
pub struct PairedDataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
    pub correlation: f64,
}

impl PairedDataset {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, StatsError> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn compute(&self) -> Result<StatsResult, StatsError> {
        Ok(StatsResult {
            mean_x: mean(&self.x)?,
            mean_y: mean(&self.y)?,
            std_dev_x: sample_std_dev(&self.x)?,
            std_dev_y: sample_std_dev(&self.y)?,
            correlation: correlation_coefficient(&self.x, &self.y)?,
        })
    }
}

pub fn mean(series: &[f64]) -> Result<f64, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Compute the Bessel-corrected (n - 1) sample standard deviation.
pub fn sample_std_dev(series: &[f64]) -> Result<f64, StatsError> {
    let n_vals = series.len();
    if n_vals < 2 {
        return Err(StatsError::InsufficientData { len: n_vals });
    }
    let mean = mean(series)?;
    let diff_2_sum = series.iter().map(|&val| (val - mean).powi(2)).sum::<f64>();
    Ok((diff_2_sum / (n_vals - 1) as f64).sqrt())
}

/// Compute the Pearson correlation coefficient between two series.
///
/// Numerator and denominator are both left unnormalized so the n factors
/// cancel; the result is identical whether population or sample
/// normalization is applied to both.
pub fn correlation_coefficient(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::InsufficientData { len: x.len() });
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut cov_sum = 0.0;
    let mut diff_2_sum_x = 0.0;
    let mut diff_2_sum_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let diff_x = xi - mean_x;
        let diff_y = yi - mean_y;
        cov_sum += diff_x * diff_y;
        diff_2_sum_x += diff_x * diff_x;
        diff_2_sum_y += diff_y * diff_y;
    }

    if diff_2_sum_x == 0.0 || diff_2_sum_y == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    Ok(cov_sum / (diff_2_sum_x.sqrt() * diff_2_sum_y.sqrt()))
}
