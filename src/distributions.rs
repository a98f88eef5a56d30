//! Probability distributions sampled from a uniform source.
//!
//! Each distribution is exposed twice:
//!
//! - as a pure transform of uniform values (`*_inverse_cdf`, [`box_muller`])
//!   plus a free sampling function that draws from a [`UniformSource`];
//! - as a parameter struct with a checked constructor (`new`), an unchecked
//!   constructor (`unchecked`), analytical moments, and a `sample` method.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Method | Draws per sample |
//! |---|---|---|---|
//! | [`Exponential`] | rate λ | inversion | 1 |
//! | [`Triangular`] | low, high, mode | inverse CDF | 1 |
//! | [`Normal`] | μ, σ | Box–Muller, cached pair | 2 per pair |
//!
//! # Degenerate parameters
//!
//! The free functions and `unchecked` structs never validate. Out-of-domain
//! parameters yield NaN or infinity, which is returned to the caller as is.

use log::trace;

use crate::random::UniformSource;

/// Smallest `u1` the Box–Muller transform accepts; anything at or below it is
/// redrawn so that `ln(u1)` stays finite.
const MIN_U1: f64 = f64::MIN_POSITIVE;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

// ============================================================================
// Exponential Distribution
// ============================================================================

/// Inverse CDF of the exponential distribution: `ln(1 − u) / (−rate)`.
///
/// At `u = 1` this is `ln(0) / (−rate)`, i.e. `+∞` for a positive rate.
///
/// # Examples
/// ```
/// use u_sampling::distributions::exponential_inverse_cdf;
/// let x = exponential_inverse_cdf(2.0, 0.5);
/// assert!((x - 0.5_f64.ln() / -2.0).abs() < 1e-12);
/// ```
pub fn exponential_inverse_cdf(rate: f64, u: f64) -> f64 {
    (1.0 - u).ln() / -rate
}

/// Draws one exponential sample by inversion, consuming one uniform draw.
///
/// `rate` is not validated.
pub fn exponential_sample<S: UniformSource + ?Sized>(rate: f64, source: &mut S) -> f64 {
    let u = source.next_uniform();
    exponential_inverse_cdf(rate, u)
}

/// Exponential distribution with rate λ.
///
/// # Mathematical Definition
/// - PDF: f(x) = λ·exp(−λx) for x ≥ 0
/// - CDF: F(x) = 1 − exp(−λx)
/// - Mean: 1/λ
/// - Variance: 1/λ²
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates a new exponential distribution.
    ///
    /// # Errors
    /// Returns `Err` if `rate ≤ 0` or is not finite.
    pub fn new(rate: f64) -> Result<Self, DistributionError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Exponential requires finite rate > 0, got rate={rate}"
            )));
        }
        Ok(Self { rate })
    }

    /// Creates an exponential distribution without checking `rate`.
    pub fn unchecked(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    /// CDF: F(x) = 1 − exp(−λx) for x ≥ 0, 0 otherwise.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            1.0 - (-self.rate * x).exp()
        }
    }

    /// Inverse CDF: −ln(1−p)/λ.
    ///
    /// Returns `None` if `p` is outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(exponential_inverse_cdf(self.rate, p))
    }

    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        exponential_sample(self.rate, source)
    }
}

// ============================================================================
// Triangular Distribution
// ============================================================================

/// Inverse CDF of the triangular distribution.
///
/// ```text
/// F      = (mode − low) / (high − low)
/// F⁻¹(u) = low  + √(u·(high−low)·(mode−low))        if u ≤ F
///        = high − √((1−u)·(high−low)·(high−mode))   otherwise
/// ```
///
/// Both branches meet at `u = F`, where the result is `mode`.
///
/// # Examples
/// ```
/// use u_sampling::distributions::triangular_inverse_cdf;
/// let x = triangular_inverse_cdf(1.0, 100.0, 50.0, 0.3);
/// assert!((x - (1.0 + (0.3_f64 * 99.0 * 49.0).sqrt())).abs() < 1e-12);
/// ```
pub fn triangular_inverse_cdf(low: f64, high: f64, mode: f64, u: f64) -> f64 {
    let split = (mode - low) / (high - low);
    if u <= split {
        low + (u * (high - low) * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * (high - low) * (high - mode)).sqrt()
    }
}

/// Draws one triangular sample, consuming one uniform draw.
///
/// Parameters are not validated.
pub fn triangular_sample<S: UniformSource + ?Sized>(
    low: f64,
    high: f64,
    mode: f64,
    source: &mut S,
) -> f64 {
    let u = source.next_uniform();
    triangular_inverse_cdf(low, high, mode, u)
}

/// Triangular distribution on `[low, high]` peaking at `mode`.
///
/// # Mathematical Definition
/// - PDF: piecewise linear, peaking at mode
/// - CDF: piecewise quadratic
/// - Mean: (low + mode + high) / 3
/// - Variance: (a² + b² + c² − ab − ac − bc) / 18
///
/// Reference: Johnson, Kotz & Balakrishnan (1995), *Continuous Univariate
/// Distributions*, Vol. 2, Chapter 26.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangular {
    low: f64,
    high: f64,
    mode: f64,
}

impl Triangular {
    /// Creates a new triangular distribution.
    ///
    /// # Errors
    /// Returns `Err` if `low >= high` or `mode` is outside `[low, high]`.
    pub fn new(low: f64, high: f64, mode: f64) -> Result<Self, DistributionError> {
        if !low.is_finite() || !high.is_finite() || !mode.is_finite() {
            return Err(DistributionError::InvalidParameters(
                "Triangular parameters must be finite".into(),
            ));
        }
        if low > mode || mode > high || low >= high {
            return Err(DistributionError::InvalidParameters(format!(
                "Triangular requires low ≤ mode ≤ high and low < high, got low={low}, high={high}, mode={mode}"
            )));
        }
        Ok(Self { low, high, mode })
    }

    /// Creates a triangular distribution without checking its parameters.
    pub fn unchecked(low: f64, high: f64, mode: f64) -> Self {
        Self { low, high, mode }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Mean = (low + mode + high) / 3.
    pub fn mean(&self) -> f64 {
        (self.low + self.mode + self.high) / 3.0
    }

    /// Variance = (a² + b² + c² − ab − ac − bc) / 18.
    pub fn variance(&self) -> f64 {
        let (a, b, c) = (self.low, self.mode, self.high);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }

    /// CDF of the triangular distribution.
    ///
    /// ```text
    /// F(x) = (x−a)² / ((c−a)(b−a))       for a ≤ x ≤ b
    ///      = 1 − (c−x)² / ((c−a)(c−b))   for b < x ≤ c
    /// ```
    pub fn cdf(&self, x: f64) -> f64 {
        let (a, b, c) = (self.low, self.mode, self.high);
        if x <= a {
            0.0
        } else if x <= b {
            (x - a) * (x - a) / ((c - a) * (b - a).max(f64::MIN_POSITIVE))
        } else if x < c {
            1.0 - (c - x) * (c - x) / ((c - a) * (c - b).max(f64::MIN_POSITIVE))
        } else {
            1.0
        }
    }

    /// Inverse CDF, see [`triangular_inverse_cdf`].
    ///
    /// Returns `None` if `p` is outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(triangular_inverse_cdf(self.low, self.high, self.mode, p))
    }

    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        triangular_sample(self.low, self.high, self.mode, source)
    }
}

// ============================================================================
// Normal Distribution
// ============================================================================

/// Box–Muller transform of two uniforms into two independent standard
/// normals `(z0, z1)`.
///
/// ```text
/// r  = √(−2 ln u1)
/// z0 = r · cos(2π u2)
/// z1 = r · sin(2π u2)
/// ```
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = std::f64::consts::TAU * u2;
    (r * theta.cos(), r * theta.sin())
}

/// Stateful normal sampler holding the unused half of a Box–Muller pair.
///
/// Successive calls alternate strictly: the first call of a pair draws two
/// uniforms and returns `z0·σ + μ`, the second returns the cached `z1·σ + μ`
/// without drawing. A freshly constructed sampler always starts a new pair.
///
/// Each independent stream of normal samples should own its own sampler.
///
/// # Examples
/// ```
/// use u_sampling::distributions::NormalSampler;
/// use u_sampling::random::ReplaySource;
///
/// let mut source = ReplaySource::new(vec![0.5, 0.1]);
/// let mut sampler = NormalSampler::new();
/// let _first = sampler.sample(0.0, 1.0, &mut source);
/// let _second = sampler.sample(0.0, 1.0, &mut source);
/// assert_eq!(source.draws(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalSampler {
    z0: f64,
    z1: f64,
    /// Flipped on every call; `true` after the flip means "draw a new pair".
    generate: bool,
}

impl NormalSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next call will return the cached `z1` instead of drawing.
    pub fn has_pending(&self) -> bool {
        self.generate
    }

    /// The most recent Box–Muller pair `(z0, z1)`.
    pub fn last_pair(&self) -> (f64, f64) {
        (self.z0, self.z1)
    }

    /// Draws one normal sample with mean `mu` and standard deviation `sigma`.
    ///
    /// Neither parameter is validated; a negative `sigma` mirrors the sample
    /// around `mu`.
    pub fn sample<S: UniformSource + ?Sized>(
        &mut self,
        mu: f64,
        sigma: f64,
        source: &mut S,
    ) -> f64 {
        self.generate = !self.generate;
        if !self.generate {
            return self.z1 * sigma + mu;
        }

        let (u1, u2) = loop {
            let u1 = source.next_uniform();
            let u2 = source.next_uniform();
            if u1 > MIN_U1 {
                break (u1, u2);
            }
            trace!("box-muller: rejected u1={u1}, redrawing");
        };

        let (z0, z1) = box_muller(u1, u2);
        self.z0 = z0;
        self.z1 = z1;
        z0 * sigma + mu
    }
}

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - Mean: μ
/// - Variance: σ²
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `Err` if `sigma ≤ 0` or parameters are not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// Creates a normal distribution without checking its parameters.
    pub fn unchecked(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    pub fn std_dev(&self) -> f64 {
        self.sigma
    }

    /// Draws one sample through `sampler`, which keeps the pair cache.
    pub fn sample<S: UniformSource + ?Sized>(
        &self,
        sampler: &mut NormalSampler,
        source: &mut S,
    ) -> f64 {
        sampler.sample(self.mu, self.sigma, source)
    }
}

// ============================================================================
// Tests
// ============================================================================
