//! Interactive console session.
//!
//! A [`Session`] prompts for the parameters of each distribution in turn,
//! draws one sample from each, and writes the results:
//!
//! 1. exponential rate → `Exponential distribution: …`
//! 2. triangular min, max, mode → `Triangular distribution: …`
//! 3. normal mean, standard deviation → `Normal distribution: …`
//!
//! Steps are separated by a line of dashes. The session stops at the first
//! missing or malformed number.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::distributions::{Exponential, Normal, NormalSampler, Triangular};
use crate::error::SessionError;
use crate::format::format_general;
use crate::input::TokenReader;
use crate::random::UniformSource;

pub const EXPONENTIAL_PROMPT: &str =
    "1. For the exponential distribution enter the seed (value greater than 1).\n\
     NOTE: Smaller seed values produce more spread out random numbers and vice versa.\n";

pub const TRIANGULAR_PROMPT: &str =
    "2. For the triangular distribution enter the min, max and mode values separated by spaces.\n";

pub const NORMAL_PROMPT: &str = "3. For the normal distribution enter the median and standard \
     deviation values separated by spaces.\n";

pub const SEPARATOR: &str = "--------------------------------------------------------------";

/// `(low, high, mode)` used by [`TriangularInput::FixedLiteral`].
pub const FIXED_TRIANGULAR: (f64, f64, f64) = (1.0, 100.0, 50.0);

/// Where the triangular step takes its parameters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangularInput {
    /// Use the min, max and mode the user entered.
    #[default]
    UserSupplied,
    /// Read the three values but sample with [`FIXED_TRIANGULAR`].
    FixedLiteral,
}

/// Session behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub triangular: TriangularInput,
    /// Validate parameters and fail with a domain error instead of
    /// propagating NaN or infinity.
    pub strict: bool,
}

/// The three samples produced by one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReport {
    pub exponential: f64,
    pub triangular: f64,
    pub normal: f64,
}

/// One prompt/sample/print pass over the three distributions.
pub struct Session<R, W, S> {
    input: TokenReader<R>,
    output: W,
    source: S,
    normal: NormalSampler,
    config: SessionConfig,
}

impl<R: BufRead, W: Write, S: UniformSource> Session<R, W, S> {
    pub fn new(input: R, output: W, source: S, config: SessionConfig) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            source,
            normal: NormalSampler::new(),
            config,
        }
    }

    /// Runs all three steps and returns the samples that were printed.
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        let exponential = self.exponential_step()?;
        writeln!(self.output, "{SEPARATOR}")?;
        let triangular = self.triangular_step()?;
        writeln!(self.output, "{SEPARATOR}")?;
        let normal = self.normal_step()?;
        self.output.flush()?;

        Ok(SessionReport {
            exponential,
            triangular,
            normal,
        })
    }

    fn exponential_step(&mut self) -> Result<f64, SessionError> {
        self.prompt(EXPONENTIAL_PROMPT)?;
        let rate = self.input.next_f64("exponential rate")?;

        let exponential = if self.config.strict {
            Exponential::new(rate)?
        } else {
            Exponential::unchecked(rate)
        };
        let x = exponential.sample(&mut self.source);
        debug!("exponential(rate={rate}) = {x}");
        self.emit("Exponential distribution", x)?;
        Ok(x)
    }

    fn triangular_step(&mut self) -> Result<f64, SessionError> {
        self.prompt(TRIANGULAR_PROMPT)?;
        let min = self.input.next_f64("triangular min")?;
        let max = self.input.next_f64("triangular max")?;
        let mode = self.input.next_f64("triangular mode")?;

        let (low, high, mode) = match self.config.triangular {
            TriangularInput::UserSupplied => (min, max, mode),
            TriangularInput::FixedLiteral => {
                debug!("ignoring triangular input ({min}, {max}, {mode})");
                FIXED_TRIANGULAR
            }
        };

        let triangular = if self.config.strict {
            Triangular::new(low, high, mode)?
        } else {
            Triangular::unchecked(low, high, mode)
        };
        let x = triangular.sample(&mut self.source);
        debug!("triangular(low={low}, high={high}, mode={mode}) = {x}");
        self.emit("Triangular distribution", x)?;
        Ok(x)
    }

    fn normal_step(&mut self) -> Result<f64, SessionError> {
        self.prompt(NORMAL_PROMPT)?;
        let mu = self.input.next_f64("normal mean")?;
        let sigma = self.input.next_f64("normal standard deviation")?;

        let normal = if self.config.strict {
            Normal::new(mu, sigma)?
        } else {
            Normal::unchecked(mu, sigma)
        };
        let x = normal.sample(&mut self.normal, &mut self.source);
        debug!("normal(mu={mu}, sigma={sigma}) = {x}");
        self.emit("Normal distribution", x)?;
        Ok(x)
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn emit(&mut self, label: &str, x: f64) -> Result<(), SessionError> {
        if !x.is_finite() {
            warn!("{label} produced a non-finite sample: {x}");
        }
        writeln!(self.output, "{label}: {}", format_general(x))?;
        Ok(())
    }
}
