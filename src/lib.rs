//! # u-sampling
//!
//! Exponential, triangular and normal samples built from a single uniform
//! random source.
//!
//! The crate is small on purpose: three transforms of uniform draws and a
//! console session that exercises them once each.
//!
//! ## Modules
//!
//! - [`random`] — the [`random::UniformSource`] seam, a seeded `SmallRng`
//!   source and a replaying source for deterministic runs
//! - [`distributions`] — inversion (exponential), inverse CDF (triangular)
//!   and cached Box–Muller (normal) samplers
//! - [`session`] — the prompt/sample/print driver
//! - [`input`] — whitespace token reader for numeric parameters
//! - [`format`] — `%g`-style number formatting
//! - [`error`] — session error types
//!
//! ## Design Philosophy
//!
//! - **Injectable randomness**: every sampler takes a `&mut` uniform source,
//!   so tests can fix the draws and count them
//! - **Explicit state**: the Box–Muller pair cache is a value the caller
//!   owns, one per stream
//! - **Property-based testing**: monotonicity and pairing invariants are
//!   verified via proptest

pub mod distributions;
pub mod error;
pub mod format;
pub mod input;
pub mod random;
pub mod session;

pub use distributions::{DistributionError, NormalSampler};
pub use error::{InputError, SessionError};
pub use random::{create_source, UniformSource};
pub use session::{Session, SessionConfig, SessionReport, TriangularInput};
