//! # wavelib-dwt
//!
//! Multilevel 1-D Discrete Wavelet Transform (DWT) and the numeric
//! primitives it is built from: boundary extension, linear convolution
//! with valid-window cropping, and rate-halving/doubling resamplers.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Signal::new(name, samples)?"] -->|"validate"| B["Signal"]
//!     W["Wavelet::from_name(name)?"] -->|".filter_set()"| F["FilterSet"]
//!     B -->|"decompose(samples, &filters, levels, mode)?"| C["Vec&lt;DecompositionLevel&gt;"]
//!     F --> C
//!     C -->|"reconstruct(&levels, &filters, 0)?"| D["Vec&lt;f64&gt;"]
//! ```
//!
//! ## Supported Wavelets
//!
//! | Wavelet | Length | Family |
//! |---------|--------|--------|
//! | [`Wavelet::Haar`] | 2 | Haar |
//! | [`Wavelet::Db2`] | 4 | Daubechies |
//! | [`Wavelet::Db3`] | 6 | Daubechies |
//! | [`Wavelet::Db4`] | 8 | Daubechies |
//! | [`Wavelet::Sym4`] | 8 | Symlet |
//! | [`Wavelet::Coif1`] | 6 | Coiflet |
//!
//! ## Quick Start
//!
//! ```ignore
//! use wavelib_dwt::{ExtensionMode, Wavelet, decompose, reconstruct};
//!
//! let filters = Wavelet::Db2.filter_set();
//! let levels = decompose(&samples, &filters, 3, ExtensionMode::default())?;
//! let restored = reconstruct(&levels, &filters, 0)?;
//! ```
//!
//! The engine is synchronous and allocation-per-call: every invocation
//! works on freshly allocated buffers, so concurrent transforms over a
//! shared (read-only) `FilterSet` need no locking.

mod convolution;
mod error;
mod extension;
mod filters;
mod resample;
mod signal;
mod transform;

pub use convolution::{convolve_full, convolve_valid};
pub use error::DwtError;
pub use extension::{ExtensionMode, deextend, extend};
pub use filters::{FilterSet, Wavelet};
pub use resample::{downsample, upsample};
pub use signal::Signal;
pub use transform::{DecompositionLevel, decompose, max_decomposition_level, reconstruct};
