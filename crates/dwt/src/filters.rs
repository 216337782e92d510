//! Wavelet filter sets and the mother-wavelet registry.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::DwtError;

/// The four finite-impulse-response filters defining a wavelet family.
///
/// Immutable once constructed; the transform engine reads it, never
/// mutates it. All four filters are guaranteed non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSet {
    dec_low: Vec<f64>,
    dec_high: Vec<f64>,
    rec_low: Vec<f64>,
    rec_high: Vec<f64>,
}

impl FilterSet {
    /// Creates a filter set from the four explicit filter sequences.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::EmptyFilter`] naming the first empty filter.
    pub fn new(
        dec_low: Vec<f64>,
        dec_high: Vec<f64>,
        rec_low: Vec<f64>,
        rec_high: Vec<f64>,
    ) -> Result<Self, DwtError> {
        for (name, filter) in [
            ("dec_low", &dec_low),
            ("dec_high", &dec_high),
            ("rec_low", &rec_low),
            ("rec_high", &rec_high),
        ] {
            if filter.is_empty() {
                return Err(DwtError::EmptyFilter { name });
            }
        }
        Ok(Self {
            dec_low,
            dec_high,
            rec_low,
            rec_high,
        })
    }

    /// Derives a full orthogonal filter set from a scaling (reconstruction
    /// low-pass) filter via the quadrature-mirror relations:
    /// `dec_low = reverse(rec_low)`, `rec_high[i] = (-1)^i * dec_low[i]`,
    /// `dec_high = reverse(rec_high)`.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::EmptyFilter`] if `scaling` is empty.
    pub fn from_scaling(scaling: &[f64]) -> Result<Self, DwtError> {
        if scaling.is_empty() {
            return Err(DwtError::EmptyFilter { name: "rec_low" });
        }
        Ok(Self::quadrature_mirror(scaling))
    }

    fn quadrature_mirror(scaling: &[f64]) -> Self {
        let rec_low = scaling.to_vec();
        let dec_low: Vec<f64> = scaling.iter().rev().copied().collect();
        let rec_high: Vec<f64> = dec_low
            .iter()
            .enumerate()
            .map(|(i, &c)| if i % 2 == 0 { c } else { -c })
            .collect();
        let dec_high: Vec<f64> = rec_high.iter().rev().copied().collect();
        Self {
            dec_low,
            dec_high,
            rec_low,
            rec_high,
        }
    }

    /// Decomposition low-pass filter.
    pub fn dec_low(&self) -> &[f64] {
        &self.dec_low
    }

    /// Decomposition high-pass filter.
    pub fn dec_high(&self) -> &[f64] {
        &self.dec_high
    }

    /// Reconstruction low-pass filter.
    pub fn rec_low(&self) -> &[f64] {
        &self.rec_low
    }

    /// Reconstruction high-pass filter.
    pub fn rec_high(&self) -> &[f64] {
        &self.rec_high
    }

    /// Number of taps in the decomposition low-pass filter, which sets the
    /// per-side extension size (`len - 1`) used at each pyramid level.
    pub fn length(&self) -> usize {
        self.dec_low.len()
    }
}

// Orthogonal scaling coefficients, reconstruction low-pass ordering.
const HAAR: [f64; 2] = [FRAC_1_SQRT_2, FRAC_1_SQRT_2];

const DB2: [f64; 4] = [
    0.48296291314453416,
    0.8365163037378079,
    0.22414386804201339,
    -0.12940952255126037,
];

const DB3: [f64; 6] = [
    0.3326705529509569,
    0.8068915093133388,
    0.4598775021193313,
    -0.13501102001039084,
    -0.08544127388224149,
    0.035226291882100656,
];

const DB4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

const SYM4: [f64; 8] = [
    0.0322231006040427,
    -0.012603967262037833,
    -0.09921954357684722,
    0.29785779560527736,
    0.8037387518059161,
    0.49761866763201545,
    -0.02963552764599851,
    -0.07576571478927333,
];

const COIF1: [f64; 6] = [
    -0.015655728135791993,
    -0.07273261951252645,
    0.3848648468648578,
    0.8525720202116004,
    0.3378976624574818,
    -0.07273261951252645,
];

/// Supported mother wavelets.
///
/// Each variant names an orthogonal family whose filter set is derived
/// from published scaling coefficients. Dispatch from a family name to
/// its filters is a pure lookup with no global state.
///
/// | Wavelet | Length | Family |
/// |---------|--------|--------|
/// | [`Wavelet::Haar`] | 2 | Haar |
/// | [`Wavelet::Db2`] | 4 | Daubechies |
/// | [`Wavelet::Db3`] | 6 | Daubechies |
/// | [`Wavelet::Db4`] | 8 | Daubechies |
/// | [`Wavelet::Sym4`] | 8 | Symlet |
/// | [`Wavelet::Coif1`] | 6 | Coiflet |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Wavelet {
    /// Haar wavelet (length 2).
    Haar,
    /// Daubechies db2 wavelet (length 4).
    #[default]
    Db2,
    /// Daubechies db3 wavelet (length 6).
    Db3,
    /// Daubechies db4 wavelet (length 8).
    Db4,
    /// Symlet sym4 wavelet (length 8).
    Sym4,
    /// Coiflet coif1 wavelet (length 6).
    Coif1,
}

impl Wavelet {
    /// Returns the scaling (reconstruction low-pass) coefficients.
    pub fn scaling_coeffs(&self) -> &'static [f64] {
        match self {
            Self::Haar => &HAAR,
            Self::Db2 => &DB2,
            Self::Db3 => &DB3,
            Self::Db4 => &DB4,
            Self::Sym4 => &SYM4,
            Self::Coif1 => &COIF1,
        }
    }

    /// Returns the filter length (number of taps).
    pub fn length(&self) -> usize {
        self.scaling_coeffs().len()
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Db2 => "db2",
            Self::Db3 => "db3",
            Self::Db4 => "db4",
            Self::Sym4 => "sym4",
            Self::Coif1 => "coif1",
        }
    }

    /// Materializes the four filters for this wavelet.
    pub fn filter_set(&self) -> FilterSet {
        FilterSet::quadrature_mirror(self.scaling_coeffs())
    }

    /// Parses a wavelet from a case-insensitive name string.
    ///
    /// `"db1"` is accepted as an alias for the Haar wavelet.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnsupportedWavelet`] if the name is not
    /// recognized.
    pub fn from_name(name: &str) -> Result<Self, DwtError> {
        match name.to_lowercase().as_str() {
            "haar" | "db1" => Ok(Self::Haar),
            "db2" => Ok(Self::Db2),
            "db3" => Ok(Self::Db3),
            "db4" => Ok(Self::Db4),
            "sym4" => Ok(Self::Sym4),
            "coif1" => Ok(Self::Coif1),
            _ => Err(DwtError::UnsupportedWavelet(name.to_string())),
        }
    }

    /// All supported wavelets, in registry order.
    pub fn all() -> &'static [Wavelet] {
        &[
            Self::Haar,
            Self::Db2,
            Self::Db3,
            Self::Db4,
            Self::Sym4,
            Self::Coif1,
        ]
    }
}
