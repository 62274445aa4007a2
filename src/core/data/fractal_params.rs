use crate::core::data::complex::Complex;
use crate::core::fractals::kinds::FractalKind;
use crate::core::fractals::{burning_ship, julia, mandelbox, mandelbrot};
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_MANDELBOX_SCALE: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    NonFiniteJuliaConstant { constant: Complex },
    NonFiniteMandelboxScale { scale: f64 },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonFiniteJuliaConstant { constant } => {
                write!(
                    f,
                    "julia constant must be finite: ({}, {})",
                    constant.real, constant.imag
                )
            }
            Self::NonFiniteMandelboxScale { scale } => {
                write!(f, "mandelbox scale must be finite: {}", scale)
            }
        }
    }
}

impl Error for FractalParamsError {}

/// Everything a frame render needs besides the viewport and the grid.
/// Immutable for the duration of one render; the session swaps it out
/// between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    kind: FractalKind,
    max_iterations: u32,
    julia_constant: Complex,
    mandelbox_scale: f64,
}

impl FractalParams {
    pub fn new(kind: FractalKind, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            kind,
            max_iterations,
            julia_constant: julia::DEFAULT_CONSTANT,
            mandelbox_scale: DEFAULT_MANDELBOX_SCALE,
        })
    }

    pub fn with_julia_constant(self, constant: Complex) -> Result<Self, FractalParamsError> {
        if !constant.is_finite() {
            return Err(FractalParamsError::NonFiniteJuliaConstant { constant });
        }

        Ok(Self {
            julia_constant: constant,
            ..self
        })
    }

    pub fn with_mandelbox_scale(self, scale: f64) -> Result<Self, FractalParamsError> {
        if !scale.is_finite() {
            return Err(FractalParamsError::NonFiniteMandelboxScale { scale });
        }

        Ok(Self {
            mandelbox_scale: scale,
            ..self
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn with_kind(self, kind: FractalKind) -> Self {
        Self { kind, ..self }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn mandelbox_scale(&self) -> f64 {
        self.mandelbox_scale
    }

    /// Dispatches the plane coordinate to the iteration function for the
    /// selected kind. Always in `[0, max_iterations]`.
    #[must_use]
    pub fn escape_count(&self, point: Complex) -> u32 {
        match self.kind {
            FractalKind::Mandelbrot => mandelbrot::escape_count(point, self.max_iterations),
            FractalKind::Julia => {
                julia::escape_count(point, self.julia_constant, self.max_iterations)
            }
            FractalKind::BurningShip => burning_ship::escape_count(point, self.max_iterations),
            FractalKind::Mandelbox => {
                mandelbox::escape_count(point, self.mandelbox_scale, self.max_iterations)
            }
        }
    }
}
