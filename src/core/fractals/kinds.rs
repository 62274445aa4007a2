use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Mandelbox,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Mandelbox,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Mandelbox => "Mandelbox",
        }
    }

    /// Half-width of the reset viewport: the planar fractals live inside
    /// radius 2, the Mandelbox inside radius 4.
    #[must_use]
    pub const fn default_extent(self) -> f64 {
        match self {
            Self::Mandelbrot | Self::Julia | Self::BurningShip => 2.0,
            Self::Mandelbox => 4.0,
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burningship",
            Self::Mandelbox => "mandelbox",
        }
    }
}

impl FromStr for FractalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == s.to_lowercase())
            .ok_or_else(|| format!("unknown fractal kind '{}'", s))
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
