use crate::core::colour::colour_map::ColourMap;
use crate::core::colour::hsl::hsl_to_rgb;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const SATURATION: f64 = 100.0;
const LIGHTNESS: f64 = 50.0;

#[derive(Debug, PartialEq, Eq)]
pub enum HueWheelError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for HueWheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for HueWheelError {}

/// Colours an escape count by rotating the hue once around the wheel over
/// the iteration range. Interior points (count == max) come out black, never
/// hued.
#[derive(Debug)]
pub struct HueWheel {
    max_iterations: u32,
}

impl HueWheel {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for HueWheel {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(HueWheelError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        if iterations == self.max_iterations {
            Ok(Colour::BLACK)
        } else {
            let hue = (f64::from(iterations) / f64::from(self.max_iterations)) * 360.0;

            Ok(hsl_to_rgb(hue, SATURATION, LIGHTNESS))
        }
    }

    fn display_name(&self) -> &str {
        "Hue wheel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_points_are_black() {
        for max_iterations in [1, 100, 1000] {
            let mapper = HueWheel::new(max_iterations);

            assert_eq!(mapper.map(max_iterations).unwrap(), Colour::BLACK);
        }
    }

    #[test]
    fn test_zero_iterations_is_pure_red() {
        let mapper = HueWheel::new(100);

        assert_eq!(mapper.map(0).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_one_third_of_range_is_pure_green() {
        let mapper = HueWheel::new(300);

        assert_eq!(mapper.map(100).unwrap(), Colour { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_two_thirds_of_range_is_pure_blue() {
        let mapper = HueWheel::new(300);

        assert_eq!(mapper.map(200).unwrap(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_first_escape_band_is_not_black() {
        // iteration 1 of 50: hue 7.2°, still saturated red territory
        let mapper = HueWheel::new(50);
        let colour = mapper.map(1).unwrap();

        assert_ne!(colour, Colour::BLACK);
        assert_eq!(colour.r, 255);
    }

    #[test]
    fn test_iterations_beyond_max_are_rejected() {
        let mapper = HueWheel::new(10);

        let result = mapper.map(11);

        assert!(result.is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(HueWheel::new(10).display_name(), "Hue wheel");
    }
}
