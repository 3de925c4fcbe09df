//! Arrow options for directed fermion lines and arcs.
//!
//! `axodraw2` takes arrow modifiers as a bracketed key list, for example
//! `\Arc[arrow,clockwise,arrowpos=0.4]`. This module keeps those modifiers as
//! typed values so that reversing a propagator manipulates data instead of
//! rewriting strings.
//!
//! # Reversal
//!
//! Reversing the direction of travel along an arc must leave the arrowhead at
//! the same physical place. [`ArrowOptions::reversed`] therefore toggles the
//! `clockwise` modifier and mirrors the arrow position fraction `p` to
//! `1 - p`. Both operations are exact involutions.
//!
//! ```
//! # use feyn_core::draw::{ArrowOption, ArrowOptions};
//! let options: ArrowOptions = [ArrowOption::Clockwise, ArrowOption::ArrowPosition(0.4)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(options.to_string(), "arrow,clockwise,arrowpos=0.4");
//!
//! let reversed = options.reversed();
//! assert_eq!(reversed.to_string(), "arrow,arrowpos=0.60");
//! assert_eq!(reversed.reversed(), options);
//! ```

use std::fmt;

/// A single arrow modifier, as written by layout code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowOption {
    /// Traverse the arc clockwise instead of counter-clockwise.
    Clockwise,
    /// Place the arrowhead at this fraction of the path, measured along the
    /// direction of travel.
    ArrowPosition(f32),
}

/// An arrowhead position fraction that remembers whether it was mirrored.
///
/// Keeping the original fraction and a mirror flag, rather than storing
/// `1 - p`, makes a double reversal restore `p` bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPosition {
    fraction: f32,
    mirrored: bool,
}

impl ArrowPosition {
    /// Creates an unmirrored arrow position.
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction,
            mirrored: false,
        }
    }

    /// Returns the effective fraction along the direction of travel.
    pub fn value(self) -> f32 {
        if self.mirrored {
            1.0 - self.fraction
        } else {
            self.fraction
        }
    }

    /// Returns whether the fraction is currently mirrored.
    pub fn is_mirrored(self) -> bool {
        self.mirrored
    }

    /// Returns the position for the opposite direction of travel.
    pub fn mirrored(self) -> Self {
        Self {
            fraction: self.fraction,
            mirrored: !self.mirrored,
        }
    }
}

impl fmt::Display for ArrowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mirrored {
            write!(f, "{:.2}", self.value())
        } else {
            write!(f, "{}", self.fraction)
        }
    }
}

/// The full modifier set of a directed fermion line or arc.
///
/// Displays as the bracket contents `axodraw2` expects, always starting with
/// `arrow` and listing modifiers in a fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArrowOptions {
    clockwise: bool,
    position: Option<ArrowPosition>,
}

impl ArrowOptions {
    /// Creates an option set with no modifiers besides the arrow itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the clockwise modifier set.
    pub fn with_clockwise(mut self) -> Self {
        self.clockwise = true;
        self
    }

    /// Returns a copy with the arrowhead placed at `fraction`.
    pub fn with_arrow_position(mut self, fraction: f32) -> Self {
        self.position = Some(ArrowPosition::new(fraction));
        self
    }

    /// Returns whether the arc is traversed clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Returns the arrow position, if one was given.
    pub fn arrow_position(&self) -> Option<ArrowPosition> {
        self.position
    }

    /// Returns the options for the opposite direction of travel.
    ///
    /// Toggles `clockwise` and mirrors any arrow position.
    pub fn reversed(&self) -> Self {
        Self {
            clockwise: !self.clockwise,
            position: self.position.map(ArrowPosition::mirrored),
        }
    }
}

impl FromIterator<ArrowOption> for ArrowOptions {
    fn from_iter<I: IntoIterator<Item = ArrowOption>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |options, option| match option {
                ArrowOption::Clockwise => options.with_clockwise(),
                ArrowOption::ArrowPosition(fraction) => options.with_arrow_position(fraction),
            })
    }
}

impl fmt::Display for ArrowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("arrow")?;
        if self.clockwise {
            f.write_str(",clockwise")?;
        }
        if let Some(position) = self.position {
            write!(f, ",arrowpos={position}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_plain_options() {
        assert_eq!(ArrowOptions::new().to_string(), "arrow");
    }

    #[test]
    fn test_from_iter_collects_all_modifiers() {
        let options: ArrowOptions = [ArrowOption::ArrowPosition(0.65), ArrowOption::Clockwise]
            .into_iter()
            .collect();

        assert!(options.is_clockwise());
        assert_approx_eq!(f32, options.arrow_position().unwrap().value(), 0.65);
        assert_eq!(options.to_string(), "arrow,clockwise,arrowpos=0.65");
    }

    #[test]
    fn test_reverse_adds_clockwise_when_absent() {
        let options = ArrowOptions::new().with_arrow_position(0.55);
        let reversed = options.reversed();

        assert!(reversed.is_clockwise());
        assert_eq!(reversed.to_string(), "arrow,clockwise,arrowpos=0.45");
    }

    #[test]
    fn test_reverse_removes_clockwise_when_present() {
        let reversed = ArrowOptions::new().with_clockwise().reversed();
        assert!(!reversed.is_clockwise());
        assert_eq!(reversed.to_string(), "arrow");
    }

    #[test]
    fn test_mirrored_position_value() {
        let position = ArrowPosition::new(0.4).mirrored();
        assert!(position.is_mirrored());
        assert_approx_eq!(f32, position.value(), 0.6);
        assert_eq!(position.to_string(), "0.60");
    }
}
