//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the per-method iteration counter origin used by the shared
//! refinement loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpenFamily {
    FixedPoint,
    Newton,
    Secant,
}

impl Algorithm {
    /// Value the iteration counter holds on the first refinement pass.
    ///
    /// # Notes
    /// - Two-point methods start at 2: both seeds are evaluated before the
    ///   loop and count against `max_iter`.
    /// - A method runs `max_iter - first_iteration() + 1` passes at most.
    pub const fn first_iteration(self) -> usize {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => 1,
            Algorithm::Bracket(BracketFamily::FalsePosition) => 2,
            Algorithm::Open(OpenFamily::FixedPoint)          => 1,
            Algorithm::Open(OpenFamily::Newton)              => 1,
            Algorithm::Open(OpenFamily::Secant)              => 2,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false_position",
            Algorithm::Open(OpenFamily::FixedPoint)          => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)              => "newton",
            Algorithm::Open(OpenFamily::Secant)              => "secant",
        }
    }

    /// Human-readable method name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "Bisection Method",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "Method of False Position",
            Algorithm::Open(OpenFamily::FixedPoint)          => "Fixed Point Iteration",
            Algorithm::Open(OpenFamily::Newton)              => "Newton's Method",
            Algorithm::Open(OpenFamily::Secant)              => "Secant Method",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
