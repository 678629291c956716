//! Error taxonomy shared by the grid model and both engines.
//!
//! An unreachable target is not an error: searches report it as an empty
//! path in a normal result.

use std::fmt;

use crate::geom::Point;

/// Why a search endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointReason {
    OutOfBounds,
    Wall,
}

impl fmt::Display for EndpointReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Wall => f.write_str("on a wall"),
        }
    }
}

/// Errors returned by grid construction, mutation, search and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is unusable (< 1 for a grid, even or < 3 for a maze).
    InvalidDimensions { width: i32, height: i32 },
    /// A coordinate lies outside the grid.
    OutOfBounds {
        point: Point,
        width: i32,
        height: i32,
    },
    /// A search start or end is out of bounds or on a wall.
    InvalidEndpoint {
        point: Point,
        reason: EndpointReason,
    },
    /// A start or end marker was required but not set.
    MissingEndpoint(&'static str),
    /// An algorithm name did not parse.
    UnknownAlgorithm(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "point {point} is outside the {width}x{height} grid"),
            Self::InvalidEndpoint { point, reason } => {
                write!(f, "invalid search endpoint {point}: {reason}")
            }
            Self::MissingEndpoint(which) => write!(f, "no {which} marker set"),
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm \u{201c}{name}\u{201d}"),
        }
    }
}

impl std::error::Error for GridError {}
