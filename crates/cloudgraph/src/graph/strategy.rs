//! Strategy descriptors for neighborhood-graph construction.
//!
//! Descriptors are plain values (serde-tagged by `kind`). A strict text form is
//! accepted for command lines and old configuration files:
//!
//! ```text
//! exact | approximate | randomized | landmarking
//! subdivision [N] [depth=N] [start-axis=N | fixed-axis=N] [exact]
//! ```
//!
//! `N = -1` means unbounded depth. A trailing base method other than `exact`
//! names an unimplemented strategy and is rejected as not supported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Recursion budget for subdivision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthLimit {
    /// Split until every subset has at most one point.
    #[default]
    Unbounded,
    /// Split this many more levels, then resolve each half exactly.
    Levels(usize),
}

impl DepthLimit {
    /// Legacy signed form: `-1` is unbounded, `n >= 0` is `Levels(n)`.
    pub fn from_signed(depth: i64) -> Result<Self, GraphError> {
        match depth {
            -1 => Ok(Self::Unbounded),
            d if d >= 0 => usize::try_from(d)
                .map(Self::Levels)
                .map_err(|_| GraphError::invalid(format!("depth {d} too large"))),
            d => Err(GraphError::invalid(format!(
                "depth must be -1 or non-negative, got {d}"
            ))),
        }
    }
}

/// Which coordinate drives each split. The two modes are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Start at `start`, advance `(axis + 1) mod d` on every level.
    Rotating { start: usize },
    /// Split along the same axis on every level.
    Fixed(usize),
}

impl Default for AxisMode {
    fn default() -> Self {
        Self::Rotating { start: 0 }
    }
}

impl AxisMode {
    #[inline]
    pub fn initial(&self) -> usize {
        match *self {
            AxisMode::Rotating { start } => start,
            AxisMode::Fixed(axis) => axis,
        }
    }

    #[inline]
    pub(crate) fn next(&self, axis: usize, dim: usize) -> usize {
        match self {
            AxisMode::Rotating { .. } => (axis + 1) % dim,
            AxisMode::Fixed(_) => axis,
        }
    }

    /// Distinct axes visited before the sequence repeats.
    #[inline]
    pub(crate) fn cycle_len(&self, dim: usize) -> usize {
        match self {
            AxisMode::Rotating { .. } => dim,
            AxisMode::Fixed(_) => 1,
        }
    }
}

/// Subdivision parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubdivisionCfg {
    pub depth: DepthLimit,
    pub axis: AxisMode,
}

/// Neighborhood-graph construction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Strategy {
    /// All pairs, O(n²).
    Exact,
    /// Median splits with glue bands; exact for every configuration.
    Subdivision(SubdivisionCfg),
    /// Not implemented.
    Approximate,
    /// Not implemented.
    Randomized,
    /// Not implemented.
    Landmarking,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Subdivision(SubdivisionCfg::default())
    }
}

impl Strategy {
    /// `kind` tag as used by serde and the text form.
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Subdivision(_) => "subdivision",
            Strategy::Approximate => "approximate",
            Strategy::Randomized => "randomized",
            Strategy::Landmarking => "landmarking",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())?;
        if let Strategy::Subdivision(cfg) = self {
            if let DepthLimit::Levels(n) = cfg.depth {
                write!(f, " depth={n}")?;
            }
            match cfg.axis {
                AxisMode::Rotating { start: 0 } => {}
                AxisMode::Rotating { start } => write!(f, " start-axis={start}")?,
                AxisMode::Fixed(axis) => write!(f, " fixed-axis={axis}")?,
            }
        }
        Ok(())
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, GraphError> {
    value.parse().map_err(|_| {
        GraphError::invalid(format!(
            "{key} expects a non-negative integer, got {value:?}"
        ))
    })
}

fn parse_depth(value: &str) -> Result<DepthLimit, GraphError> {
    let d: i64 = value.parse().map_err(|_| {
        GraphError::invalid(format!("depth expects an integer, got {value:?}"))
    })?;
    DepthLimit::from_signed(d)
}

fn parse_subdivision<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Strategy, GraphError> {
    let mut depth: Option<DepthLimit> = None;
    let mut axis: Option<AxisMode> = None;
    let mut base_seen = false;
    for tok in tokens {
        if base_seen {
            return Err(GraphError::invalid(format!(
                "unexpected token {tok:?} after base method"
            )));
        }
        let (new_depth, new_axis) = match tok.split_once('=') {
            Some(("depth", v)) => (Some(parse_depth(v)?), None),
            Some(("start-axis", v)) => {
                let start = parse_usize("start-axis", v)?;
                (None, Some(AxisMode::Rotating { start }))
            }
            Some(("fixed-axis", v)) => {
                let axis = parse_usize("fixed-axis", v)?;
                (None, Some(AxisMode::Fixed(axis)))
            }
            Some((key, _)) => {
                return Err(GraphError::invalid(format!(
                    "unknown subdivision option {key:?}"
                )))
            }
            None if tok.parse::<i64>().is_ok() => (Some(parse_depth(tok)?), None),
            None if tok == "exact" => {
                base_seen = true;
                (None, None)
            }
            None if matches!(tok, "approximate" | "randomized" | "landmarking") => {
                return Err(GraphError::unsupported(format!(
                    "subdivision with {tok} base method"
                )))
            }
            None => return Err(GraphError::invalid(format!("unknown token {tok:?}"))),
        };
        if let Some(d) = new_depth {
            if depth.replace(d).is_some() {
                return Err(GraphError::invalid("depth given more than once"));
            }
        }
        if let Some(a) = new_axis {
            if axis.replace(a).is_some() {
                return Err(GraphError::invalid(
                    "axis given more than once (start-axis and fixed-axis are exclusive)",
                ));
            }
        }
    }
    Ok(Strategy::Subdivision(SubdivisionCfg {
        depth: depth.unwrap_or_default(),
        axis: axis.unwrap_or_default(),
    }))
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let kind = tokens
            .next()
            .ok_or_else(|| GraphError::invalid("empty strategy descriptor"))?;
        let simple = match kind {
            "subdivision" => return parse_subdivision(tokens),
            "exact" => Strategy::Exact,
            "approximate" => Strategy::Approximate,
            "randomized" => Strategy::Randomized,
            "landmarking" => Strategy::Landmarking,
            other => {
                return Err(GraphError::invalid(format!(
                    "unknown strategy {other:?}; expected subdivision, exact, approximate, randomized, or landmarking"
                )))
            }
        };
        match tokens.next() {
            None => Ok(simple),
            Some(tok) => Err(GraphError::invalid(format!(
                "{kind} takes no options, got {tok:?}"
            ))),
        }
    }
}
