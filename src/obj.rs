use std::error::Error as StdError;
use std::fmt;
use std::str;

use crate::util::{bail, IteratorExt};
use crate::Result;

/// Token that marks a geometric vertex declaration.
pub const VERTEX_PREFIX: &[u8] = b"v ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateError {
    line: usize,
    token: String,
}

impl CoordinateError {
    pub fn new(line: usize, token: impl Into<String>) -> Self {
        Self {
            line,
            token: token.into(),
        }
    }
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed coordinate '{}' on line {}",
            self.token, self.line
        )
    }
}

impl StdError for CoordinateError {}

/// A single line of a geometry file.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// Geometric vertex declaration with its parsed coordinates.
    Vertex(Vec<f64>),
    /// Any other line, kept as raw bytes including its terminator.
    Other(&'a [u8]),
}

impl<'a> Line<'a> {
    /// Classifies a raw input line. `number` is the 1-based line number,
    /// used for error reporting only.
    pub fn classify(raw: &'a [u8], number: usize) -> Result<Self> {
        if !raw.starts_with(VERTEX_PREFIX) {
            return Ok(Line::Other(raw));
        }

        let payload = trim_terminator(&raw[VERTEX_PREFIX.len()..]);
        if payload.is_empty() {
            return Ok(Line::Vertex(vec![]));
        }

        let payload = match str::from_utf8(payload) {
            Ok(payload) => payload,
            Err(_) => {
                bail!(CoordinateError::new(
                    number,
                    String::from_utf8_lossy(payload)
                ));
            }
        };

        let coordinates = payload
            .split(' ')
            .map(|token| parse_coordinate(token, number))
            .try_collect_vec()?;

        Ok(Line::Vertex(coordinates))
    }
    /// Multiplies every coordinate by `factor`. Pass-through lines are
    /// returned unchanged.
    pub fn scale(self, factor: f64) -> Self {
        match self {
            Line::Vertex(mut coordinates) => {
                // TODO: Leave an optional w component unscaled?
                for coordinate in coordinates.iter_mut() {
                    *coordinate *= factor;
                }
                Line::Vertex(coordinates)
            }
            other => other,
        }
    }
}

// Empty tokens from doubled or trailing spaces are rejected here, same as
// any other token that is not a decimal number.
fn parse_coordinate(token: &str, line: usize) -> Result<f64, CoordinateError> {
    token
        .parse()
        .map_err(|_| CoordinateError::new(line, token))
}

fn trim_terminator(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// Formats a vertex declaration from its coordinates, without a terminator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexLine<'a>(pub &'a [f64]);

impl fmt::Display for VertexLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v ")?;

        let mut coordinates = self.0.iter();
        if let Some(first) = coordinates.next() {
            write!(f, "{first}")?;
        }
        for coordinate in coordinates {
            write!(f, " {coordinate}")?;
        }

        Ok(())
    }
}
