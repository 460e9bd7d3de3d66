//! Group-pair interaction coefficients
//!
//! `InteractivityMatrix` is a square table of gravity coefficients indexed
//! by (source group, target group). The dimension is fixed by the number
//! of configured groups; rows come straight from the scenario file.
//! Entries need not be symmetric: `get(a, b)` and `get(b, a)` are
//! independent knobs, which is what makes pursuit patterns possible.

use crate::configuration::config::ConfigError;

/// Row-major square matrix of gravity coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractivityMatrix {
    dim: usize,             // number of groups
    coefficients: Vec<f64>, // dim * dim entries, row-major
}

impl InteractivityMatrix {
    /// Build from configured rows, validating the shape against the group
    /// count. Every row must have exactly `groups` entries and every entry
    /// must be finite.
    pub fn from_rows(rows: &[Vec<f64>], groups: usize) -> Result<Self, ConfigError> {
        if rows.len() != groups {
            return Err(ConfigError::MatrixRows {
                groups,
                rows: rows.len(),
            });
        }

        let mut coefficients = Vec::with_capacity(groups * groups);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != groups {
                return Err(ConfigError::MatrixRowLength {
                    row,
                    groups,
                    len: entries.len(),
                });
            }
            for (col, &coefficient) in entries.iter().enumerate() {
                if !coefficient.is_finite() {
                    return Err(ConfigError::NonFiniteCoefficient { row, col });
                }
                coefficients.push(coefficient);
            }
        }

        Ok(Self {
            dim: groups,
            coefficients,
        })
    }

    /// Square matrix with every entry set to `coefficient`.
    pub fn uniform(dim: usize, coefficient: f64) -> Self {
        Self {
            dim,
            coefficients: vec![coefficient; dim * dim],
        }
    }

    /// Coefficient applied when `source` responds to `target`.
    pub fn get(&self, source: usize, target: usize) -> f64 {
        self.coefficients[source * self.dim + target]
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}
