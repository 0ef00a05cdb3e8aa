use anyhow::{anyhow, Result};
use ndarray::Array1;

/// Domain bounds, both axes
pub const DOMAIN_MIN: f64 = -3.0;
pub const DOMAIN_MAX: f64 = 3.0;

pub struct Grid {
    pub size: usize, // Number of samples per axis
    pub min: f64,    // Lower domain bound
    pub max: f64,    // Upper domain bound
}

impl Grid {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(anyhow!("Grid size must be positive, got {}", size));
        }
        Ok(Grid {
            size,
            min: DOMAIN_MIN,
            max: DOMAIN_MAX,
        })
    }

    pub fn x(&self) -> Array1<f64> {
        // size evenly spaced samples, both endpoints included
        Array1::linspace(self.min, self.max, self.size)
    }

    pub fn y(&self) -> Array1<f64> {
        // The grid is square, so y is the same sequence as x
        Array1::linspace(self.min, self.max, self.size)
    }

    pub fn spacing(&self) -> f64 {
        if self.size > 1 {
            (self.max - self.min) / (self.size - 1) as f64
        } else {
            0.0
        }
    }
}
