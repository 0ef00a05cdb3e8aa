use crate::grid::Grid;
use ndarray::Array2;

/// 2D scalar field sampled on a uniform grid.
///
/// Row index i runs over the y axis, column index j over the x axis,
/// so cell (i, j) holds the value at coordinate (x_j, y_i).
pub struct ScalarField {
    pub data: Array2<f64>,
}

impl ScalarField {
    /// Evaluate sin(x² + y²) at every grid point. Pure and deterministic:
    /// the same grid always produces the same field.
    pub fn generate(grid: &Grid) -> Self {
        let x = grid.x();
        let y = grid.y();
        let n = grid.size;

        let mut data = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                data[[i, j]] = (x[j].powi(2) + y[i].powi(2)).sin();
            }
        }

        ScalarField { data }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Minimum and maximum field value, used to auto-scale the heatmap.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(size: usize) -> ScalarField {
        ScalarField::generate(&Grid::new(size).unwrap())
    }

    #[test]
    fn shape_is_square_in_grid_size() {
        for size in [2, 3, 10, 100] {
            assert_eq!(field(size).dim(), (size, size));
        }
    }

    #[test]
    fn values_are_bounded_by_sine_range() {
        let f = field(100);
        for &v in f.data.iter() {
            assert!((-1.0..=1.0).contains(&v), "value {} outside [-1, 1]", v);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = field(50);
        let b = field(50);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn corner_cell_matches_sin_18() {
        // Cell (0, 0) sits at (x, y) = (-3, -3), so the value is sin(18)
        let f = field(100);
        let expected = 18.0_f64.sin();
        assert!((f.data[[0, 0]] - expected).abs() < 1e-12);
        assert!((expected - (-0.7510)).abs() < 1e-4);
    }

    #[test]
    fn center_cell_of_odd_grid_is_zero() {
        let f = field(101);
        assert!(f.data[[50, 50]].abs() < 1e-12);
    }

    #[test]
    fn three_by_three_scenario() {
        let f = field(3);
        assert_eq!(f.dim(), (3, 3));
        assert!(f.data[[1, 1]].abs() < 1e-12);
        assert!((f.data[[0, 0]] - 18.0_f64.sin()).abs() < 1e-12);
        // The field is symmetric under x/y swap since the axes are identical
        assert!((f.data[[0, 2]] - f.data[[2, 0]]).abs() < 1e-12);
    }

    #[test]
    fn value_range_brackets_all_cells() {
        let f = field(100);
        let (lo, hi) = f.value_range();
        assert!(lo < hi);
        for &v in f.data.iter() {
            assert!(v >= lo && v <= hi);
        }
    }
}
