mod field;
mod grid;
mod visualisation;

use anyhow::Result;
use field::ScalarField;
use grid::Grid;
use visualisation::FieldVisualiser;

// Samples per axis of the scalar field
const FIELD_SIZE: usize = 100;

fn main() -> Result<()> {
    let grid = Grid::new(FIELD_SIZE)?;
    println!(
        "Generating {}x{} scalar field over [{}, {}]",
        grid.size, grid.size, grid.min, grid.max
    );

    let field = ScalarField::generate(&grid);
    let (lo, hi) = field.value_range();
    println!("Field values span [{:.4}, {:.4}]", lo, hi);

    let visualiser = FieldVisualiser::new("output", 900, 800)?;
    visualiser.show(&field)?;

    Ok(())
}
