use super::node::Position;

const H_SPACING: f64 = 300.0;
const V_SPACING: f64 = 200.0;
const OFFSET: f64 = 100.0;

/// Places the `index`-th of `count` imported nodes on a square-ish grid:
/// `ceil(sqrt(count))` columns, 300px horizontal and 200px vertical spacing,
/// offset (100, 100). Deterministic and collision-free; no semantic weight.
pub fn grid_position(index: usize, count: usize) -> Position {
    let columns = (count as f64).sqrt().ceil().max(1.0) as usize;
    Position {
        x: OFFSET + (index % columns) as f64 * H_SPACING,
        y: OFFSET + (index / columns) as f64 * V_SPACING,
    }
}
