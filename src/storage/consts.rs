/// How many grid cells the visible span is divided into along each axis when clustering.
pub const GRID_CELLS_PER_SPAN: f64 = 8.0;
