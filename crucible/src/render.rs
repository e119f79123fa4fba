use std::collections::HashMap;
use std::fmt::Write;

use crucible_core::{CostGrid, Point};
use crucible_paths::Route;

/// Draw the grid with every entered cell replaced by the arrow of the move
/// into it. The start cell keeps its cost.
pub fn render_route(grid: &CostGrid, route: &Route) -> String {
    let arrows: HashMap<Point, char> = route.moves().map(|(p, d)| (p, d.arrow())).collect();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (y, row) in grid.rows().enumerate() {
        for (x, cost) in row.iter().enumerate() {
            match arrows.get(&Point::new(x as i32, y as i32)) {
                Some(&arrow) => out.push(arrow),
                None => {
                    let _ = write!(out, "{cost}");
                }
            }
        }
        out.push('\n');
    }
    out
}
