//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::CELL_SIZE;
use crate::life::Grid;
use crate::sim::DemoState;

/// Append two triangles covering an axis-aligned rect
pub fn push_rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));

    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
    out.push(Vertex::new(min.x, max.y, color));
}

/// Append a rect outline as four strips of the given width
pub fn push_rect_outline(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, width: f32, color: [f32; 4]) {
    // Top and bottom span the full width; sides fill the gap between them
    push_rect(out, min, Vec2::new(size.x, width), color);
    push_rect(
        out,
        Vec2::new(min.x, min.y + size.y - width),
        Vec2::new(size.x, width),
        color,
    );
    push_rect(
        out,
        Vec2::new(min.x, min.y + width),
        Vec2::new(width, size.y - 2.0 * width),
        color,
    );
    push_rect(
        out,
        Vec2::new(min.x + size.x - width, min.y + width),
        Vec2::new(width, size.y - 2.0 * width),
        color,
    );
}

/// Cell fill color from state and live-neighbor count
pub fn cell_color(alive: bool, neighbors: u8) -> [f32; 4] {
    if !alive {
        return colors::LIFE_DEAD;
    }
    match neighbors {
        0 | 1 => colors::LIFE_LONELY,
        2 => colors::LIFE_SETTLED,
        3 => colors::LIFE_THRIVING,
        _ => colors::LIFE_CROWDED,
    }
}

/// One colored quad per live cell; dead cells are the clear color
pub fn life_cells(grid: &Grid) -> Vec<Vertex> {
    let mut out = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.get(x, y) {
                continue;
            }
            let color = cell_color(true, grid.live_neighbors(x, y));
            push_rect(
                &mut out,
                Vec2::new(x as f32 * CELL_SIZE, y as f32 * CELL_SIZE),
                Vec2::splat(CELL_SIZE),
                color,
            );
        }
    }
    out
}

/// The movement demo scene: playfield, border, player square
pub fn feel_scene(state: &DemoState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * 6);

    let field = state.playfield;
    push_rect(&mut out, field.min, field.size(), colors::PLAYFIELD);
    push_rect_outline(&mut out, field.min, field.size(), 2.0, colors::PLAYFIELD_BORDER);

    let half = Vec2::splat(crate::consts::PLAYER_SIZE / 2.0);
    push_rect(
        &mut out,
        state.player.pos - half,
        half * 2.0,
        colors::PLAYER,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rect_covers_corners() {
        let mut out = Vec::new();
        push_rect(&mut out, Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(out.len(), 6);

        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(xs.contains(&10.0) && xs.contains(&40.0));
        assert!(ys.contains(&20.0) && ys.contains(&60.0));
    }

    #[test]
    fn test_cell_color_by_neighbor_count() {
        assert_eq!(cell_color(false, 3), colors::LIFE_DEAD);
        assert_eq!(cell_color(true, 0), colors::LIFE_LONELY);
        assert_eq!(cell_color(true, 1), colors::LIFE_LONELY);
        assert_eq!(cell_color(true, 2), colors::LIFE_SETTLED);
        assert_eq!(cell_color(true, 3), colors::LIFE_THRIVING);
        assert_eq!(cell_color(true, 4), colors::LIFE_CROWDED);
        assert_eq!(cell_color(true, 8), colors::LIFE_CROWDED);
    }

    #[test]
    fn test_life_cells_quad_per_live_cell() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, true);
        grid.set(2, 3, true);
        assert_eq!(life_cells(&grid).len(), 2 * 6);
    }

    #[test]
    fn test_feel_scene_shape_count() {
        let state = DemoState::new();
        // Playfield fill + four outline strips + player: six rects
        assert_eq!(feel_scene(&state).len(), 6 * 6);
    }
}
