/// Character-cell line renderer for projected wireframes
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use roll3d_core::{Role, ScreenPoint};
use std::io::Write;

/// Half-width of the square world window shown on screen
pub const WORLD_EXTENT: f64 = 50.0;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// How a role's outlines look on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub glyph: char,
    pub color: Color,
}

impl Stroke {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Ball => Self {
                glyph: 'o',
                color: Color::Blue,
            },
            Role::House => Self {
                glyph: '#',
                color: Color::Red,
            },
        }
    }
}

/// Renderer that draws polylines into a character buffer
pub struct LineRenderer {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Option<Stroke>>,
}

impl LineRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        // equal axes: one world unit spans the same physical distance both ways
        let span = 2.0 * WORLD_EXTENT;
        let scale_y = (height as f64 / span).min(width as f64 / (span * CELL_ASPECT));
        Self {
            width,
            height,
            scale_x: scale_y * CELL_ASPECT,
            scale_y,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cell under a screen point, `None` for non-finite input
    pub fn to_cell(&self, p: &ScreenPoint) -> Option<(i64, i64)> {
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        let col = (self.width as f64 / 2.0 + p.x * self.scale_x).floor().clamp(-1e9, 1e9);
        let row = (self.height as f64 / 2.0 - p.y * self.scale_y).floor().clamp(-1e9, 1e9);
        Some((col as i64, row as i64))
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Stroke> {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    /// Connect consecutive points; a non-finite point breaks the line
    pub fn draw_polyline(&mut self, points: &[ScreenPoint], stroke: Stroke) {
        let cells: Vec<Option<(i64, i64)>> = points.iter().map(|p| self.to_cell(p)).collect();
        if let [Some(single)] = cells.as_slice() {
            self.plot(*single, stroke);
        }
        for pair in cells.windows(2) {
            if let [Some(a), Some(b)] = pair {
                self.draw_line(*a, *b, stroke);
            }
        }
    }

    fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), stroke: Stroke) {
        // Bresenham, clipped per cell
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        // lines far outside the window would only walk off-screen cells
        let limit = 16 * (self.width + self.height) as i64;
        if dx.max(-dy) > limit {
            return;
        }

        loop {
            self.plot((x, y), stroke);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn plot(&mut self, (col, row): (i64, i64), stroke: Stroke) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + col as usize] = Some(stroke);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                match cell {
                    Some(stroke) => {
                        writer.queue(SetForegroundColor(stroke.color))?;
                        writer.queue(Print(stroke.glyph))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
