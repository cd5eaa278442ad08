//! Colored terminal rendering of a planning world.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Grid, State};
use gridpath_search::SearchType;

const COL_AGENT: Color = Color::Yellow;
const COL_GOAL: Color = Color::Green;
const COL_PATH: Color = Color::Blue;
const COL_BLOCK: Color = Color::Red;
const COL_FREE: Color = Color::Grey;
const COL_HEAVY: Color = Color::Magenta;
const COL_TITLE: Color = Color::Cyan;

/// What the status lines above the grid show.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub algorithm: SearchType,
    pub step: usize,
    pub points: f64,
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}

/// The glyph and color used for one cell.
fn cell_glyph(grid: &Grid, s: State, weighted: bool) -> (char, Color) {
    let w = grid.weight(s);
    if w == Grid::BLOCK {
        return ('#', COL_BLOCK);
    }
    if !weighted || w <= Grid::FREE {
        return ('.', COL_FREE);
    }
    // Weights above 9 share the top glyph.
    let digit = (w.floor() as u32).min(9);
    let ch = char::from_digit(digit, 10).unwrap_or('9');
    let color = if digit >= 5 { COL_HEAVY } else { COL_FREE };
    (ch, color)
}

/// Draw the grid with the agent, the goal and the path walked so far.
///
/// Weighted algorithms show each free cell's weight as a digit; BFS shows
/// plain floor.
pub fn draw_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    agent: State,
    goal: State,
    path: &[State],
    header: &Header,
) -> io::Result<()> {
    let unit = if header.algorithm.is_weighted() { "Cost" } else { "Steps" };
    queue!(
        out,
        SetForegroundColor(COL_TITLE),
        Print(format!(
            "Algorithm: {}   Step: {}   {unit}: {:.2}\r\n\r\n",
            header.algorithm, header.step, header.points
        )),
        ResetColor
    )?;

    let weighted = header.algorithm.is_weighted();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let s = State::new(x, y);
            let (ch, color) = if s == agent {
                ('A', COL_AGENT)
            } else if s == goal {
                ('G', COL_GOAL)
            } else if path.contains(&s) {
                ('*', COL_PATH)
            } else {
                cell_glyph(grid, s, weighted)
            };
            queue!(out, SetForegroundColor(color), Print(ch), Print(' '))?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(grid: &Grid, path: &[State], algorithm: SearchType) -> String {
        let mut buf = Vec::new();
        let header = Header {
            algorithm,
            step: 2,
            points: 3.5,
        };
        draw_grid(&mut buf, grid, State::new(0, 0), State::new(2, 2), path, &header).unwrap();
        strip_ansi(&String::from_utf8(buf).unwrap())
    }

    /// Drop SGR escape sequences so assertions only see printed glyphs.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for e in chars.by_ref() {
                    if e == 'm' {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    #[test]
    fn marks_agent_goal_and_path() {
        let grid = Grid::new(3, 3);
        let out = render(&grid, &[State::new(1, 1)], SearchType::Bfs);
        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert_eq!(rows, ["A . . ", ". * . ", ". . G "]);
        assert!(out.contains("Algorithm: BFS"));
        assert!(out.contains("Steps: 3.50"));
    }

    #[test]
    fn weighted_view_shows_digits() {
        let mut grid = Grid::new(3, 3);
        grid.set_weight(State::new(2, 0), 7.4);
        grid.set_weight(State::new(0, 2), Grid::BLOCK);
        let out = render(&grid, &[], SearchType::Dijkstra);
        assert!(out.lines().nth(2).is_some_and(|row| row.contains('7')));
        assert!(out.contains('#'));
        assert!(out.contains("Cost: 3.50"));
    }

    #[test]
    fn bfs_view_hides_weights() {
        let mut grid = Grid::new(3, 3);
        grid.set_weight(State::new(2, 0), 7.0);
        let out = render(&grid, &[], SearchType::Bfs);
        let board: String = out.lines().skip(2).collect();
        assert!(!board.contains('7'));
    }

    #[test]
    fn glyphs() {
        let mut grid = Grid::new(2, 1);
        grid.set_weight(State::new(1, 0), 42.0);
        assert_eq!(cell_glyph(&grid, State::new(0, 0), true).0, '.');
        assert_eq!(cell_glyph(&grid, State::new(1, 0), true), ('9', COL_HEAVY));
        assert_eq!(cell_glyph(&grid, State::new(5, 0), true), ('#', COL_BLOCK));
    }
}
