//! Interactive menu parsing and printing.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use gridpath_search::SearchType;

/// Top level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulate,
    Compare,
    Exit,
}

/// Parse a top level menu line. Unknown input yields `None`.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Simulate),
        "2" => Some(MenuChoice::Compare),
        "3" | "q" | "quit" | "exit" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Parse an algorithm selection. Anything unrecognized falls back to BFS.
pub fn parse_algorithm(line: &str) -> SearchType {
    match line.trim().to_ascii_lowercase().as_str() {
        "2" | "dijkstra" => SearchType::Dijkstra,
        "3" | "a*" | "astar" => SearchType::AStar,
        _ => SearchType::Bfs,
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        Print("\n=== Grid Path Planner ===\n"),
        ResetColor,
        Print("1. Run simulation\n"),
        Print("2. Compare algorithms\n"),
        Print("3. Exit\n"),
        Print("Choice: ")
    )?;
    out.flush()
}

pub fn print_algorithm_menu<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("Select algorithm:\n"))?;
    for (i, alg) in SearchType::ALL.iter().enumerate() {
        queue!(out, Print(format!("{}. {alg}\n", i + 1)))?;
    }
    queue!(out, Print("Choice: "))?;
    out.flush()
}
