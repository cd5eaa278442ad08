//! Comparison tables and correctness reports.

use std::io::{self, Write};

use gridpath_search::{Comparison, PlanResult};

const RULE: &str = "==============================================================";

fn write_row<W: Write>(out: &mut W, label: &str, r: &PlanResult) -> io::Result<()> {
    writeln!(
        out,
        "{:<15}{:<10.2}{:<10}{:<15}{:<10.3}",
        label,
        r.total_cost(),
        r.path().len(),
        r.nodes_expanded(),
        r.execution_time_ms()
    )
}

/// Print the three algorithms side by side.
pub fn write_comparison<W: Write>(out: &mut W, cmp: &Comparison) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "                     ALGORITHM COMPARISON")?;
    writeln!(out, "{RULE}\n")?;
    writeln!(
        out,
        "{:<15}{:<10}{:<10}{:<15}{:<10}",
        "Algorithm", "Cost", "Length", "Expanded", "Time(ms)"
    )?;
    writeln!(out, "{}", "-".repeat(61))?;
    for (label, r) in cmp.rows() {
        write_row(out, label, r)?;
    }
    writeln!(out, "\n{RULE}\n")?;
    writeln!(out, "Note: Cost = steps for BFS, total weights for Dijkstra/A*")?;
    writeln!(out, "      All algorithms run on the same grid with identical obstacles")
}

fn mark(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}

/// Print which verification checks held for one run.
pub fn write_correctness_report<W: Write>(out: &mut W, r: &PlanResult) -> io::Result<()> {
    writeln!(out, "\nCorrectness report: {}", r.algorithm())?;
    if !r.success() {
        return writeln!(out, "  no path found; nothing to verify");
    }
    writeln!(out, "  monotonic extraction    {}", mark(r.monotonicity_verified()))?;
    writeln!(out, "  consistent heuristic    {}", mark(r.heuristic_consistent()))?;
    writeln!(out, "  optimal goal extraction {}", mark(r.optimal_goal_extraction()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Grid, State};
    use gridpath_search::{Graph, Planner};

    fn comparison() -> Comparison {
        let grid = Grid::new(6, 6);
        let graph = Graph::new(&grid);
        Planner::new(&graph).compare(State::new(0, 0), State::new(5, 3))
    }

    #[test]
    fn table_lists_every_algorithm() {
        let mut buf = Vec::new();
        write_comparison(&mut buf, &comparison()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("ALGORITHM COMPARISON"));
        assert!(text.contains("BFS (steps)"));
        assert!(text.contains("Dijkstra"));
        assert!(text.contains("A* (optimal)"));
        let bfs_row = text.lines().find(|l| l.starts_with("BFS")).unwrap();
        assert!(bfs_row.contains("5.00"));
    }

    #[test]
    fn correctness_report_marks_checks() {
        let cmp = comparison();
        let mut buf = Vec::new();
        write_correctness_report(&mut buf, &cmp.dijkstra).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Correctness report: Dijkstra"));
        assert_eq!(text.matches("PASS").count(), 3);
    }

    #[test]
    fn correctness_report_marks_failures() {
        let mut grid = Grid::new(5, 1);
        for s in grid.bounds() {
            grid.set_weight(s, 0.5);
        }
        let graph = Graph::new(&grid);
        let r = Planner::new(&graph).plan(
            State::new(0, 0),
            State::new(4, 0),
            gridpath_search::SearchType::AStar,
        );
        let mut buf = Vec::new();
        write_correctness_report(&mut buf, &r).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let line = text.lines().find(|l| l.contains("consistent heuristic")).unwrap();
        assert!(line.ends_with("FAIL"));
    }

    #[test]
    fn failed_run_has_nothing_to_verify() {
        let grid = Grid::new(2, 2);
        let graph = Graph::new(&grid);
        let r = Planner::new(&graph).plan(
            State::new(0, 0),
            State::new(9, 9),
            gridpath_search::SearchType::Dijkstra,
        );
        let mut buf = Vec::new();
        write_correctness_report(&mut buf, &r).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("nothing to verify"));
    }
}
