//! Console simulation: random worlds, an animated agent and algorithm
//! comparisons.

use std::io::{self, Write};
use std::thread;

use log::debug;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use gridpath_core::{Grid, State};
use gridpath_search::{Comparison, Graph, PlanResult, Planner, SearchType};

use crate::config::{ConfigError, SimConfig};
use crate::render::{self, Header};
use crate::stats;

/// A single-agent simulation on a randomly generated world.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation with an obstacle-free world.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..u64::MAX));
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fill the world with random obstacles and weights.
    ///
    /// Start and goal are always free. Every other cell is blocked with the
    /// configured probability; the rest get [`Grid::FREE`] for BFS or a
    /// random weight in `[FREE, max_weight)` for weighted algorithms.
    pub fn generate_obstacles(&mut self, algorithm: SearchType) {
        let SimConfig {
            start,
            goal,
            obstacle_percent,
            max_weight,
            ..
        } = self.config;
        for s in self.grid.bounds() {
            let w = if s == start || s == goal {
                Grid::FREE
            } else if self.rng.random_range(0..100) < obstacle_percent {
                Grid::BLOCK
            } else if algorithm.is_weighted() && max_weight > Grid::FREE {
                self.rng.random_range(Grid::FREE..max_weight)
            } else {
                Grid::FREE
            };
            self.grid.set_weight(s, w);
        }
        debug!(
            "generated {}x{} world with {} obstacles",
            self.grid.width(),
            self.grid.height(),
            self.grid.count_blocked()
        );
    }

    /// Plan on the current world without regenerating it.
    pub fn plan(&self, algorithm: SearchType) -> PlanResult {
        let graph = Graph::new(&self.grid);
        Planner::new(&graph).plan(self.config.start, self.config.goal, algorithm)
    }

    /// Generate a world, plan across it and animate the agent along the
    /// path.
    ///
    /// Points are the step count for BFS and the accumulated move cost for
    /// weighted algorithms.
    pub fn run<W: Write>(&mut self, algorithm: SearchType, out: &mut W) -> io::Result<PlanResult> {
        self.generate_obstacles(algorithm);
        let result = self.plan(algorithm);
        let SimConfig { start, goal, .. } = self.config;

        if !result.success() {
            let header = Header {
                algorithm,
                step: 0,
                points: 0.0,
            };
            render::draw_grid(out, &self.grid, start, goal, &[], &header)?;
            writeln!(out, "\r\nNo path found!\r")?;
            return Ok(result);
        }

        let graph = Graph::new(&self.grid);
        let path = result.path();
        let mut points = 0.0;
        for step in 1..path.len() {
            let (prev, curr) = (path[step - 1], path[step]);
            points = if algorithm.is_weighted() {
                points + graph.cost(prev, curr).value().unwrap_or_default()
            } else {
                step as f64
            };
            let header = Header {
                algorithm,
                step,
                points,
            };
            render::clear_screen(out)?;
            render::draw_grid(out, &self.grid, curr, goal, &path[..step], &header)?;
            if !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        }

        writeln!(
            out,
            "\r\nGoal reached! Total points/cost: {points:.2}, Execution time: {:.3} ms\r",
            result.execution_time_ms()
        )?;
        Ok(result)
    }

    /// Generate a weighted world and run all three algorithms on it.
    pub fn compare<W: Write>(&mut self, out: &mut W) -> io::Result<Comparison> {
        self.generate_obstacles(SearchType::Dijkstra);
        let graph = Graph::new(&self.grid);
        let cmp = Planner::new(&graph).compare(self.config.start, self.config.goal);
        stats::write_comparison(out, &cmp)?;
        stats::write_correctness_report(out, &cmp.dijkstra)?;
        stats::write_correctness_report(out, &cmp.astar)?;
        Ok(cmp)
    }
}
