use std::io::{self, BufRead, Write};

use gridpath_demo::menu::{self, MenuChoice};
use gridpath_demo::{SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(SimConfig::default())?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut line = String::new();

    loop {
        menu::print_menu(&mut out)?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match menu::parse_menu_choice(&line) {
            Some(MenuChoice::Simulate) => {
                menu::print_algorithm_menu(&mut out)?;
                line.clear();
                input.read_line(&mut line)?;
                let algorithm = menu::parse_algorithm(&line);
                sim.run(algorithm, &mut out)?;
            }
            Some(MenuChoice::Compare) => {
                sim.compare(&mut out)?;
            }
            Some(MenuChoice::Exit) => break,
            None => writeln!(out, "Invalid choice")?,
        }
    }
    Ok(())
}
