use std::process::exit;
use std::time::Instant;

use crossing_solver::solver::solutions::store_solution_locally;
use crossing_solver::solver::solve;

fn main() {
    env_logger::init();

    let now = Instant::now();
    match solve() {
        Ok(Some(solution)) => {
            let ferried = solution.iter().filter(|step| step.ferried.is_some()).count();
            println!("Solution has {} moves.", ferried);
            for step in solution.iter() {
                println!("{}", step);
            }
            if let Err(err) = store_solution_locally(&solution) {
                eprintln!("unable to store the solution locally.\nerror: {:?}", err);
            }
        }
        Ok(None) => println!("Sorry, unable to solve... :-("),
        Err(err) => {
            eprintln!("the solver tripped over its own invariants: {:?}", err);
            exit(1);
        }
    }
    println!("The solver took {} seconds.", now.elapsed().as_secs_f64());
}
