//! Run the demonstration scenarios and print their transcript.
//!
//! Run with: cargo run -p ride_core --example scenario_run

use ride_core::pricing::FareSchedule;
use ride_core::scenario::run_demo;

fn main() {
    let run = match run_demo(&FareSchedule::default()) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("Unexpected error: {err}");
            std::process::exit(1);
        }
    };

    print!("{}", run.transcript());
    println!(
        "--- {} rides priced, {} expected errors caught ---",
        run.rides.len(),
        run.caught_errors.len()
    );
}
