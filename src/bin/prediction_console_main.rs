use std::io::{stdin, stdout};
use traffic_congestion::console::PredictionConsole;

fn main() {
    env_logger::init();
    let mut console = PredictionConsole::new(stdin().lock(), stdout());
    if let Err(e) = console.run() {
        eprintln!("Console error: {}", e);
    }
}
