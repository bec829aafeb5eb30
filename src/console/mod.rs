pub mod prediction_console;

pub use prediction_console::{clock_label, render_gauge, time_of_day, PredictionConsole};
