// src/console/prediction_console.rs

use std::io::{self, BufRead, Write};

use crate::prediction_engine::{explain, model_info, validate_request, PredictionBreakdown};
use crate::shared_data::{PredictionOutput, TrafficPredictionRequest};

const GAUGE_WIDTH: usize = 40;

/// Part of the day shown next to the selected hour.
pub fn time_of_day(hour: u8) -> &'static str {
    match hour {
        5..=11 => "Morning",
        12..=16 => "Afternoon",
        17..=20 => "Evening",
        _ => "Night",
    }
}

/// 12-hour clock label, e.g. `0 -> "12:00 AM"`, `13 -> "1:00 PM"`.
pub fn clock_label(hour: u8) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:00 {}", display_hour, period)
}

/// Text gauge on a 0-100 scale, e.g. `[##########..........]  48/100  Medium Congestion`.
pub fn render_gauge(output: &PredictionOutput) -> String {
    let score = output.predicted_traffic();
    let filled = ((score / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    format!(
        "[{}{}] {:>3.0}/100  {} Congestion",
        "#".repeat(filled),
        ".".repeat(GAUGE_WIDTH - filled),
        score,
        output.congestion_level().title()
    )
}

/// Menu-driven console that collects inputs, runs a prediction and shows the result.
pub struct PredictionConsole<R, W> {
    input: R,
    output: W,
    last_request: TrafficPredictionRequest,
    last_result: Option<PredictionBreakdown>,
}

impl<R: BufRead, W: Write> PredictionConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_request: TrafficPredictionRequest::default(),
            last_result: None,
        }
    }

    pub fn last_result(&self) -> Option<&PredictionBreakdown> {
        self.last_result.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nTraffic Congestion Predictor")?;
            writeln!(self.output, "1. Predict Congestion")?;
            writeln!(self.output, "2. Explain Last Prediction")?;
            writeln!(self.output, "3. Show Last Prediction as JSON")?;
            writeln!(self.output, "4. Show Model Info")?;
            writeln!(self.output, "5. Exit")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match line.trim().parse::<u32>().unwrap_or(0) {
                1 => {
                    if !self.predict_from_prompts()? {
                        return Ok(());
                    }
                }
                2 => self.show_explanation()?,
                3 => self.show_json()?,
                4 => {
                    let info = serde_json::to_string_pretty(&model_info()).map_err(io::Error::other)?;
                    writeln!(self.output, "{}", info)?;
                }
                5 => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    // Returns false when input ran out mid-form.
    fn predict_from_prompts(&mut self) -> io::Result<bool> {
        let defaults = self.last_request.clone();
        let mut request = defaults.clone();

        let fields: [(&str, String); 5] = [
            ("Temperature (°C, -10 to 40)", defaults.temperature.to_string()),
            ("Rainfall (mm, 0 to 50)", defaults.rainfall.to_string()),
            ("Hour (0-23)", defaults.hour.to_string()),
            ("Weekend? (y/n)", if defaults.is_weekend { "y" } else { "n" }.to_string()),
            ("Road type (highway/urban/rural)", defaults.road_type.clone()),
        ];

        for (index, (label, default)) in fields.iter().enumerate() {
            let Some(line) = self.prompt(&format!("{} [{}]: ", label, default))? else {
                return Ok(false);
            };
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            let parsed = match index {
                0 => value.parse::<f64>().map(|v| request.temperature = v).is_ok(),
                1 => value.parse::<f64>().map(|v| request.rainfall = v).is_ok(),
                2 => value.parse::<f64>().map(|v| request.hour = v).is_ok(),
                3 => match value.to_ascii_lowercase().as_str() {
                    "y" | "yes" | "true" => {
                        request.is_weekend = true;
                        true
                    }
                    "n" | "no" | "false" => {
                        request.is_weekend = false;
                        true
                    }
                    _ => false,
                },
                _ => {
                    request.road_type = value.to_string();
                    true
                }
            };
            if !parsed {
                writeln!(self.output, "Prediction failed: please check your inputs.")?;
                log::warn!("Unparseable console input for {}: {:?}", label, value);
                return Ok(true);
            }
        }

        match validate_request(&request) {
            Ok(input) => {
                let breakdown = explain(&input);
                let output = breakdown.output;
                writeln!(
                    self.output,
                    "{} ({})",
                    clock_label(input.hour()),
                    time_of_day(input.hour())
                )?;
                writeln!(self.output, "{}", render_gauge(&output))?;
                writeln!(
                    self.output,
                    "Prediction complete: {} congestion expected.",
                    output.congestion_level()
                )?;
                self.last_request = request;
                self.last_result = Some(breakdown);
            }
            Err(e) => {
                log::warn!("Console prediction rejected: {}", e);
                writeln!(self.output, "Prediction failed: {}", e)?;
            }
        }
        Ok(true)
    }

    fn show_explanation(&mut self) -> io::Result<()> {
        let Some(breakdown) = self.last_result else {
            writeln!(self.output, "No prediction yet.")?;
            return Ok(());
        };
        writeln!(self.output, "Period:            {:?}", breakdown.period)?;
        writeln!(self.output, "Base traffic:      {:.2}", breakdown.base)?;
        writeln!(self.output, "After weekend:     {:.2}", breakdown.after_weekend)?;
        writeln!(self.output, "After road type:   {:.2}", breakdown.after_road_type)?;
        writeln!(self.output, "Rain term:        +{:.2}", breakdown.rain_term)?;
        writeln!(self.output, "Temperature term: +{:.2}", breakdown.temperature_term)?;
        writeln!(self.output, "Raw total:         {:.2}", breakdown.raw_total)?;
        writeln!(self.output, "{}", render_gauge(&breakdown.output))
    }

    fn show_json(&mut self) -> io::Result<()> {
        match &self.last_result {
            Some(breakdown) => {
                let json = serde_json::to_string_pretty(&breakdown.output).map_err(io::Error::other)?;
                writeln!(self.output, "{}", json)
            }
            None => writeln!(self.output, "No prediction yet."),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
