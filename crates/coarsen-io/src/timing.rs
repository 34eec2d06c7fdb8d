//! Wall-clock timing of named run stages (Load, Coarsening, Save).

use std::path::Path;
use std::time::{Duration, Instant};

use coarsen_core::errors::FormatError;
use serde::Serialize;

const HEADERS: [&str; 3] = ["Snippet", "Time [m]", "Time [s]"];

/// One timed stage.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    pub name: String,
    pub minutes: f64,
    pub seconds: f64,
}

impl Snippet {
    fn new(name: &str, elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs_f64();
        Self {
            name: name.to_string(),
            minutes: seconds / 60.0,
            seconds,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Timing {
    snippets: Vec<Snippet>,
}

impl Timing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` and record its duration under `name`.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(name, start.elapsed());
        result
    }

    pub fn record(&mut self, name: &str, elapsed: Duration) {
        tracing::debug!(snippet = name, seconds = elapsed.as_secs_f64(), "timed");
        self.snippets.push(Snippet::new(name, elapsed));
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Aligned plain-text table.
    pub fn render_table(&self) -> String {
        let rows: Vec<[String; 3]> = self
            .snippets
            .iter()
            .map(|s| {
                [
                    s.name.clone(),
                    format!("{:.6}", s.minutes),
                    format!("{:.6}", s.seconds),
                ]
            })
            .collect();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }
        let line = |cells: [&str; 3]| {
            format!(
                "{:<w0$}  {:>w1$}  {:>w2$}\n",
                cells[0],
                cells[1],
                cells[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )
        };
        let mut out = line(HEADERS);
        out.push_str(&format!(
            "{}\n",
            "-".repeat(widths.iter().sum::<usize>() + 4)
        ));
        for row in &rows {
            out.push_str(&line([&row[0], &row[1], &row[2]]));
        }
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = HEADERS.join(",");
        out.push('\n');
        for s in &self.snippets {
            out.push_str(&format!("{},{},{}\n", s.name, s.minutes, s.seconds));
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snippets)
    }

    pub fn save_csv(&self, path: &Path) -> Result<(), FormatError> {
        std::fs::write(path, self.to_csv()).map_err(|e| FormatError::io(path, e))
    }

    pub fn save_json(&self, path: &Path) -> Result<(), FormatError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| FormatError::io(path, e))
    }
}
