// Output formatting for CLI

use serde::Serialize;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    /// Serialize `value` for the json/yaml formats; text rendering is done
    /// per command.
    pub fn print_value<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        match self {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
            OutputFormat::Text => {}
        }
        Ok(())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Print a simple key-value pair for text output
pub fn print_field(label: &str, value: &str) {
    println!("{:<14} {}", format!("{label}:"), value);
}

/// Print a fixed-width table: a header row, then one line per record.
pub fn print_table(columns: &[(&str, usize)], rows: &[Vec<String>]) {
    fn render(cells: &[(&str, usize)]) -> String {
        cells
            .iter()
            .map(|&(value, width)| {
                let cell = if value.len() > width && width > 3 {
                    format!("{}...", &value[..width - 3])
                } else {
                    value.to_string()
                };
                format!("{cell:<width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    println!("{}", render(columns));
    for row in rows {
        let cells: Vec<(&str, usize)> = row
            .iter()
            .map(String::as_str)
            .zip(columns.iter().map(|(_, width)| *width))
            .collect();
        println!("{}", render(&cells));
    }
}
