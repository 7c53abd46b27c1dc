use std::io::IsTerminal;

use clap::ValueEnum;
use schemagate_validate::Violation;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ProduceOutput<'a> {
    path: &'a str,
    sinks: usize,
}

pub fn print_produced(path: &str, sinks: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ProduceOutput { path, sinks }),
        OutputFormat::Text => println!("published {path} to {sinks} sink(s)"),
    }
}

#[derive(Serialize)]
struct SchemaOutput<'a> {
    path: &'a str,
    sink: &'a str,
    schema: &'a str,
}

pub fn print_schema(path: &str, sink: &str, schema: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&SchemaOutput { path, sink, schema }),
        OutputFormat::Text => println!("{schema}"),
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    path: &'a str,
    valid: bool,
    violations: &'a [Violation],
}

pub fn print_check(path: &str, violations: &[Violation], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&CheckOutput {
            path,
            valid: violations.is_empty(),
            violations,
        }),
        OutputFormat::Text => {
            if violations.is_empty() {
                println!("valid: payload conforms to {path}");
            } else {
                println!("invalid: {} violation(s) against {path}", violations.len());
                for violation in violations {
                    println!("  {} {}", violation.instance_path, violation.message);
                }
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}
