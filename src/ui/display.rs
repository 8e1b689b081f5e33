//! Display utilities: banner, conversion tables and status lines.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use console::{Term, style};
use figlet_rs::FIGfont;

use crate::cipher::ShiftClass;
use crate::config::APP_NAME;
use crate::types::Direction;

/// One message through the machine in one direction.
pub struct Conversion<'a> {
    pub direction: Direction,
    pub input: &'a str,
    pub output: &'a str,
}

/// One message encoded and decoded again.
pub struct RoundTrip<'a> {
    pub input: &'a str,
    pub encoded: &'a str,
    pub decoded: &'a str,
}

impl RoundTrip<'_> {
    #[inline]
    pub fn passed(&self) -> bool {
        self.input == self.decoded
    }
}

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn plug_summary(plug_a: Option<&str>, plug_b: Option<&str>) -> String {
    match (plug_a, plug_b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => format!("{a} <-> {b}"),
        _ => "off".to_owned(),
    }
}

pub fn conversion_table(conversion: &Conversion<'_>, plug_a: Option<&str>, plug_b: Option<&str>) -> Table {
    let (input_label, output_label) = match conversion.direction {
        Direction::Encode => ("Plaintext", "Ciphertext"),
        Direction::Decode => ("Ciphertext", "Plaintext"),
    };

    let mut table = table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![Cell::new(input_label), Cell::new(conversion.input)]);
    table.add_row(vec![Cell::new(output_label), Cell::new(conversion.output).fg(Color::Green)]);
    table.add_row(vec![Cell::new("Shift class"), Cell::new(ShiftClass::of(conversion.input.len()))]);
    table.add_row(vec![Cell::new("Plugboard"), Cell::new(plug_summary(plug_a, plug_b))]);
    table
}

pub fn round_trip_table(round_trip: &RoundTrip<'_>, plug_a: Option<&str>, plug_b: Option<&str>) -> Table {
    let passed = if round_trip.passed() { Cell::new("passed").fg(Color::Green) } else { Cell::new("FAILED").fg(Color::Red) };

    let mut table = table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![Cell::new("Input"), Cell::new(round_trip.input)]);
    table.add_row(vec![Cell::new("Encoded"), Cell::new(round_trip.encoded)]);
    table.add_row(vec![Cell::new("Decoded"), Cell::new(round_trip.decoded)]);
    table.add_row(vec![Cell::new("Shift class"), Cell::new(ShiftClass::of(round_trip.input.len()))]);
    table.add_row(vec![Cell::new("Plugboard"), Cell::new(plug_summary(plug_a, plug_b))]);
    table.add_row(vec![Cell::new("Round trip"), passed]);
    table
}

pub fn show_conversion(conversion: &Conversion<'_>, plug_a: Option<&str>, plug_b: Option<&str>) {
    println!("{}", conversion_table(conversion, plug_a, plug_b));
}

pub fn show_round_trip(round_trip: &RoundTrip<'_>, plug_a: Option<&str>, plug_b: Option<&str>) {
    println!("{}", round_trip_table(round_trip, plug_a, plug_b));
}

/// Reports a finished batch on stderr so stdout stays clean for output.
pub fn show_success(direction: Direction, lines: u64, path: Option<&Path>) {
    let action = match direction {
        Direction::Encode => "encoded",
        Direction::Decode => "decoded",
    };
    let target = path.map_or_else(|| "stdout".to_owned(), |p| p.display().to_string());

    eprintln!("{} {}", style("✓").green(), style(format!("{lines} line(s) {action} successfully: {target}")).bold());
}

pub fn clear_screen() -> Result<()> {
    Term::stdout().clear_screen().context("failed to clear screen")
}

pub fn print_banner() -> Result<()> {
    let font = FIGfont::standard().map_err(|e| anyhow!("failed to load banner font: {e}"))?;
    let figure = font.convert(APP_NAME).context("failed to render banner")?;
    println!("{}", style(figure).green().bold());
    Ok(())
}
