use std::error::Error;
use std::io::Write;
use std::path::Path;

use super::apply_row;
use crate::csv_utils::{read_commands, write_accounts};
use crate::Engine;

/// Runs the teller on the given command file and writes the account listing to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing commands
/// * `writer` - Where to write the account listing (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut engine = Engine::new();

    for row in read_commands(input_path)? {
        // CSV parsing errors are critical - propagate them
        apply_row(&mut engine, row?);
    }

    write_accounts(writer, engine.accounts())?;
    Ok(())
}
