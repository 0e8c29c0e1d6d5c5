use std::error::Error;
use std::io::Write;
use std::path::Path;

use super::apply_row;
use crate::{csv_utils::write_accounts, dto::CommandRow, Engine};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the teller async on the given command file and writes the account listing to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams command rows from the input file and sends them to the processor via channel.
/// * Processor - sole owner of the [`Engine`]; applies rows in arrival order until the channel is closed.
///
/// Because only the processor touches the engine, identifier allocation and
/// account insertion are never interleaved between commands.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_commands(input_path, tx));
    let processor_handle = tokio::spawn(process_commands(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let engine = processor_handle.await?;

    write_accounts(writer, engine.accounts())?;
    Ok(())
}

/// Reads and deserializes command rows from a CSV file.
/// Returns them through the provided channel.
async fn read_commands(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<CommandRow>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<CommandRow>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let row = result?;
        if tx.send(row).await.is_err() {
            // Receiver dropped, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Applies command rows received through the channel.
/// Returns the final engine state once the channel is closed by the reader.
async fn process_commands(mut rx: mpsc::Receiver<CommandRow>) -> Engine {
    let mut engine = Engine::new();
    while let Some(row) = rx.recv().await {
        apply_row(&mut engine, row);
    }
    engine
}
