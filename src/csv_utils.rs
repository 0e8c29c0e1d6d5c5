//! CSV reading of command files and writing of account listings.

use std::io::Write;
use std::path::Path;

use crate::dto::{AccountRow, CommandRow};
use crate::stores::Account;

/// Creates an iterator over the command rows of a file.
/// Fields are trimmed, so ` ACC1001 ` and `ACC1001` name the same account.
pub fn read_commands<P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<CommandRow>>>
where
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Writes one [`AccountRow`] per account, in iteration order.
pub fn write_accounts<'a, W>(
    writer: W,
    accounts: impl Iterator<Item = &'a Account>,
) -> csv::Result<()>
where
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for account in accounts {
        wtr.serialize(AccountRow::from(account))?;
    }
    wtr.flush()?;
    Ok(())
}
