use crate::data::{Error, RentalRecord};
use std::{fs::File, path::Path};
use tracing::debug;

/// Loads every listing from the CSV file at `path`, in file order.
pub(crate) fn load_rentals(path: &Path) -> Result<Vec<RentalRecord>, Error> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    debug!("Reading rentals from {}", path.display());
    read_rentals(File::open(path)?)
}

/// Simple CSV importer for `RentalRecord`s. The first malformed row aborts the
/// whole load; there's no partial result.
pub(crate) fn read_rentals<R: std::io::Read>(reader: R) -> Result<Vec<RentalRecord>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr
        .deserialize()
        .collect::<Result<Vec<RentalRecord>, _>>()?;
    debug!("Loaded {} rental records", records.len());
    Ok(records)
}
