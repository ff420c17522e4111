// crates/worldfacets-core/src/loader/binary.rs
//! Bincode snapshots, gzip-wrapped when `compact` is enabled.

use crate::error::Result;
use crate::model::{Snapshot, WorldDb};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub fn read_snapshot<R: Read>(mut reader: R) -> Result<WorldDb> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let snapshot: Snapshot = bincode::deserialize(&data)?;
    WorldDb::from_snapshot(snapshot)
}

pub fn write_snapshot(db: &WorldDb, path: &Path) -> Result<()> {
    let snapshot = Snapshot {
        countries: db.countries().to_vec(),
        continents: db.continents().to_vec(),
    };
    let bytes = bincode::serialize(&snapshot)?;

    let file = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    let mut out = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    #[cfg(not(feature = "compact"))]
    let mut out = file;

    out.write_all(&bytes)?;

    #[cfg(feature = "compact")]
    out.finish()?.flush()?;
    #[cfg(not(feature = "compact"))]
    out.flush()?;

    info!(
        "wrote binary snapshot ({} countries) to {}",
        db.country_count(),
        path.display()
    );
    Ok(())
}
