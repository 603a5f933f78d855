//! TSV → JSON conversion.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use floormap_ingest::read_catalog;
use floormap_model::Catalog;

/// Reads the export at `input` and writes the catalog JSON to `output`.
pub fn convert<W: Write>(input: &Path, output: W) -> Result<Catalog> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let catalog =
        read_catalog(input).with_context(|| format!("read floor locations: {}", input.display()))?;
    let stats = catalog.stats();
    info!(
        libraries = stats.libraries,
        collections = stats.collections,
        entries = stats.entries,
        catch_all_entries = stats.catch_all_entries,
        duration_ms = start.elapsed().as_millis(),
        "catalog built"
    );

    write_catalog(output, &catalog)?;
    Ok(catalog)
}

/// Writes the catalog as one compact JSON document followed by a newline.
pub fn write_catalog<W: Write>(mut output: W, catalog: &Catalog) -> Result<()> {
    serde_json::to_writer(&mut output, catalog).context("serialize catalog")?;
    writeln!(output).context("write output")?;
    output.flush().context("flush output")?;
    Ok(())
}
