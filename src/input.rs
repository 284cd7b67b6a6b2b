use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::domain::PriceSeries;

/// Loads a price series from a CSV file.
///
/// The file must carry a header row containing `price_column`. The first
/// column doubles as the opaque step label (timestamp or integer index)
/// unless it is the price column itself, in which case rows are labelled
/// by number.
pub fn load_price_csv(path: &Path, price_column: &str) -> Result<PriceSeries> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open price CSV {}", path.display()))?;
    let series = read_prices(reader, price_column)
        .with_context(|| format!("failed to load prices from {}", path.display()))?;
    debug!(n_steps = series.len(), "loaded price series");
    Ok(series)
}

fn read_prices<R: Read>(mut reader: csv::Reader<R>, price_column: &str) -> Result<PriceSeries> {
    let headers = reader.headers().context("failed to read CSV header")?.clone();
    let Some(price_idx) = headers.iter().position(|h| h == price_column) else {
        bail!(
            "no `{}` column in header (found: {})",
            price_column,
            headers.iter().collect::<Vec<_>>().join(", ")
        );
    };
    let label_idx = (price_idx != 0).then_some(0);

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read CSV row {row}"))?;
        let raw = record
            .get(price_idx)
            .with_context(|| format!("row {row} is missing the price field"))?;
        let price: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("row {row}: `{raw}` is not a number"))?;
        let label = match label_idx {
            Some(i) => record.get(i).unwrap_or_default().to_string(),
            None => row.to_string(),
        };
        points.push((label, price));
    }
    if points.is_empty() {
        bail!("CSV contains no data rows");
    }
    Ok(PriceSeries::from_labelled(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &str) -> csv::Reader<Cursor<&[u8]>> {
        csv::Reader::from_reader(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn reads_price_column_with_timestamp_index() {
        let series = read_prices(
            reader("time,price\n2023-06-15T00:00,42.5\n2023-06-15T01:00,-3.0\n"),
            "price",
        )
        .unwrap();
        assert_eq!(series.prices(), &[42.5, -3.0]);
        assert_eq!(series.labels()[0], "2023-06-15T00:00");
    }

    #[test]
    fn price_as_first_column_gets_numbered_labels() {
        let series = read_prices(reader("price\n10\n20\n"), "price").unwrap();
        assert_eq!(series.prices(), &[10.0, 20.0]);
        assert_eq!(series.labels(), &["0", "1"]);
    }

    #[test]
    fn missing_price_column_lists_available_headers() {
        let err = read_prices(reader("time,value\n0,1\n"), "price").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("no `price` column"));
        assert!(msg.contains("time, value"));
    }

    #[test]
    fn unparseable_price_is_an_error() {
        let err = read_prices(reader("time,price\n0,abc\n"), "price").unwrap_err();
        assert!(format!("{err:#}").contains("`abc` is not a number"));
    }

    #[test]
    fn header_only_file_is_an_error() {
        let err = read_prices(reader("time,price\n"), "price").unwrap_err();
        assert!(format!("{err:#}").contains("no data rows"));
    }
}
