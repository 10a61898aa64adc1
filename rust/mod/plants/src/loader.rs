use std::fs::File;
use std::io::Read;
use std::path::Path;

use greenar_core::ServiceError;
use serde_json::Map;
use tracing::{debug, info};

use crate::model::{CITY_COLUMN, ColumnKind, NAME_COLUMN, PlantRecord};
use crate::slug::AssetBase;

/// The in-memory plant table, in source-file order.
///
/// Built once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct PlantTable {
    records: Vec<PlantRecord>,
}

impl PlantTable {
    pub fn new(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the plant table from a CSV file and attach derived asset URLs.
pub fn load_csv(path: &Path, assets: &AssetBase) -> Result<PlantTable, ServiceError> {
    debug!("Loading plant table from {:?}", path);
    let file = File::open(path)
        .map_err(|e| ServiceError::Storage(format!("cannot open {}: {}", path.display(), e)))?;
    let table = load_from_reader(file, assets)?;
    info!("Loaded {} plant records from {}", table.len(), path.display());
    Ok(table)
}

/// Parse CSV (with a header row) from any reader.
///
/// The header must contain `Name` and `City`; every other column is kept
/// as-is. `Name` and `City` are always text. Other columns are typed as a
/// whole: integer or float only when every non-empty cell parses. Each
/// record gets `model_url`, `ios_model_url` and `image_url` derived from
/// its `Name`.
pub fn load_from_reader<R: Read>(reader: R, assets: &AssetBase) -> Result<PlantTable, ServiceError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| ServiceError::Storage(format!("cannot read CSV header: {}", e)))?
        .clone();

    for required in [NAME_COLUMN, CITY_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(ServiceError::Validation(format!(
                "plant table is missing required column '{}'",
                required
            )));
        }
    }

    let rows = rdr
        .records()
        .enumerate()
        .map(|(i, row)| {
            row.map_err(|e| ServiceError::Storage(format!("bad CSV row {}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let kinds: Vec<ColumnKind> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            if header == NAME_COLUMN || header == CITY_COLUMN {
                ColumnKind::Text
            } else {
                ColumnKind::infer(rows.iter().map(|row| row.get(col).unwrap_or_default()))
            }
        })
        .collect();

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut fields = Map::new();
        for ((column, kind), raw) in headers.iter().zip(&kinds).zip(row.iter()) {
            fields.insert(column.to_string(), kind.value(raw));
        }

        let mut record = PlantRecord::new(fields);
        let urls = assets.derive(record.name().unwrap_or_default());
        record.attach_asset_urls(urls);
        records.push(record);
    }

    debug!("Parsed {} rows ({} columns)", records.len(), headers.len());
    Ok(PlantTable::new(records))
}
