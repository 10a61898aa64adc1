use tracing::debug;

use crate::city::normalize_city;
use crate::loader::PlantTable;
use crate::model::PlantRecord;

/// Plant query service: read-only filters over the loaded table.
///
/// All matching is case-insensitive. A record whose matched column is
/// missing or not a string never matches.
pub struct PlantService {
    table: PlantTable,
}

impl PlantService {
    pub fn new(table: PlantTable) -> Self {
        Self { table }
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// All records, or those whose `City` contains `region` when given.
    pub fn list_plants(&self, region: Option<&str>) -> Vec<PlantRecord> {
        match region.filter(|r| !r.is_empty()) {
            Some(region) => self.city_contains(region),
            None => self.table.records().to_vec(),
        }
    }

    /// Records for a city token: alias-normalized exact match, falling back
    /// to a substring match when nothing matches exactly.
    pub fn plants_by_city(&self, city: &str) -> Vec<PlantRecord> {
        let normalized = normalize_city(city);
        let wanted = normalized.to_lowercase();

        let exact: Vec<PlantRecord> = self
            .table
            .records()
            .iter()
            .filter(|r| r.city().is_some_and(|c| c.to_lowercase() == wanted))
            .cloned()
            .collect();
        if !exact.is_empty() {
            debug!("city {:?} → {:?}: {} exact matches", city, normalized, exact.len());
            return exact;
        }

        let fallback = self.city_contains(&normalized);
        debug!("city {:?} → {:?}: {} substring matches", city, normalized, fallback.len());
        fallback
    }

    /// First record (source order) whose `Name` contains `name`.
    pub fn plant_by_name(&self, name: &str) -> Option<PlantRecord> {
        let needle = name.to_lowercase();
        self.table
            .records()
            .iter()
            .find(|r| contains_ci(r.name(), &needle))
            .cloned()
    }

    fn city_contains(&self, token: &str) -> Vec<PlantRecord> {
        let needle = token.to_lowercase();
        self.table
            .records()
            .iter()
            .filter(|r| contains_ci(r.city(), &needle))
            .cloned()
            .collect()
    }
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}
