use crate::errors::{SpeciesDataError, SpeciesDataResult};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

// Re-export the Species enum from the schema crate
pub use schema::{Species, SpeciesData};

const SPECIES_CATALOG: &str = include_str!("../data/species.ron");

static SPECIES_DATA: LazyLock<Result<HashMap<Species, SpeciesData>, SpeciesDataError>> =
    LazyLock::new(|| parse_species_catalog(SPECIES_CATALOG));

/// Parse a RON species catalog, checking that every evolution target is also present.
pub fn parse_species_catalog(source: &str) -> SpeciesDataResult<HashMap<Species, SpeciesData>> {
    let table: HashMap<Species, SpeciesData> =
        ron::from_str(source).map_err(|e| SpeciesDataError::MalformedData(e.to_string()))?;
    for (species, data) in &table {
        if let Some(evolution) = &data.evolution {
            if !table.contains_key(&evolution.evolves_into) {
                return Err(SpeciesDataError::MalformedData(format!(
                    "{} evolves into {}, which has no entry",
                    species, evolution.evolves_into
                )));
            }
        }
    }
    tracing::debug!(species = table.len(), "species catalog loaded");
    Ok(table)
}

pub fn get_species_data(species: Species) -> SpeciesDataResult<&'static SpeciesData> {
    let table = SPECIES_DATA.as_ref().map_err(Clone::clone)?;
    table
        .get(&species)
        .ok_or(SpeciesDataError::SpeciesNotFound(species))
}

/// Resolve a species by its display name.
pub fn parse_species(name: &str) -> SpeciesDataResult<Species> {
    Species::from_str(name).map_err(|_| SpeciesDataError::UnknownSpecies(name.to_string()))
}
