use serde::{Deserialize, Serialize};

use crate::world_core::error::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Water,
    Beach,
    Ground,
    Mountain,
    Snow,
}

/// One row of a tier table: heights strictly below `max_height` belong to `id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub max_height: f64,
    pub id: Biome,
}

impl TierSpec {
    pub fn new(max_height: f64, id: Biome) -> Self {
        Self { max_height, id }
    }
}

/// Sorted snapshot of a caller-supplied tier table.
///
/// The source slice is never reordered. Tiers sharing a `max_height` keep
/// their original relative order, so the earlier one wins.
#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: Vec<TierSpec>,
    highest: Biome,
}

impl TierTable {
    pub fn new(specs: &[TierSpec]) -> Result<Self, ConfigurationError> {
        if specs.is_empty() {
            return Err(ConfigurationError::EmptyTierTable);
        }
        if let Some((index, spec)) = specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.max_height.is_nan())
        {
            return Err(ConfigurationError::InvalidTierHeight {
                index,
                value: spec.max_height,
            });
        }

        let mut tiers = specs.to_vec();
        // sort_by is stable
        tiers.sort_by(|a, b| a.max_height.total_cmp(&b.max_height));
        let highest = tiers[tiers.len() - 1].id;
        Ok(Self { tiers, highest })
    }

    pub fn tiers(&self) -> &[TierSpec] {
        &self.tiers
    }

    /// First tier whose `max_height` is strictly above `value`, else the highest tier.
    pub fn classify(&self, value: f64) -> Biome {
        self.tiers
            .iter()
            .find(|tier| value < tier.max_height)
            .map_or(self.highest, |tier| tier.id)
    }
}

/// Classifies a single height against an unsorted tier table.
pub fn classify(value: f64, specs: &[TierSpec]) -> Result<Biome, ConfigurationError> {
    Ok(TierTable::new(specs)?.classify(value))
}
