use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use serde_json::Value;

use crate::{Nutrient, number::loose_number};

/// Daily nutrient targets, with optional ceilings.
///
/// Targets keep the order in which they were first set, which is also the
/// order of the source document when deserialized. Keys that do not name a
/// recognized nutrient (or its `_max` ceiling) are ignored, as are values
/// that are not numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientTargets {
    amounts: Vec<(Nutrient, f64)>,
    maxes: BTreeMap<Nutrient, f64>,
}

impl NutrientTargets {
    /// Creates an empty target map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with a target amount set.
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.set_target(nutrient, amount);
        self
    }

    /// Returns the map with a ceiling set.
    #[must_use]
    pub fn with_max(mut self, nutrient: Nutrient, max: f64) -> Self {
        self.set_max(nutrient, max);
        self
    }

    /// Sets the target amount of a nutrient.
    ///
    /// Replacing an existing target keeps its original position.
    pub fn set_target(&mut self, nutrient: Nutrient, amount: f64) {
        match self.amounts.iter_mut().find(|(n, _)| *n == nutrient) {
            Some(entry) => entry.1 = amount,
            None => self.amounts.push((nutrient, amount)),
        }
    }

    /// Sets the ceiling of a nutrient.
    pub fn set_max(&mut self, nutrient: Nutrient, max: f64) {
        self.maxes.insert(nutrient, max);
    }

    /// Returns the target amount of a nutrient, if set.
    #[must_use]
    pub fn target(&self, nutrient: Nutrient) -> Option<f64> {
        self.amounts
            .iter()
            .find(|(n, _)| *n == nutrient)
            .map(|(_, amount)| *amount)
    }

    /// Returns the ceiling of a nutrient, if set.
    #[must_use]
    pub fn max(&self, nutrient: Nutrient) -> Option<f64> {
        self.maxes.get(&nutrient).copied()
    }

    /// Iterates over `(nutrient, target)` pairs in insertion order.
    ///
    /// Includes zero and negative targets; filtering is up to the consumer.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.amounts.iter().copied()
    }

    /// Returns the number of nutrients with a target amount.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no target amount is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl<'de> Deserialize<'de> for NutrientTargets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TargetsVisitor;

        impl<'de> Visitor<'de> for TargetsVisitor {
            type Value = NutrientTargets;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of nutrient names to target amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut targets = NutrientTargets::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    let Some(amount) = loose_number(&value) else {
                        continue;
                    };
                    if let Some(nutrient) = Nutrient::from_max_key(&key) {
                        targets.set_max(nutrient, amount);
                    } else if let Ok(nutrient) = key.parse() {
                        targets.set_target(nutrient, amount);
                    }
                }
                Ok(targets)
            }
        }

        deserializer.deserialize_map(TargetsVisitor)
    }
}
