use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    Nutrient,
    number::{loose_number, positive},
};

/// Per-serving nutrient amounts of one ingredient.
///
/// A nutrient can be absent, or present with an unusable value (a string
/// that is not a number, `null`, NaN). Both read back as `None` from
/// [`NutrientAmounts::get`]; [`NutrientAmounts::is_listed`] tells them apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientAmounts(BTreeMap<Nutrient, f64>);

impl NutrientAmounts {
    /// Creates an empty set of amounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amounts with `nutrient` set to `amount`.
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.insert(nutrient, amount);
        self
    }

    /// Sets the per-serving amount of a nutrient.
    ///
    /// Non-finite amounts are stored as listed-but-invalid.
    pub fn insert(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// Returns the usable per-serving amount of a nutrient.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied().filter(|v| v.is_finite())
    }

    /// Returns true if the nutrient appears in the record, usable or not.
    #[must_use]
    pub fn is_listed(&self, nutrient: Nutrient) -> bool {
        self.0.contains_key(&nutrient)
    }

    /// Iterates over the usable amounts.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(n, v)| (*n, *v))
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientAmounts {
    fn from_iter<T: IntoIterator<Item = (Nutrient, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An ingredient record as published by a recipe source.
///
/// Numeric fields are optional because real-world records are often
/// incomplete. Accessors such as [`Ingredient::serving_size`] return only
/// values that are usable for computation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawIngredient")]
pub struct Ingredient {
    /// Display name, also the identity used when merging recipes.
    pub name: String,

    /// Nominal amount in the recipe, in `unit`.
    pub amount: f64,

    /// Unit label for `amount` and `serving`.
    pub unit: String,

    /// Amount of one serving, in `unit`.
    pub serving: Option<f64>,

    /// Amount in one purchased container, in `unit`.
    pub container_size: Option<f64>,

    /// Price of one container.
    pub item_cost: Option<f64>,

    /// Nutrients contained in one serving.
    pub nutrients: NutrientAmounts,
}

impl Ingredient {
    /// Creates an ingredient with a name and no other data.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: 0.0,
            unit: String::new(),
            serving: None,
            container_size: None,
            item_cost: None,
            nutrients: NutrientAmounts::new(),
        }
    }

    /// Sets the serving size.
    #[must_use]
    pub fn serving(mut self, serving: f64) -> Self {
        self.serving = Some(serving);
        self
    }

    /// Sets the container size and the price of one container.
    #[must_use]
    pub fn container(mut self, size: f64, cost: f64) -> Self {
        self.container_size = Some(size);
        self.item_cost = Some(cost);
        self
    }

    /// Sets the price of one container without a container size.
    #[must_use]
    pub fn item_cost(mut self, cost: f64) -> Self {
        self.item_cost = Some(cost);
        self
    }

    /// Sets the nominal amount and its unit.
    #[must_use]
    pub fn amount(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.amount = amount;
        self.unit = unit.into();
        self
    }

    /// Sets the per-serving amount of a nutrient.
    #[must_use]
    pub fn nutrient(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.nutrients.insert(nutrient, amount);
        self
    }

    /// Returns the serving size if it is finite and positive.
    #[must_use]
    pub fn serving_size(&self) -> Option<f64> {
        positive(self.serving)
    }

    /// Returns the cost of one serving.
    ///
    /// Requires a usable item cost, container size and serving size.
    #[must_use]
    pub fn cost_per_serving(&self) -> Option<f64> {
        let serving = self.serving_size()?;
        let container = positive(self.container_size)?;
        let cost = self.item_cost.filter(|c| c.is_finite())?;
        Some(cost * serving / container)
    }

    /// Converts a number of servings into the ingredient's own unit.
    ///
    /// Returns `None` when the serving size is unlisted.
    #[must_use]
    pub fn quantity_from_servings(&self, servings: f64) -> Option<f64> {
        self.serving_size().map(|serving| servings * serving)
    }

    /// Converts a quantity in the ingredient's own unit into servings.
    ///
    /// Returns `None` when the serving size is unlisted.
    #[must_use]
    pub fn servings_from_quantity(&self, quantity: f64) -> Option<f64> {
        self.serving_size().map(|serving| quantity / serving)
    }

    /// Returns the amount of a nutrient contained in `quantity` of this ingredient.
    ///
    /// An unlisted serving size counts the quantity as servings.
    #[must_use]
    pub fn nutrient_in(&self, nutrient: Nutrient, quantity: f64) -> Option<f64> {
        let per_serving = self.nutrients.get(nutrient)?;
        let servings = self.servings_from_quantity(quantity).unwrap_or(quantity);
        Some(per_serving * servings)
    }

    /// Returns the price of `quantity` of this ingredient.
    ///
    /// Falls back to the raw item cost per serving when container data is
    /// missing, matching how the optimizer prices ingredients.
    #[must_use]
    pub fn price_of(&self, quantity: f64) -> Option<f64> {
        let per_serving = self
            .cost_per_serving()
            .or(self.item_cost)
            .filter(|c| c.is_finite())?;
        let servings = self.servings_from_quantity(quantity).unwrap_or(quantity);
        Some(per_serving * servings)
    }
}

/// Wire shape of an ingredient record.
///
/// Nutrients are flattened into the record, so every key that is not a
/// known field is checked against the nutrient enumeration.
#[derive(Deserialize)]
struct RawIngredient {
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Option<Value>,
    #[serde(default)]
    unit: Option<Value>,
    #[serde(default)]
    serving: Option<Value>,
    #[serde(default)]
    container_size: Option<Value>,
    #[serde(default)]
    item_cost: Option<Value>,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        let number = |value: Option<Value>| value.as_ref().and_then(loose_number);

        let nutrients = raw
            .fields
            .iter()
            .filter_map(|(key, value)| {
                let nutrient = key.parse::<Nutrient>().ok()?;
                Some((nutrient, loose_number(value).unwrap_or(f64::NAN)))
            })
            .collect();

        let unit = match raw.unit {
            Some(Value::String(unit)) => unit,
            _ => String::new(),
        };

        Self {
            name: raw.name,
            amount: number(raw.amount).unwrap_or(0.0),
            unit,
            serving: number(raw.serving),
            container_size: number(raw.container_size),
            item_cost: number(raw.item_cost),
            nutrients,
        }
    }
}
