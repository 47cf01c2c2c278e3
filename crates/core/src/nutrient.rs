use std::{fmt, str::FromStr};

use thiserror::Error;

/// Suffix that marks a nutrient ceiling key in a target map, as in `sodium_max`.
pub const MAX_SUFFIX: &str = "_max";

/// Error returned when a name does not match any recognized nutrient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown nutrient `{0}`")]
pub struct UnknownNutrient(pub String);

macro_rules! define_nutrients {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A recognized nutrient.
        ///
        /// The set is closed: keys in ingredient records or target maps that do
        /// not name one of these variants are ignored. The wire names match the
        /// DIY-Soylent data format, including its historical spellings
        /// (`maganese`, `panthothenic`, `selinium`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Nutrient {
            $($variant),+
        }

        impl Nutrient {
            /// Every recognized nutrient, in wire-name order.
            pub const ALL: &'static [Nutrient] = &[$(Nutrient::$variant),+];

            /// Returns the wire name of the nutrient.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Nutrient::$variant => $name),+
                }
            }
        }

        impl FromStr for Nutrient {
            type Err = UnknownNutrient;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Nutrient::$variant),)+
                    other => Err(UnknownNutrient(other.to_string())),
                }
            }
        }
    };
}

define_nutrients! {
    Biotin => "biotin",
    Calcium => "calcium",
    Calories => "calories",
    Carbs => "carbs",
    Chloride => "chloride",
    Cholesterol => "cholesterol",
    Choline => "choline",
    Chromium => "chromium",
    Copper => "copper",
    Fat => "fat",
    Fiber => "fiber",
    Folate => "folate",
    Iodine => "iodine",
    Iron => "iron",
    Manganese => "maganese",
    Magnesium => "magnesium",
    Molybdenum => "molybdenum",
    Niacin => "niacin",
    Omega3 => "omega_3",
    Omega6 => "omega_6",
    Pantothenic => "panthothenic",
    Phosphorus => "phosphorus",
    Potassium => "potassium",
    Protein => "protein",
    Riboflavin => "riboflavin",
    Selenium => "selinium",
    Sodium => "sodium",
    Sulfur => "sulfur",
    Thiamin => "thiamin",
    VitaminA => "vitamin_a",
    VitaminB12 => "vitamin_b12",
    VitaminB6 => "vitamin_b6",
    VitaminC => "vitamin_c",
    VitaminD => "vitamin_d",
    VitaminE => "vitamin_e",
    VitaminK => "vitamin_k",
    Zinc => "zinc",
}

impl Nutrient {
    /// The macro nutrients, weighted more heavily than micro nutrients.
    pub const MACROS: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Returns true for calories, protein, carbs and fat.
    #[must_use]
    pub fn is_macro(self) -> bool {
        Self::MACROS.contains(&self)
    }

    /// Parses a ceiling key such as `sodium_max` into its nutrient.
    ///
    /// Returns `None` if the key lacks the suffix or the stem is not a
    /// recognized nutrient.
    #[must_use]
    pub fn from_max_key(key: &str) -> Option<Self> {
        key.strip_suffix(MAX_SUFFIX)?.parse().ok()
    }

    /// Returns the ceiling key for this nutrient, as in `sodium_max`.
    #[must_use]
    pub fn max_key(self) -> String {
        format!("{}{MAX_SUFFIX}", self.as_str())
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
