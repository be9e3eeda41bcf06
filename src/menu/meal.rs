use serde::{Deserialize, Serialize};

use crate::parse::Description;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MealKind {
    Lunch,
    Dinner,
}

impl MealKind {
    pub const LUNCH_LABEL: &'static str = "Almoço";
    pub const DINNER_LABEL: &'static str = "Jantar";

    /// Matches a section title exactly; anything else isn't a meal we serve.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            Self::LUNCH_LABEL => Some(Self::Lunch),
            Self::DINNER_LABEL => Some(Self::Dinner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    pub dish: String,
    pub accompaniments: Vec<String>,
    pub observation: String,
}

impl MealSlot {
    pub fn new(dish: String, description: Description) -> Self {
        let Description {
            accompaniments,
            observation,
        } = description;
        Self {
            dish,
            accompaniments,
            observation,
        }
    }
}
