mod meal;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use meal::{MealKind, MealSlot};

/// Both meals served on one date. Slots stay empty when the page had no such section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDay {
    #[serde(rename = "Almoço")]
    pub lunch: MealSlot,
    #[serde(rename = "Jantar")]
    pub dinner: MealSlot,
}

impl MenuDay {
    pub fn slot_mut(&mut self, kind: MealKind) -> &mut MealSlot {
        match kind {
            MealKind::Lunch => &mut self.lunch,
            MealKind::Dinner => &mut self.dinner,
        }
    }
}

/// Menus keyed by date, in the order they were queried.
/// Serializes as `{"YYYY-MM-DD": MenuDay, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCollection(IndexMap<NaiveDate, MenuDay>);

impl MenuCollection {
    pub fn with_capacity(n: usize) -> Self {
        Self(IndexMap::with_capacity(n))
    }

    /// Adds the menu for `date`. A date seen before keeps its original position.
    pub fn insert(&mut self, date: NaiveDate, day: MenuDay) {
        self.0.insert(date, day);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&MenuDay> {
        self.0.get(&date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, MenuDay)> for MenuCollection {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, MenuDay)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialized_shape() {
        let mut day = MenuDay::default();
        *day.slot_mut(MealKind::Lunch) = MealSlot {
            dish: "Strogonoff".into(),
            accompaniments: vec!["Arroz".into(), "Batata palha".into()],
            observation: "Contém lactose".into(),
        };
        let mut menus = MenuCollection::with_capacity(2);
        menus.insert(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), day);
        menus.insert(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), MenuDay::default());

        let value = serde_json::to_value(&menus).unwrap();
        assert_eq!(
            value,
            json!({
                "2024-03-05": {
                    "Almoço": {
                        "dish": "Strogonoff",
                        "accompaniments": ["Arroz", "Batata palha"],
                        "observation": "Contém lactose"
                    },
                    "Jantar": { "dish": "", "accompaniments": [], "observation": "" }
                },
                "2024-03-04": {
                    "Almoço": { "dish": "", "accompaniments": [], "observation": "" },
                    "Jantar": { "dish": "", "accompaniments": [], "observation": "" }
                }
            })
        );
    }

    #[test]
    fn test_serialization_keeps_insertion_order() {
        let menus: MenuCollection = [(2024, 3, 10), (2024, 3, 9), (2024, 3, 11)]
            .into_iter()
            .map(|(y, m, d)| (NaiveDate::from_ymd_opt(y, m, d).unwrap(), MenuDay::default()))
            .collect();
        let text = serde_json::to_string(&menus).unwrap();
        let first = text.find("2024-03-10").unwrap();
        let second = text.find("2024-03-09").unwrap();
        let third = text.find("2024-03-11").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_non_ascii_labels_round_trip() {
        let menus: MenuCollection =
            std::iter::once((NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), MenuDay::default()))
                .collect();
        let text = serde_json::to_string(&menus).unwrap();
        assert!(text.contains("\"Almoço\""));
        let back: MenuCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(back, menus);
    }
}
