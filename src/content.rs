// src/content.rs

use crate::model::{ActivityId, WeekNumber};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActivityContent {
    pub title: String,
    pub icon: String,
    pub items: Vec<String>,
}

impl ActivityContent {
    /// Elemento de la semana: `items[(semana - 1) % len]`.
    pub fn item_for_week(&self, week: WeekNumber) -> Option<&str> {
        if self.items.is_empty() {
            return None;
        }
        let idx = (week.get() as usize - 1) % self.items.len();
        self.items.get(idx).map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActivityCatalog {
    pub sing_along: ActivityContent,
    pub qna: ActivityContent,
    pub storytelling: ActivityContent,
}

impl ActivityCatalog {
    /// Carga el catálogo desde el YAML embebido
    pub fn embedded() -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(include_str!("data/activities.yaml"))
    }

    pub fn get(&self, activity: ActivityId) -> &ActivityContent {
        match activity {
            ActivityId::SingAlong => &self.sing_along,
            ActivityId::Qna => &self.qna,
            ActivityId::Storytelling => &self.storytelling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_an_item_per_week() {
        let catalog = ActivityCatalog::embedded().expect("catalog ok");
        for activity in ActivityId::ALL {
            let content = catalog.get(activity);
            assert!(!content.title.is_empty());
            for week in WeekNumber::all() {
                assert!(content.item_for_week(week).is_some());
            }
        }
    }

    #[test]
    fn items_wrap_around() {
        let content = ActivityContent {
            title: "t".into(),
            icon: String::new(),
            items: vec!["a".into(), "b".into(), "c".into()],
        };
        let week4 = WeekNumber::new(4).expect("week");
        assert_eq!(content.item_for_week(week4), Some("a"));
        let empty = ActivityContent {
            items: vec![],
            ..content
        };
        assert_eq!(empty.item_for_week(week4), None);
    }
}
