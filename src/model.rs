use serde::{Deserialize, Serialize};
use std::fmt;

/// Pantallas de la aplicación. Solo una está activa en cada momento.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Quarters,
    Weeks,
    Activities,
    SingAlong,
    Qna,
    Storytelling,
    Login,
    StudentsDashboard,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Home,
        Screen::Quarters,
        Screen::Weeks,
        Screen::Activities,
        Screen::SingAlong,
        Screen::Qna,
        Screen::Storytelling,
        Screen::Login,
        Screen::StudentsDashboard,
    ];

    /// `true` para las tres pantallas de actividad.
    pub fn is_activity(self) -> bool {
        matches!(self, Screen::SingAlong | Screen::Qna | Screen::Storytelling)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Quarters => "quarters",
            Screen::Weeks => "weeks",
            Screen::Activities => "activities",
            Screen::SingAlong => "sing-along",
            Screen::Qna => "qna",
            Screen::Storytelling => "storytelling",
            Screen::Login => "login",
            Screen::StudentsDashboard => "studentsDashboard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuarterId {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl QuarterId {
    pub const ALL: [QuarterId; 4] = [QuarterId::Q1, QuarterId::Q2, QuarterId::Q3, QuarterId::Q4];

    pub fn number(self) -> u8 {
        match self {
            QuarterId::Q1 => 1,
            QuarterId::Q2 => 2,
            QuarterId::Q3 => 3,
            QuarterId::Q4 => 4,
        }
    }
}

impl fmt::Display for QuarterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quarter {}", self.number())
    }
}

/// Número de semana dentro de un trimestre, siempre en `1..=10`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const FIRST: WeekNumber = WeekNumber(1);
    pub const LAST: WeekNumber = WeekNumber(10);

    pub fn new(n: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&n)
            .then_some(WeekNumber(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Semana siguiente, o `None` en la última.
    pub fn next(self) -> Option<Self> {
        WeekNumber::new(self.0 + 1)
    }

    pub fn all() -> impl Iterator<Item = WeekNumber> {
        (Self::FIRST.0..=Self::LAST.0).map(WeekNumber)
    }
}

impl TryFrom<u8> for WeekNumber {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        WeekNumber::new(n).ok_or_else(|| format!("week {n} out of range 1..=10"))
    }
}

impl From<WeekNumber> for u8 {
    fn from(w: WeekNumber) -> u8 {
        w.0
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityId {
    SingAlong,
    Qna,
    Storytelling,
}

impl ActivityId {
    pub const ALL: [ActivityId; 3] = [ActivityId::SingAlong, ActivityId::Qna, ActivityId::Storytelling];

    pub fn screen(self) -> Screen {
        match self {
            ActivityId::SingAlong => Screen::SingAlong,
            ActivityId::Qna => Screen::Qna,
            ActivityId::Storytelling => Screen::Storytelling,
        }
    }

    pub fn from_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::SingAlong => Some(ActivityId::SingAlong),
            Screen::Qna => Some(ActivityId::Qna),
            Screen::Storytelling => Some(ActivityId::Storytelling),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_number_rejects_out_of_range() {
        assert!(WeekNumber::new(0).is_none());
        assert!(WeekNumber::new(11).is_none());
        assert_eq!(WeekNumber::new(10), Some(WeekNumber::LAST));
        assert_eq!(WeekNumber::all().count(), 10);
    }

    #[test]
    fn last_week_has_no_next() {
        assert_eq!(WeekNumber::LAST.next(), None);
        assert_eq!(WeekNumber::FIRST.next().map(WeekNumber::get), Some(2));
    }

    #[test]
    fn activities_map_to_their_screens() {
        for activity in ActivityId::ALL {
            let screen = activity.screen();
            assert!(screen.is_activity());
            assert_eq!(ActivityId::from_screen(screen), Some(activity));
        }
        assert_eq!(ActivityId::from_screen(Screen::Weeks), None);
    }

    #[test]
    fn week_number_deserializes_with_range_check() {
        let ok: WeekNumber = serde_yaml::from_str("3").expect("yaml ok");
        assert_eq!(ok.get(), 3);
        assert!(serde_yaml::from_str::<WeekNumber>("42").is_err());
    }
}
