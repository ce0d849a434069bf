//! Settings edited on the settings screen. Held in memory for the session;
//! only the currency preference is persisted.

use serde::Deserialize;
use serde::Serialize;

use crate::choice::Choice;

/// Interface language.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Choice for Language {
    fn value(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }
}

/// Display timezone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum Timezone {
    #[default]
    Pacific,
    Mountain,
    Central,
    Eastern,
    Greenwich,
}

impl Choice for Timezone {
    fn value(&self) -> &'static str {
        match self {
            Self::Pacific => "UTC-8",
            Self::Mountain => "UTC-7",
            Self::Central => "UTC-6",
            Self::Eastern => "UTC-5",
            Self::Greenwich => "UTC+0",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pacific => "Pacific Time (UTC-8)",
            Self::Mountain => "Mountain Time (UTC-7)",
            Self::Central => "Central Time (UTC-6)",
            Self::Eastern => "Eastern Time (UTC-5)",
            Self::Greenwich => "Greenwich Mean Time (UTC+0)",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum DateFormat {
    #[default]
    MonthDayYear,
    DayMonthYear,
    Iso,
}

impl DateFormat {
    /// The matching `chrono` format string.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

impl Choice for DateFormat {
    fn value(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }

    fn label(&self) -> &'static str {
        self.value()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl Choice for TimeFormat {
    fn value(&self) -> &'static str {
        match self {
            Self::TwelveHour => "12",
            Self::TwentyFourHour => "24",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::TwelveHour => "12-hour (AM/PM)",
            Self::TwentyFourHour => "24-hour",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIter, strum::EnumIs)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Choice for Theme {
    fn value(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Which channels deliver farm alerts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NotificationChannels {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationChannels {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
        }
    }
}

/// All session settings shown on the settings screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct UserPrefs {
    pub language: Language,
    pub timezone: Timezone,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    pub theme: Theme,
    pub notifications: NotificationChannels,
}

impl UserPrefs {
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        date.format(self.date_format.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip() {
        assert_eq!(Timezone::Eastern.value(), "UTC-5");
        assert_eq!(Timezone::from_value("UTC-5"), Some(Timezone::Eastern));
        assert_eq!(Language::from_value("fr"), Some(Language::French));
        assert_eq!(Language::from_value("xx"), None);
        assert_eq!(Timezone::Greenwich.label(), "Greenwich Mean Time (UTC+0)");
        assert_eq!(TimeFormat::options(), vec![("12", "12-hour (AM/PM)"), ("24", "24-hour")]);
    }

    #[test]
    fn dates_follow_the_selected_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let mut prefs = UserPrefs::default();
        assert_eq!(prefs.format_date(date), "06/15/2023");
        prefs.date_format = DateFormat::Iso;
        assert_eq!(prefs.format_date(date), "2023-06-15");
        prefs.date_format = DateFormat::DayMonthYear;
        assert_eq!(prefs.format_date(date), "15/06/2023");
    }

    #[test]
    fn defaults_match_the_settings_screen() {
        let prefs = UserPrefs::default();
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.time_format, TimeFormat::TwelveHour);
        assert!(prefs.theme.is_light());
        assert!(prefs.notifications.email && !prefs.notifications.sms);
    }
}
