use chrono::Weekday;

/// Week numbering rules of a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekRules {
    /// First day of a week.
    pub starts_on: Weekday,
    /// Week 1 is the week containing January `first_week_contains_date`.
    pub first_week_contains_date: u32,
}

/// Month names and week rules used for ring labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 style identifier, such as `en-US`.
    pub id: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    month_names: [&'static str; 12],
    /// Used unless ISO weeks are selected.
    pub week: WeekRules,
}

pub(crate) const EN_US: Locale = Locale {
    id: "en-US",
    label: "English",
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    week: WeekRules {
        starts_on: Weekday::Sun,
        first_week_contains_date: 1,
    },
};

pub(crate) const FI: Locale = Locale {
    id: "fi",
    label: "Finnish",
    month_names: [
        "tammikuu",
        "helmikuu",
        "maaliskuu",
        "huhtikuu",
        "toukokuu",
        "kesäkuu",
        "heinäkuu",
        "elokuu",
        "syyskuu",
        "lokakuu",
        "marraskuu",
        "joulukuu",
    ],
    week: WeekRules {
        starts_on: Weekday::Mon,
        first_week_contains_date: 4,
    },
};

static LOCALES: [Locale; 2] = [EN_US, FI];

impl Locale {
    /// Every built-in locale.
    pub fn all() -> &'static [Locale] {
        &LOCALES
    }

    /// Built-in locale with the given id.
    pub fn by_id(id: &str) -> Option<&'static Locale> {
        LOCALES.iter().find(|l| l.id == id)
    }

    /// Full standalone month name, `month` is 1-based.
    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        self.month_names[idx]
    }
}

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/locale.rs"]
mod tests;
