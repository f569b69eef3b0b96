use serde::{Deserialize, Serialize};

/// Jurisprudence selection driving Asr calculation and jamaat offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Fiqh {
    /// Offset jamaat times with a fixed Dhuhr
    #[default]
    Hanafi,
    /// Shafi/Maliki/Hanbali: provider times shown as-is
    Shafi,
}

impl Fiqh {
    /// Map a selector value. Absent or blank selects Hanafi; any value other
    /// than "hanafi" selects the pass-through variant.
    pub fn from_selector(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Fiqh::Hanafi,
            Some(v) if v.eq_ignore_ascii_case("hanafi") => Fiqh::Hanafi,
            Some(_) => Fiqh::Shafi,
        }
    }

    /// Aladhan `school` parameter
    pub fn school_code(self) -> u8 {
        match self {
            Fiqh::Hanafi => 1,
            Fiqh::Shafi => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Fiqh::Hanafi => "hanafi",
            Fiqh::Shafi => "shafi",
        }
    }
}

impl std::fmt::Display for Fiqh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five daily jamaat prayers, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ORDER: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// Daily timings as returned by Aladhan (`data.timings`), "HH:MM" 24-hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// Timings after fiqh offsets, in 12-hour display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl AdjustedTimings {
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}
