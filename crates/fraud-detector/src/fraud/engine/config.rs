use serde::{Deserialize, Serialize};

/// UTC hour range treated as unusual for transaction timing. Bounds are inclusive and the
/// window wraps past midnight when `start_hour_utc > end_hour_utc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightWindow {
    pub start_hour_utc: u8,
    pub end_hour_utc: u8,
}

impl NightWindow {
    pub fn contains(&self, hour_utc: u32) -> bool {
        let start = u32::from(self.start_hour_utc);
        let end = u32::from(self.end_hour_utc);

        if start <= end {
            hour_utc >= start && hour_utc <= end
        } else {
            hour_utc >= start || hour_utc <= end
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start_hour_utc: 0,
            end_hour_utc: 5,
        }
    }
}

/// Externally supplied rule parameters, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleConfiguration {
    high_risk_countries: Vec<String>,
    night_window: NightWindow,
}

impl RuleConfiguration {
    /// Blank codes are skipped and repeats keep their first position.
    pub fn new<I, S>(high_risk_countries: I, night_window: NightWindow) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut countries: Vec<String> = Vec::new();
        for code in high_risk_countries {
            let code = code.into();
            if code.trim().is_empty() || countries.contains(&code) {
                continue;
            }
            countries.push(code);
        }

        Self {
            high_risk_countries: countries,
            night_window,
        }
    }

    pub fn high_risk_countries(&self) -> &[String] {
        &self.high_risk_countries
    }

    /// Exact, case-sensitive membership.
    pub fn is_high_risk(&self, country: &str) -> bool {
        self.high_risk_countries.iter().any(|code| code == country)
    }

    pub fn night_window(&self) -> NightWindow {
        self.night_window
    }

    pub fn night_window_start(&self) -> u8 {
        self.night_window.start_hour_utc
    }

    pub fn night_window_end(&self) -> u8 {
        self.night_window.end_hour_utc
    }
}
