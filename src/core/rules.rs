use crate::config::Config;

/// Layout vocabulary the roster engine recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRules {
    /// Station that bounds every trip.
    pub home_base: String,
    /// Home rest codes (`ATDO`, `AALV`, `OFFD`).
    pub off_duty_codes: Vec<String>,
    /// Standby literals in addition to the `SS<digits>` family.
    pub standby_codes: Vec<String>,
    /// Rest-away markers (`LO`).
    pub layover_markers: Vec<String>,
}

impl RosterRules {
    pub fn with_home_base(home_base: &str) -> Self {
        Self {
            home_base: home_base.to_string(),
            ..Self::default()
        }
    }

    pub fn is_off_duty(&self, token: &str) -> bool {
        self.off_duty_codes.iter().any(|c| c == token)
    }

    pub fn is_standby_literal(&self, token: &str) -> bool {
        self.standby_codes.iter().any(|c| c == token)
    }

    pub fn is_layover_marker(&self, token: &str) -> bool {
        self.layover_markers.iter().any(|c| c == token)
    }

    /// Tokens that look like stations but are vocabulary words.
    pub fn is_reserved(&self, token: &str) -> bool {
        const RESERVED: [&str; 8] = ["FLY", "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
        RESERVED.contains(&token)
            || self.is_off_duty(token)
            || self.is_standby_literal(token)
            || self.is_layover_marker(token)
    }
}

impl Default for RosterRules {
    fn default() -> Self {
        RosterRules::from(&Config::default())
    }
}

impl From<&Config> for RosterRules {
    fn from(cfg: &Config) -> Self {
        Self {
            home_base: cfg.home_base.clone(),
            off_duty_codes: cfg.off_duty_codes.clone(),
            standby_codes: cfg.standby_codes.clone(),
            layover_markers: cfg.layover_markers.clone(),
        }
    }
}
