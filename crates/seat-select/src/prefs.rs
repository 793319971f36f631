use seat_core::SimConfig;

/// Preference weights for one seat pick.
///
/// `back_pref` is the effective value for this pick; the engine scales the
/// configured `BACK_PREF` by arrival phase before building an agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatPrefs {
    /// Bias toward rows far from the stage.  `0` = no row preference.
    pub back_pref: f64,

    /// Bonus for seats within one column of a block edge.
    pub aisle_pref: f64,

    /// Bonus per free neighbouring cell.
    pub social_distance: f64,

    /// Skip seats already promised to an en-route agent.
    pub assigned_seats: bool,
}

impl SeatPrefs {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            back_pref:       config.back_pref,
            aisle_pref:      config.aisle_pref,
            social_distance: config.social_distance,
            assigned_seats:  config.assigned_seats,
        }
    }

    /// Same prefs with `back_pref` multiplied by `factor`.
    #[must_use]
    pub fn with_back_pref_scaled(self, factor: f64) -> Self {
        Self { back_pref: self.back_pref * factor, ..self }
    }
}

impl Default for SeatPrefs {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
