//! Simulation configuration: the typed [`SimConfig`] plus the key/value
//! [`ConfigStore`] that front-ends use to edit it.
//!
//! # Validation
//!
//! Every tunable has a closed range (see [`ParamKey::bounds`]).  A write
//! through [`ConfigStore::set`] that falls outside its range is dropped
//! without an error; the previous value stays in place.
//!
//! # Corridor width
//!
//! `CORRIDOR_WIDTH` is derived, never set.  It is recomputed from `COLS` and
//! `NUM_BLOCKS` on every read by [`corridor_width_for`].
//!
//! # Change listeners
//!
//! Listeners registered with [`ConfigStore::subscribe`] run synchronously
//! after each accepted change.  A listener that returns an error or panics
//! is logged and skipped; the remaining listeners still run.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::{CoreError, CoreResult};

/// Candidate corridor widths, searched in ascending order.
pub const CORRIDOR_WIDTH_CANDIDATES: std::ops::RangeInclusive<usize> = 2..=6;

/// Corridor width used when no candidate fits the column budget.
pub const FALLBACK_CORRIDOR_WIDTH: usize = 2;

/// Corridor width that maximises per-block seat width for `cols` columns
/// split into `num_blocks` blocks.
///
/// Widths are tried in ascending order and compared with `>=`, so among
/// equal block widths the larger corridor wins.  Widths whose corridors
/// alone exceed `cols`, or that leave blocks zero columns wide, are skipped.
pub fn corridor_width_for(cols: usize, num_blocks: usize) -> usize {
    if num_blocks == 0 {
        return FALLBACK_CORRIDOR_WIDTH;
    }
    let mut best: Option<(usize, usize)> = None; // (width, block_width)
    for w in CORRIDOR_WIDTH_CANDIDATES {
        let corridors = (num_blocks + 1) * w;
        if corridors >= cols {
            continue;
        }
        let block_width = (cols - corridors) / num_blocks;
        if block_width == 0 {
            continue;
        }
        match best {
            Some((_, bw)) if block_width < bw => {}
            _ => best = Some((w, block_width)),
        }
    }
    best.map_or(FALLBACK_CORRIDOR_WIDTH, |(w, _)| w)
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Typed simulation parameters.
///
/// Build with struct-update syntax from [`SimConfig::default`] and call
/// [`validated`](SimConfig::validated) before handing a hand-built or
/// deserialized config to the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid height.  Row `rows - 1` holds the gates.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Number of seat blocks.
    pub num_blocks: usize,
    /// Total agents to spawn over the run.
    pub num_agents: usize,
    /// Hard tick limit for one run.
    pub max_time: u64,
    /// Suggested delay between ticks for interactive drivers, in ms.
    pub speed_ms: u64,
    /// Preference for rows far from the stage (0 = none).
    pub back_pref: f64,
    /// Preference for seats next to a block edge.
    pub aisle_pref: f64,
    /// Preference for seats with few seated neighbours.
    pub social_distance: f64,
    /// Fraction of a block row that may fill before the row stops being a
    /// candidate for new agents.
    pub row_fill_limit: f64,
    /// Reserve a seat the moment it is chosen, before the agent arrives.
    pub assigned_seats: bool,
    /// Master RNG seed.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows:            20,
            cols:            68,
            num_blocks:      4,
            num_agents:      200,
            max_time:        1000,
            speed_ms:        50,
            back_pref:       2.0,
            aisle_pref:      1.0,
            social_distance: 1.0,
            row_fill_limit:  1.0,
            assigned_seats:  true,
            seed:            42,
        }
    }
}

impl SimConfig {
    /// Derived corridor width for the current `cols` / `num_blocks`.
    #[inline]
    pub fn corridor_width(&self) -> usize {
        corridor_width_for(self.cols, self.num_blocks)
    }

    /// Current value of `key`.
    pub fn value(&self, key: ParamKey) -> ParamValue {
        use ParamValue::{Bool, Float, Int};
        match key {
            ParamKey::Rows           => Int(self.rows as i64),
            ParamKey::Cols           => Int(self.cols as i64),
            ParamKey::NumBlocks      => Int(self.num_blocks as i64),
            ParamKey::NumAgents      => Int(self.num_agents as i64),
            ParamKey::MaxTime        => Int(self.max_time as i64),
            ParamKey::Speed          => Int(self.speed_ms as i64),
            ParamKey::BackPref       => Float(self.back_pref),
            ParamKey::AislePref      => Float(self.aisle_pref),
            ParamKey::SocialDistance => Float(self.social_distance),
            ParamKey::RowFillLimit   => Float(self.row_fill_limit),
            ParamKey::AssignedSeats  => Bool(self.assigned_seats),
            ParamKey::Seed           => Int(self.seed as i64),
            ParamKey::CorridorWidth  => Int(self.corridor_width() as i64),
        }
    }

    /// Write `value` to `key` if it passes validation.  Returns whether the
    /// write was applied.
    pub fn apply(&mut self, key: ParamKey, value: ParamValue) -> bool {
        if !key.accepts(value) {
            return false;
        }
        match key {
            ParamKey::Rows           => self.rows = value.as_int() as usize,
            ParamKey::Cols           => self.cols = value.as_int() as usize,
            ParamKey::NumBlocks      => self.num_blocks = value.as_int() as usize,
            ParamKey::NumAgents      => self.num_agents = value.as_int() as usize,
            ParamKey::MaxTime        => self.max_time = value.as_int() as u64,
            ParamKey::Speed          => self.speed_ms = value.as_int() as u64,
            ParamKey::BackPref       => self.back_pref = value.as_float(),
            ParamKey::AislePref      => self.aisle_pref = value.as_float(),
            ParamKey::SocialDistance => self.social_distance = value.as_float(),
            ParamKey::RowFillLimit   => self.row_fill_limit = value.as_float(),
            ParamKey::AssignedSeats  => self.assigned_seats = value.as_bool(),
            ParamKey::Seed           => self.seed = value.as_int() as u64,
            ParamKey::CorridorWidth  => return false,
        }
        true
    }

    /// Check every field against its range.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidValue`] naming the first out-of-range field.
    pub fn validated(self) -> CoreResult<Self> {
        for key in ParamKey::SETTABLE {
            let value = self.value(key);
            if !key.accepts(value) {
                return Err(CoreError::InvalidValue { key: key.name(), value: value.to_string() });
            }
        }
        Ok(self)
    }
}

// ── ParamKey / ParamValue ─────────────────────────────────────────────────────

/// Named configuration parameter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ParamKey {
    Rows,
    Cols,
    NumBlocks,
    NumAgents,
    MaxTime,
    Speed,
    BackPref,
    AislePref,
    SocialDistance,
    RowFillLimit,
    AssignedSeats,
    Seed,
    /// Derived from `COLS` and `NUM_BLOCKS`; read-only.
    CorridorWidth,
}

/// Inclusive validation range of one parameter.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Bounds {
    Int(i64, i64),
    Float(f64, f64),
    Bool,
    ReadOnly,
}

impl ParamKey {
    /// Every key that accepts writes.
    pub const SETTABLE: [ParamKey; 12] = [
        ParamKey::Rows,
        ParamKey::Cols,
        ParamKey::NumBlocks,
        ParamKey::NumAgents,
        ParamKey::MaxTime,
        ParamKey::Speed,
        ParamKey::BackPref,
        ParamKey::AislePref,
        ParamKey::SocialDistance,
        ParamKey::RowFillLimit,
        ParamKey::AssignedSeats,
        ParamKey::Seed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamKey::Rows           => "ROWS",
            ParamKey::Cols           => "COLS",
            ParamKey::NumBlocks      => "NUM_BLOCKS",
            ParamKey::NumAgents      => "NUM_AGENTS",
            ParamKey::MaxTime        => "MAX_TIME",
            ParamKey::Speed          => "SPEED",
            ParamKey::BackPref       => "BACK_PREF",
            ParamKey::AislePref      => "AISLE_PREF",
            ParamKey::SocialDistance => "SOCIAL_DISTANCE",
            ParamKey::RowFillLimit   => "ROW_FILL_LIMIT",
            ParamKey::AssignedSeats  => "FEATURE_ASSIGNED_SEATS",
            ParamKey::Seed           => "SEED",
            ParamKey::CorridorWidth  => "CORRIDOR_WIDTH",
        }
    }

    pub fn bounds(self) -> Bounds {
        match self {
            ParamKey::Rows           => Bounds::Int(15, 40),
            ParamKey::Cols           => Bounds::Int(40, 120),
            ParamKey::NumBlocks      => Bounds::Int(2, 6),
            ParamKey::NumAgents      => Bounds::Int(50, 500),
            ParamKey::MaxTime        => Bounds::Int(100, 5000),
            ParamKey::Speed          => Bounds::Int(0, 2000),
            ParamKey::BackPref       => Bounds::Float(0.0, 5.0),
            ParamKey::AislePref      => Bounds::Float(0.0, 5.0),
            ParamKey::SocialDistance => Bounds::Float(0.0, 5.0),
            ParamKey::RowFillLimit   => Bounds::Float(0.1, 1.0),
            ParamKey::AssignedSeats  => Bounds::Bool,
            ParamKey::Seed           => Bounds::Int(0, i64::MAX),
            ParamKey::CorridorWidth  => Bounds::ReadOnly,
        }
    }

    /// `true` if `value` has the right kind and lies inside [`bounds`](Self::bounds).
    ///
    /// Float keys also accept integer values.
    pub fn accepts(self, value: ParamValue) -> bool {
        match (self.bounds(), value) {
            (Bounds::Int(lo, hi), ParamValue::Int(v)) => (lo..=hi).contains(&v),
            (Bounds::Float(lo, hi), ParamValue::Float(v)) => v.is_finite() && v >= lo && v <= hi,
            (Bounds::Float(lo, hi), ParamValue::Int(v)) => (v as f64) >= lo && (v as f64) <= hi,
            (Bounds::Bool, ParamValue::Bool(_)) => true,
            _ => false,
        }
    }

    /// Parse a raw string into the value kind this key expects.
    pub fn parse_value(self, raw: &str) -> CoreResult<ParamValue> {
        let raw = raw.trim();
        let invalid = || CoreError::InvalidValue { key: self.name(), value: raw.to_owned() };
        match self.bounds() {
            Bounds::Int(..) => raw.parse::<i64>().map(ParamValue::Int).map_err(|_| invalid()),
            Bounds::Float(..) => raw.parse::<f64>().map(ParamValue::Float).map_err(|_| invalid()),
            Bounds::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(ParamValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(ParamValue::Bool(false)),
                _ => Err(invalid()),
            },
            Bounds::ReadOnly => Err(invalid()),
        }
    }
}

impl FromStr for ParamKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ParamKey::SETTABLE
            .into_iter()
            .chain([ParamKey::CorridorWidth])
            .find(|k| k.name() == upper)
            .ok_or_else(|| CoreError::UnknownParam(s.to_owned()))
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parameter value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Integer view; floats truncate, bools map to 0/1.
    pub fn as_int(self) -> i64 {
        match self {
            ParamValue::Int(v)   => v,
            ParamValue::Float(v) => v as i64,
            ParamValue::Bool(b)  => b as i64,
        }
    }

    pub fn as_float(self) -> f64 {
        match self {
            ParamValue::Int(v)   => v as f64,
            ParamValue::Float(v) => v,
            ParamValue::Bool(b)  => b as u8 as f64,
        }
    }

    pub fn as_bool(self) -> bool {
        match self {
            ParamValue::Bool(b)  => b,
            ParamValue::Int(v)   => v != 0,
            ParamValue::Float(v) => v != 0.0,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v)   => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Bool(v)  => write!(f, "{v}"),
        }
    }
}

// ── ConfigStore ───────────────────────────────────────────────────────────────

/// One accepted change, passed to every listener.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ConfigChange {
    pub key: ParamKey,
    pub old: ParamValue,
    pub new: ParamValue,
}

/// Handle returned by [`ConfigStore::subscribe`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u64);

/// Error type listeners may return; it is logged, never propagated.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

type Listener = Box<dyn FnMut(&ConfigChange) -> Result<(), ListenerError>>;

/// Validated key/value view over a [`SimConfig`] with change notification.
pub struct ConfigStore {
    config:    SimConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_id:   u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl ConfigStore {
    pub fn new(config: SimConfig) -> Self {
        Self { config, listeners: Vec::new(), next_id: 0 }
    }

    /// Snapshot of the typed config, e.g. to pass to `SeatingSim::initialize`.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn get(&self, key: ParamKey) -> ParamValue {
        self.config.value(key)
    }

    /// Write `value` to `key`.
    ///
    /// Out-of-range, wrongly-typed, and read-only writes are ignored and the
    /// previous value kept.  Returns `true` only if the value was accepted.
    /// Listeners are notified when the stored value actually changes; a
    /// change to `COLS` or `NUM_BLOCKS` that moves the derived corridor
    /// width also emits a `CORRIDOR_WIDTH` change.
    pub fn set(&mut self, key: ParamKey, value: ParamValue) -> bool {
        let old = self.config.value(key);
        let old_width = self.config.corridor_width();
        if !self.config.apply(key, value) {
            debug!(key = key.name(), %value, "config write rejected");
            return false;
        }
        let new = self.config.value(key);
        if new != old {
            self.notify(ConfigChange { key, old, new });
        }
        let new_width = self.config.corridor_width();
        if new_width != old_width {
            self.notify(ConfigChange {
                key: ParamKey::CorridorWidth,
                old: ParamValue::Int(old_width as i64),
                new: ParamValue::Int(new_width as i64),
            });
        }
        true
    }

    /// Parse `"KEY"` / `"value"` strings and [`set`](Self::set) the result.
    ///
    /// # Errors
    ///
    /// Unknown keys and unparsable values are errors; well-formed values that
    /// fail range validation return `Ok(false)` like `set`.
    pub fn set_str(&mut self, key: &str, raw: &str) -> CoreResult<bool> {
        let key: ParamKey = key.parse()?;
        let value = key.parse_value(raw)?;
        Ok(self.set(key, value))
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ConfigChange) -> Result<(), ListenerError> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener.  Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, change: ConfigChange) {
        for (id, listener) in &mut self.listeners {
            match catch_unwind(AssertUnwindSafe(|| listener(&change))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(listener = id.0, key = change.key.name(), error = %e, "config listener failed");
                }
                Err(_) => {
                    warn!(listener = id.0, key = change.key.name(), "config listener panicked");
                }
            }
        }
    }
}
