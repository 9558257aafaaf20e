//! Per-signal input record.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{DEFAULT_PERIOD, DEFAULT_PHASE};

/// One signal row of a timing diagram, as supplied by the input loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSpec {
    /// Label drawn to the left of the wave
    #[serde(default)]
    pub name: String,
    /// One code per timeslot, plus `.` and `|`
    #[serde(default)]
    pub wave: String,
    /// Node names, one character per timeslot (`.` for none)
    #[serde(default)]
    pub node: String,
    /// Fractional-timeslot offset; negative starts later, positive earlier
    #[serde(default = "default_phase")]
    pub phase: f64,
    /// Width scale of one timeslot
    #[serde(default = "default_period")]
    pub period: f64,
    /// Labels for bus spans, in order
    #[serde(default, deserialize_with = "deserialize_data")]
    pub data: Vec<String>,
}

fn default_phase() -> f64 {
    DEFAULT_PHASE
}

fn default_period() -> f64 {
    DEFAULT_PERIOD
}

/// WaveDrom accepts `data` either as a list or as one whitespace-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum DataLabels {
    List(Vec<String>),
    Text(String),
}

fn deserialize_data<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<DataLabels>::deserialize(deserializer)? {
        Some(DataLabels::List(labels)) => labels,
        Some(DataLabels::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    })
}

impl SignalSpec {
    /// Create a signal with default phase and period.
    pub fn new(wave: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            wave: wave.into(),
            node: String::new(),
            phase: DEFAULT_PHASE,
            period: DEFAULT_PERIOD,
            data: Vec::new(),
        }
    }

    /// Set the signal name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the node string.
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// Set the phase, in timeslots.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Set the period.
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    /// Set the bus data labels.
    pub fn with_data<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    /// Number of timeslots in the wave string.
    pub fn slot_count(&self) -> usize {
        self.wave.chars().count()
    }

    /// Horizontal extent in timeslots: `len(wave) * period - phase`.
    pub fn width(&self) -> f64 {
        self.slot_count() as f64 * self.period - self.phase
    }
}

impl Default for SignalSpec {
    fn default() -> Self {
        Self::new("")
    }
}
