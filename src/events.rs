//! Interaction events.
//!
//! An event carries the values a user just changed. In text form, one event
//! per line:
//!
//! ```text
//! # comment
//! U=25
//! R=1.5k
//! U=12 R=220
//! 20 150
//! ```
//!
//! Values accept SI suffixes (see [`parse_value`]). Blank lines and lines
//! starting with `#` carry no event.

use crate::circuit::parse_value;
use crate::error::{OhmError, Result};
use crate::session::StateKey;

/// A change to U and/or R delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionEvent {
    pub voltage: Option<f64>,
    pub resistance: Option<f64>,
}

impl InteractionEvent {
    /// An event that sets both values.
    pub fn new(voltage: f64, resistance: f64) -> Self {
        Self {
            voltage: Some(voltage),
            resistance: Some(resistance),
        }
    }

    /// An event that only moves the voltage slider.
    pub fn voltage(voltage: f64) -> Self {
        Self {
            voltage: Some(voltage),
            resistance: None,
        }
    }

    /// An event that only moves the resistance slider.
    pub fn resistance(resistance: f64) -> Self {
        Self {
            voltage: None,
            resistance: Some(resistance),
        }
    }

    /// Whether the event carries no value.
    pub fn is_empty(&self) -> bool {
        self.voltage.is_none() && self.resistance.is_none()
    }
}

/// Parse one event line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_event(line_no: usize, line: &str) -> Result<Option<InteractionEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut event = InteractionEvent::default();
    let mut bare = Vec::new();

    for token in line.split_whitespace() {
        let Some((key, value)) = token.split_once('=') else {
            bare.push(token);
            continue;
        };

        let key = key
            .parse::<StateKey>()
            .map_err(|e: OhmError| OhmError::event(line_no, e.to_string()))?;
        let value = parse_value(value)
            .ok_or_else(|| OhmError::event(line_no, format!("invalid value '{value}' for {key}")))?;

        let slot = match key {
            StateKey::Voltage => &mut event.voltage,
            StateKey::Resistance => &mut event.resistance,
            StateKey::PreviousVoltage | StateKey::PreviousResistance => {
                return Err(OhmError::event(
                    line_no,
                    format!("{key} is committed by the engine and cannot be set"),
                ));
            }
        };
        if slot.replace(value).is_some() {
            return Err(OhmError::event(line_no, format!("{key} given twice")));
        }
    }

    match (bare.as_slice(), event.is_empty()) {
        ([], false) => Ok(Some(event)),
        ([u, r], true) => {
            let voltage = parse_value(u)
                .ok_or_else(|| OhmError::event(line_no, format!("invalid voltage '{u}'")))?;
            let resistance = parse_value(r)
                .ok_or_else(|| OhmError::event(line_no, format!("invalid resistance '{r}'")))?;
            Ok(Some(InteractionEvent::new(voltage, resistance)))
        }
        _ => Err(OhmError::event(
            line_no,
            "expected 'U=<value>', 'R=<value>' or '<U> <R>'",
        )),
    }
}

/// Reads interaction events line by line.
#[cfg(feature = "cli")]
pub struct EventReader<R> {
    reader: R,
    line: String,
    line_no: usize,
}

#[cfg(feature = "cli")]
impl<R: std::io::BufRead> EventReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
        }
    }

    /// Read the next event, skipping blank and comment lines.
    /// Returns `Ok(None)` on EOF.
    pub fn next_event(&mut self) -> Result<Option<InteractionEvent>> {
        loop {
            self.line.clear();
            let bytes_read =
                self.reader
                    .read_line(&mut self.line)
                    .map_err(|e| OhmError::InputReadError {
                        message: e.to_string(),
                    })?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            if let Some(event) = parse_event(self.line_no, &self.line)? {
                return Ok(Some(event));
            }
        }
    }
}
