//! Meter labels shown next to the circuit diagram.

use std::fmt;

use crate::session::Evaluation;

/// Voltmeter label, one decimal.
pub fn format_voltage(voltage: f64) -> String {
    format!("{voltage:.1} V")
}

/// Resistor label, no decimals.
pub fn format_resistance(resistance: f64) -> String {
    format!("{resistance:.0} Ω")
}

/// Ammeter label, three decimals.
pub fn format_current(current: f64) -> String {
    format!("{current:.3} A")
}

/// Timing in seconds, two decimals.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

/// Text labels for one evaluated cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub voltage: String,
    pub resistance: String,
    pub current: String,
    pub cycle: String,
    pub offsets: Vec<String>,
    pub pulse: bool,
}

impl Readout {
    /// Build the labels for an evaluation.
    pub fn from_evaluation(eval: &Evaluation) -> Self {
        Self {
            voltage: format_voltage(eval.state.voltage),
            resistance: format_resistance(eval.state.resistance),
            current: format_current(eval.current.current),
            cycle: format_seconds(eval.schedule.cycle_duration()),
            offsets: eval.schedule.offsets().map(format_seconds).collect(),
            pulse: eval.transition.changed,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V: {}  R: {}  A: {}",
            self.voltage, self.resistance, self.current
        )?;
        if self.pulse {
            write!(f, "  [pulse]")?;
        }
        writeln!(f)?;

        if self.offsets.is_empty() {
            write!(f, "  no flow")
        } else {
            write!(
                f,
                "  {} particles, cycle {}, offsets {}",
                self.offsets.len(),
                self.cycle,
                self.offsets.join(" ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_labels() {
        assert_eq!(format_voltage(20.0), "20.0 V");
        assert_eq!(format_resistance(150.0), "150 Ω");
        assert_eq!(format_current(20.0 / 150.0), "0.133 A");
        assert_eq!(format_seconds(18.75), "18.75s");
    }

    #[test]
    fn test_readout_for_defaults() {
        let mut session = Session::new();
        let readout = Readout::from_evaluation(&session.evaluate());
        assert_eq!(readout.current, "0.133 A");
        assert_eq!(readout.cycle, "18.75s");
        assert_eq!(readout.offsets, vec!["0.00s", "6.25s", "12.50s"]);
        assert!(!readout.pulse);

        let text = readout.to_string();
        assert!(text.contains("3 particles"));
        assert!(!text.contains("[pulse]"));
    }

    #[test]
    fn test_readout_stationary() {
        let mut session = Session::new();
        session.set_voltage(0.0);
        let readout = Readout::from_evaluation(&session.evaluate());
        assert!(readout.pulse);
        assert!(readout.offsets.is_empty());
        assert_eq!(readout.cycle, "10.00s");
        assert!(readout.to_string().ends_with("no flow"));
    }
}
