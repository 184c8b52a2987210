//! Utilization and delta statistics for one interface across two walks.
//!
//! The generic utilization formula is
//! `(delta-octets * 8 * 100) / (delta-seconds * ifSpeed)`, applied to the
//! inbound, outbound, or combined octet deltas. Counters occupy the 32-bit
//! Counter32 space; a negative delta means the counter wrapped between the
//! captures and the modulus is added back once. Only a single wrap is ever
//! corrected: an interval long enough for two wraps is undetectable with two
//! samples and silently yields a too-small delta.

use log::{error, warn};
use thiserror::Error;

use super::oid::COUNTER32_MAX;
use super::parser::InterfaceSnapshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The two snapshots carry the same sysUpTime. The caller is expected to
    /// order snapshots by sysUpTime ascending, so this is a contract
    /// violation reported back, never silently recovered.
    #[error("sysUpTime values are identical; no time has passed between walks")]
    IdenticalTimestamps,

    /// Link speed differs between the captures; the two walks are not of the
    /// same physical or virtual link. Terminal for this calculation.
    #[error("interface speeds do not match ({earlier} vs {later})")]
    SpeedMismatch { earlier: i64, later: i64 },
}

/// One labeled statistic, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub description: String,
    pub value: String,
}

impl StatRow {
    fn new(description: &str, value: String) -> Self {
        Self {
            description: description.to_string(),
            value,
        }
    }
}

/// Compute the statistics table for two snapshots of the same interface,
/// `earlier` and `later` pre-ordered by sysUpTime ascending.
///
/// Pure and idempotent: same snapshots in, same rows out, no retained state.
pub fn calculate_statistics(
    earlier: &InterfaceSnapshot,
    later: &InterfaceSnapshot,
) -> Result<Vec<StatRow>, CalcError> {
    let mut rows = Vec::with_capacity(14);

    // Time delta. The timestamps must differ for any rate to be meaningful.
    if earlier.sys_up_time == later.sys_up_time {
        error!("sysUpTime values match; cannot calculate rates");
        return Err(CalcError::IdenticalTimestamps);
    }
    let tick_delta = later.sys_up_time - earlier.sys_up_time;
    let time_delta = tick_delta as f64 / 100.0;
    rows.push(StatRow::new(
        "Time Delta",
        format!("{} seconds", format_number(time_delta)),
    ));

    // The link speeds must match between captures.
    if earlier.speed != later.speed {
        error!(
            "interface speeds do not match: {} vs {}",
            earlier.speed, later.speed
        );
        return Err(CalcError::SpeedMismatch {
            earlier: earlier.speed,
            later: later.speed,
        });
    }
    rows.push(StatRow::new("Interface Speed", format_count(earlier.speed)));

    let in_octet_delta = wrapped_delta(earlier.in_octets, later.in_octets);
    rows.push(StatRow::new(
        "Inbound Octet Delta",
        format_count(in_octet_delta),
    ));

    let out_octet_delta = wrapped_delta(earlier.out_octets, later.out_octets);
    rows.push(StatRow::new(
        "Outbound Octet Delta",
        format_count(out_octet_delta),
    ));

    // Total is the sum of the already wrap-corrected halves; no further
    // correction applies.
    let total_octet_delta = in_octet_delta + out_octet_delta;
    rows.push(StatRow::new("Total Delta", format_count(total_octet_delta)));

    // Utilization, guarded against divide-by-zero by construction.
    if tick_delta != 0 && earlier.speed != 0 {
        let denominator = time_delta * earlier.speed as f64;
        let in_utilization = round3((in_octet_delta * 8 * 100) as f64 / denominator);
        rows.push(StatRow::new(
            "Inbound Utilization",
            format_number(in_utilization),
        ));
        let out_utilization = round3((out_octet_delta * 8 * 100) as f64 / denominator);
        rows.push(StatRow::new(
            "Outbound Utilization",
            format_number(out_utilization),
        ));
        let total_utilization = round3((total_octet_delta * 8 * 100) as f64 / denominator / 2.0);
        rows.push(StatRow::new(
            "Total Utilization",
            format_number(total_utilization),
        ));
    } else {
        // Both failing conditions are reported independently.
        if tick_delta == 0 {
            error!("no time has passed between walks");
            rows.push(StatRow::new(
                "Unable to calculate utilization",
                "no time has passed between walks".to_string(),
            ));
        }
        if earlier.speed == 0 {
            warn!("interface speed is zero");
            rows.push(StatRow::new(
                "Unable to calculate utilization",
                "interface speed is zero".to_string(),
            ));
        }
    }

    let in_discard_delta = wrapped_delta(earlier.in_discards, later.in_discards);
    rows.push(StatRow::new(
        "Inbound Discards",
        format_count(in_discard_delta),
    ));
    let out_discard_delta = wrapped_delta(earlier.out_discards, later.out_discards);
    rows.push(StatRow::new(
        "Outbound Discards",
        format_count(out_discard_delta),
    ));
    rows.push(StatRow::new(
        "Total Discards",
        format_count(in_discard_delta + out_discard_delta),
    ));

    let in_error_delta = wrapped_delta(earlier.in_errors, later.in_errors);
    rows.push(StatRow::new("Inbound Errors", format_count(in_error_delta)));
    let out_error_delta = wrapped_delta(earlier.out_errors, later.out_errors);
    rows.push(StatRow::new(
        "Outbound Errors",
        format_count(out_error_delta),
    ));
    rows.push(StatRow::new(
        "Total Errors",
        format_count(in_error_delta + out_error_delta),
    ));

    Ok(rows)
}

/// Counter delta with single 32-bit wrap correction.
fn wrapped_delta(earlier: i64, later: i64) -> i64 {
    let delta = later - earlier;
    if delta < 0 {
        delta + COUNTER32_MAX
    } else {
        delta
    }
}

/// Round to 3 decimal places, half-up.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Format with US-style thousands grouping and at most three fraction
/// digits, trailing zeros trimmed ("4,294,967,295", "0.08", "10").
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.3}", round3(value));
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let grouped = group_digits(digits);
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Integer counterpart of [`format_number`].
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sys_up_time: i64, speed: i64) -> InterfaceSnapshot {
        InterfaceSnapshot {
            index: 1,
            sys_up_time,
            speed,
            ..InterfaceSnapshot::default()
        }
    }

    fn value_of<'a>(rows: &'a [StatRow], description: &str) -> &'a str {
        &rows
            .iter()
            .find(|r| r.description == description)
            .unwrap_or_else(|| panic!("missing row {description}"))
            .value
    }

    #[test]
    fn basic_utilization() {
        // 10 s elapsed, 1000 octets in, 1 Mbit/s link: 0.08% inbound.
        let mut earlier = snapshot(1000, 1_000_000);
        earlier.in_octets = 500;
        let mut later = snapshot(2000, 1_000_000);
        later.in_octets = 1500;

        let rows = calculate_statistics(&earlier, &later).unwrap();
        assert_eq!(value_of(&rows, "Time Delta"), "10 seconds");
        assert_eq!(value_of(&rows, "Interface Speed"), "1,000,000");
        assert_eq!(value_of(&rows, "Inbound Octet Delta"), "1,000");
        assert_eq!(value_of(&rows, "Inbound Utilization"), "0.08");
    }

    #[test]
    fn counter_wrap_corrected_once() {
        let mut earlier = snapshot(1000, 1_000_000);
        earlier.in_octets = 4_294_967_000;
        let mut later = snapshot(2000, 1_000_000);
        later.in_octets = 1000;

        let rows = calculate_statistics(&earlier, &later).unwrap();
        // 1000 - 4294967000 + 4294967295 = 1295
        assert_eq!(value_of(&rows, "Inbound Octet Delta"), "1,295");
    }

    #[test]
    fn total_delta_is_exact_sum() {
        let mut earlier = snapshot(1000, 100);
        earlier.in_octets = 4_294_967_290;
        earlier.out_octets = 10;
        let mut later = snapshot(3000, 100);
        later.in_octets = 5;
        later.out_octets = 500;

        let rows = calculate_statistics(&earlier, &later).unwrap();
        let in_delta = 5 - 4_294_967_290_i64 + 4_294_967_295;
        let out_delta = 500 - 10;
        assert_eq!(value_of(&rows, "Inbound Octet Delta"), format_count(in_delta));
        assert_eq!(
            value_of(&rows, "Total Delta"),
            format_count(in_delta + out_delta)
        );
    }

    #[test]
    fn speed_mismatch_is_terminal() {
        let earlier = snapshot(1000, 100);
        let later = snapshot(2000, 1000);
        assert_eq!(
            calculate_statistics(&earlier, &later),
            Err(CalcError::SpeedMismatch {
                earlier: 100,
                later: 1000
            })
        );
    }

    #[test]
    fn identical_timestamps_are_rejected() {
        let earlier = snapshot(5000, 100);
        let later = snapshot(5000, 100);
        assert_eq!(
            calculate_statistics(&earlier, &later),
            Err(CalcError::IdenticalTimestamps)
        );
    }

    #[test]
    fn zero_speed_reports_instead_of_dividing() {
        let earlier = snapshot(1000, 0);
        let later = snapshot(2000, 0);
        let rows = calculate_statistics(&earlier, &later).unwrap();
        assert_eq!(
            value_of(&rows, "Unable to calculate utilization"),
            "interface speed is zero"
        );
        assert!(rows.iter().all(|r| !r.description.contains("Utilization")));
        // Discard and error rows still follow.
        assert_eq!(value_of(&rows, "Total Errors"), "0");
    }

    #[test]
    fn row_order_is_fixed() {
        let mut earlier = snapshot(1000, 1_000_000);
        earlier.in_octets = 500;
        let mut later = snapshot(2000, 1_000_000);
        later.in_octets = 1500;

        let rows = calculate_statistics(&earlier, &later).unwrap();
        let order: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Time Delta",
                "Interface Speed",
                "Inbound Octet Delta",
                "Outbound Octet Delta",
                "Total Delta",
                "Inbound Utilization",
                "Outbound Utilization",
                "Total Utilization",
                "Inbound Discards",
                "Outbound Discards",
                "Total Discards",
                "Inbound Errors",
                "Outbound Errors",
                "Total Errors",
            ]
        );
    }

    #[test]
    fn idempotent_for_same_inputs() {
        let mut earlier = snapshot(100, 56_000);
        earlier.in_octets = 123;
        earlier.out_octets = 456;
        let mut later = snapshot(4200, 56_000);
        later.in_octets = 999_999;
        later.out_octets = 888_888;

        let first = calculate_statistics(&earlier, &later).unwrap();
        let second = calculate_statistics(&earlier, &later).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn utilization_rounds_half_up_to_three_places() {
        // 8 s, 1001 octets, 1 Mbit/s: 1001*800 / 8e6 = 0.1001 -> 0.1
        let mut earlier = snapshot(0, 1_000_000);
        earlier.in_octets = 0;
        let mut later = snapshot(800, 1_000_000);
        later.in_octets = 1001;
        let rows = calculate_statistics(&earlier, &later).unwrap();
        assert_eq!(value_of(&rows, "Inbound Utilization"), "0.1");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_count(4_294_967_295), "4,294,967,295");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_number(0.08), "0.08");
        assert_eq!(format_number(12.3456), "12.346");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(1234.5), "1,234.5");
    }
}
