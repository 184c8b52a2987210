//! Walk-file parsing: interface discovery and per-interface snapshots.
//!
//! Everything here is a pure function over already-loaded lines. Value
//! extraction always searches for the `" = "` separator rather than relying
//! on fixed character offsets, so OID length variation never matters.

use log::warn;
use thiserror::Error;

use super::oid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The two walks list different interface descriptions and cannot be
    /// compared. Reported to the user, never retried.
    #[error("the two walks describe different interface sets")]
    IncompatibleWalks,

    /// An ifDescr line whose index substring is not a valid integer.
    /// Logged and skipped; the scan continues.
    #[error("malformed interface index in line: {line}")]
    MalformedIndex { line: String },
}

/// One interface discovered in both walks: index and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub index: u64,
    pub description: String,
}

/// Which snapshot fields actually matched a walk line.
///
/// Fields never found silently default to zero (or an empty description),
/// so this set is what lets a caller tell "truly zero" from "absent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub sys_up_time: bool,
    pub description: bool,
    pub speed: bool,
    pub in_octets: bool,
    pub in_discards: bool,
    pub in_errors: bool,
    pub out_octets: bool,
    pub out_discards: bool,
    pub out_errors: bool,
}

impl FieldSet {
    /// True when at least one interface-scoped field matched, i.e. the
    /// requested index actually occurs in the walk.
    pub fn interface_present(&self) -> bool {
        self.description
            || self.speed
            || self.in_octets
            || self.in_discards
            || self.in_errors
            || self.out_octets
            || self.out_discards
            || self.out_errors
    }
}

/// Counter values for one interface in one walk capture.
///
/// Immutable transport data: built once per walk and index, consumed by a
/// single statistics calculation, then discarded. sysUpTime is in hundredths
/// of a second; speed is bits per second with 0 meaning "unknown"; counters
/// occupy the 32-bit Counter32 space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    pub index: u64,
    pub description: String,
    pub sys_up_time: i64,
    pub speed: i64,
    pub in_octets: i64,
    pub in_discards: i64,
    pub in_errors: i64,
    pub out_octets: i64,
    pub out_discards: i64,
    pub out_errors: i64,
    pub found: FieldSet,
}

/// Discover the interfaces common to both walks.
///
/// Both line lists are filtered down to ifDescr lines; the two filtered
/// subsequences must be elementwise equal (same lines, same order), which is
/// how we confirm both walks were captured against the same device. A line
/// with an unparsable index is logged and skipped, not fatal.
pub fn find_interfaces(
    walk1: &[String],
    walk2: &[String],
) -> Result<Vec<InterfaceEntry>, ParseError> {
    let descr1: Vec<&String> = walk1
        .iter()
        .filter(|line| line.starts_with(oid::IF_DESCR))
        .collect();
    let descr2: Vec<&String> = walk2
        .iter()
        .filter(|line| line.starts_with(oid::IF_DESCR))
        .collect();

    if descr1 != descr2 {
        return Err(ParseError::IncompatibleWalks);
    }

    let mut interfaces = Vec::with_capacity(descr1.len());
    for line in descr1 {
        let Some(sep) = line.find(oid::SEPARATOR) else {
            warn!("ifDescr line without separator: {line}");
            continue;
        };
        match line[oid::IF_DESCR.len()..sep].parse::<u64>() {
            Ok(index) => {
                let description = string_value(line).unwrap_or_default().to_string();
                interfaces.push(InterfaceEntry { index, description });
            }
            Err(_) => {
                warn!(
                    "{}",
                    ParseError::MalformedIndex {
                        line: line.to_string()
                    }
                );
            }
        }
    }
    Ok(interfaces)
}

/// Build the full snapshot for one interface index out of one walk.
///
/// Single pass over the lines; each line is tested against the nine tracked
/// OID prefixes (interface-scoped prefixes carry the decimal index). A
/// numeric value that fails to parse is logged and skipped, leaving the
/// field at its zero default; the build itself never fails.
pub fn build_interface_snapshot(walk: &[String], index: u64) -> InterfaceSnapshot {
    let descr_oid = format!("{}{}", oid::IF_DESCR, index);
    let speed_oid = format!("{}{}", oid::IF_SPEED, index);
    let in_octets_oid = format!("{}{}", oid::IF_IN_OCTETS, index);
    let in_discards_oid = format!("{}{}", oid::IF_IN_DISCARDS, index);
    let in_errors_oid = format!("{}{}", oid::IF_IN_ERRORS, index);
    let out_octets_oid = format!("{}{}", oid::IF_OUT_OCTETS, index);
    let out_discards_oid = format!("{}{}", oid::IF_OUT_DISCARDS, index);
    let out_errors_oid = format!("{}{}", oid::IF_OUT_ERRORS, index);

    let mut snapshot = InterfaceSnapshot {
        index,
        ..InterfaceSnapshot::default()
    };

    for line in walk {
        if matches_oid(line, oid::SYS_UPTIME) {
            assign_numeric(line, &mut snapshot.sys_up_time, &mut snapshot.found.sys_up_time);
        } else if matches_oid(line, &descr_oid) {
            if let Some(value) = string_value(line) {
                snapshot.description = value.to_string();
                snapshot.found.description = true;
            }
        } else if matches_oid(line, &speed_oid) {
            assign_numeric(line, &mut snapshot.speed, &mut snapshot.found.speed);
        } else if matches_oid(line, &in_octets_oid) {
            assign_numeric(line, &mut snapshot.in_octets, &mut snapshot.found.in_octets);
        } else if matches_oid(line, &in_discards_oid) {
            assign_numeric(line, &mut snapshot.in_discards, &mut snapshot.found.in_discards);
        } else if matches_oid(line, &in_errors_oid) {
            assign_numeric(line, &mut snapshot.in_errors, &mut snapshot.found.in_errors);
        } else if matches_oid(line, &out_octets_oid) {
            assign_numeric(line, &mut snapshot.out_octets, &mut snapshot.found.out_octets);
        } else if matches_oid(line, &out_discards_oid) {
            assign_numeric(line, &mut snapshot.out_discards, &mut snapshot.found.out_discards);
        } else if matches_oid(line, &out_errors_oid) {
            assign_numeric(line, &mut snapshot.out_errors, &mut snapshot.found.out_errors);
        }
    }

    snapshot
}

/// Exact-instance OID match: the line starts with the OID and the next
/// character is the separator space, so `...2.1` never swallows `...2.10`.
fn matches_oid(line: &str, full_oid: &str) -> bool {
    line.strip_prefix(full_oid)
        .is_some_and(|rest| rest.starts_with(' '))
}

fn assign_numeric(line: &str, field: &mut i64, found: &mut bool) {
    match numeric_value(line) {
        Some(value) => {
            *field = value;
            *found = true;
        }
        None => warn!("unparsable numeric value, field left at 0: {line}"),
    }
}

/// The value portion after the `" = "` separator, with the `TYPE:` token
/// stripped when present.
fn value_after_separator(line: &str) -> Option<&str> {
    let sep = line.find(oid::SEPARATOR)?;
    let rest = &line[sep + oid::SEPARATOR.len()..];
    let value = match rest.find(": ") {
        Some(pos) => &rest[pos + 2..],
        None => rest,
    };
    Some(value.trim())
}

fn numeric_value(line: &str) -> Option<i64> {
    value_after_separator(line)?.parse().ok()
}

/// A quoted-string value with the surrounding quotes trimmed.
fn string_value(line: &str) -> Option<&str> {
    let value = value_after_separator(line)?;
    let value = value.strip_prefix('"').unwrap_or(value);
    Some(value.strip_suffix('"').unwrap_or(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_index_and_description() {
        let walk = lines(&[".1.3.6.1.2.1.2.2.1.2.7 = STRING: \"eth0\""]);
        let interfaces = find_interfaces(&walk, &walk).unwrap();
        assert_eq!(
            interfaces,
            vec![InterfaceEntry {
                index: 7,
                description: "eth0".to_string()
            }]
        );
    }

    #[test]
    fn differing_walks_are_incompatible_in_both_orders() {
        let walk1 = lines(&[".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\""]);
        let walk2 = lines(&[".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"eth0\""]);
        assert_eq!(
            find_interfaces(&walk1, &walk2),
            Err(ParseError::IncompatibleWalks)
        );
        assert_eq!(
            find_interfaces(&walk2, &walk1),
            Err(ParseError::IncompatibleWalks)
        );
    }

    #[test]
    fn filtered_order_matters() {
        let walk1 = lines(&[
            ".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\"",
            ".1.3.6.1.2.1.2.2.1.2.2 = STRING: \"eth0\"",
        ]);
        let walk2 = lines(&[
            ".1.3.6.1.2.1.2.2.1.2.2 = STRING: \"eth0\"",
            ".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\"",
        ]);
        assert_eq!(
            find_interfaces(&walk1, &walk2),
            Err(ParseError::IncompatibleWalks)
        );
    }

    #[test]
    fn non_descr_lines_do_not_affect_compatibility() {
        let walk1 = lines(&[
            ".1.3.6.1.2.1.1.3.0 = Timeticks: 1000",
            ".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\"",
        ]);
        let walk2 = lines(&[
            ".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\"",
            ".1.3.6.1.2.1.1.3.0 = Timeticks: 2000",
        ]);
        let interfaces = find_interfaces(&walk1, &walk2).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].description, "lo");
    }

    #[test]
    fn malformed_index_is_skipped_not_fatal() {
        let walk = lines(&[
            ".1.3.6.1.2.1.2.2.1.2.x = STRING: \"bogus\"",
            ".1.3.6.1.2.1.2.2.1.2.3 = STRING: \"eth1\"",
        ]);
        let interfaces = find_interfaces(&walk, &walk).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].index, 3);
    }

    #[test]
    fn builds_full_snapshot() {
        let walk = lines(&[
            ".1.3.6.1.2.1.1.3.0 = Timeticks: 1000",
            ".1.3.6.1.2.1.2.2.1.2.2 = STRING: \"eth0\"",
            ".1.3.6.1.2.1.2.2.1.5.2 = GAUGE32: 1000000",
            ".1.3.6.1.2.1.2.2.1.10.2 = COUNTER32: 500",
            ".1.3.6.1.2.1.2.2.1.13.2 = COUNTER32: 3",
            ".1.3.6.1.2.1.2.2.1.14.2 = COUNTER32: 1",
            ".1.3.6.1.2.1.2.2.1.16.2 = COUNTER32: 700",
            ".1.3.6.1.2.1.2.2.1.19.2 = COUNTER32: 4",
            ".1.3.6.1.2.1.2.2.1.20.2 = COUNTER32: 2",
        ]);
        let snap = build_interface_snapshot(&walk, 2);
        assert_eq!(snap.index, 2);
        assert_eq!(snap.description, "eth0");
        assert_eq!(snap.sys_up_time, 1000);
        assert_eq!(snap.speed, 1_000_000);
        assert_eq!(snap.in_octets, 500);
        assert_eq!(snap.in_discards, 3);
        assert_eq!(snap.in_errors, 1);
        assert_eq!(snap.out_octets, 700);
        assert_eq!(snap.out_discards, 4);
        assert_eq!(snap.out_errors, 2);
        assert!(snap.found.sys_up_time);
        assert!(snap.found.interface_present());
    }

    #[test]
    fn missing_fields_default_to_zero_and_unfound() {
        let walk = lines(&[".1.3.6.1.2.1.1.3.0 = Timeticks: 1000"]);
        let snap = build_interface_snapshot(&walk, 5);
        assert_eq!(snap.sys_up_time, 1000);
        assert_eq!(snap.speed, 0);
        assert_eq!(snap.in_octets, 0);
        assert_eq!(snap.description, "");
        assert!(snap.found.sys_up_time);
        assert!(!snap.found.speed);
        assert!(!snap.found.interface_present());
    }

    #[test]
    fn index_one_does_not_match_index_ten() {
        let walk = lines(&[
            ".1.3.6.1.2.1.2.2.1.10.1 = COUNTER32: 111",
            ".1.3.6.1.2.1.2.2.1.10.10 = COUNTER32: 999",
        ]);
        let snap = build_interface_snapshot(&walk, 1);
        assert_eq!(snap.in_octets, 111);
        let snap = build_interface_snapshot(&walk, 10);
        assert_eq!(snap.in_octets, 999);
    }

    #[test]
    fn unparsable_numeric_field_is_skipped() {
        let walk = lines(&[
            ".1.3.6.1.2.1.2.2.1.5.2 = GAUGE32: fast",
            ".1.3.6.1.2.1.2.2.1.10.2 = COUNTER32: 42",
        ]);
        let snap = build_interface_snapshot(&walk, 2);
        assert_eq!(snap.speed, 0);
        assert!(!snap.found.speed);
        assert_eq!(snap.in_octets, 42);
        assert!(snap.found.in_octets);
    }

    #[test]
    fn description_with_colon_survives() {
        let walk = lines(&[".1.3.6.1.2.1.2.2.1.2.4 = STRING: \"Intel: onboard\""]);
        let interfaces = find_interfaces(&walk, &walk).unwrap();
        assert_eq!(interfaces[0].description, "Intel: onboard");
    }
}
