//! OID prefixes recognized in walk files.
//!
//! Walks are expected in numeric OID form, one record per line:
//! `<OID> = <TYPE>: <VALUE>` (string values additionally double-quoted).
//! These prefixes are fixed at compile time; walks that use named
//! identifiers are not supported.

/// sysUpTime (system uptime, hundredths of a second). Scalar, full OID.
pub const SYS_UPTIME: &str = ".1.3.6.1.2.1.1.3.0";

/// ifDescr (interface description). Per-interface, index appended.
pub const IF_DESCR: &str = ".1.3.6.1.2.1.2.2.1.2.";

/// ifSpeed (nominal bandwidth, bits per second).
pub const IF_SPEED: &str = ".1.3.6.1.2.1.2.2.1.5.";

/// ifInOctets (inbound octet counter).
pub const IF_IN_OCTETS: &str = ".1.3.6.1.2.1.2.2.1.10.";

/// ifInDiscards (inbound discard counter).
pub const IF_IN_DISCARDS: &str = ".1.3.6.1.2.1.2.2.1.13.";

/// ifInErrors (inbound error counter).
pub const IF_IN_ERRORS: &str = ".1.3.6.1.2.1.2.2.1.14.";

/// ifOutOctets (outbound octet counter).
pub const IF_OUT_OCTETS: &str = ".1.3.6.1.2.1.2.2.1.16.";

/// ifOutDiscards (outbound discard counter).
pub const IF_OUT_DISCARDS: &str = ".1.3.6.1.2.1.2.2.1.19.";

/// ifOutErrors (outbound error counter).
pub const IF_OUT_ERRORS: &str = ".1.3.6.1.2.1.2.2.1.20.";

/// Token separating the OID from the typed value on every walk line.
pub const SEPARATOR: &str = " = ";

/// Maximum value a Counter32 can hold. Added back once when a delta
/// across two captures goes negative (counter wrap).
pub const COUNTER32_MAX: i64 = 4_294_967_295;
