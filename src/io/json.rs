use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::data::{MigrationRecord, MigrationTable, COMING_FIELD, GOING_FIELD};

/// Read per-state migration counts from a JSON object keyed by state name.
/// Entries that are null, false, zero or an empty string are treated as absent.
pub(crate) fn read_migration_from_bytes(bytes: &[u8]) -> Result<MigrationTable> {
    let value: Value = serde_json::from_slice(bytes)
        .context("[read_migration] Failed to parse migration JSON")?;

    let entries = value.as_object()
        .ok_or_else(|| anyhow!("[read_migration] Expected a JSON object keyed by state name"))?;

    let mut table = MigrationTable::default();
    for (name, entry) in entries {
        if !is_truthy(entry) { continue }

        let record = MigrationRecord::new(
            coerce_count(entry.get(COMING_FIELD)),
            coerce_count(entry.get(GOING_FIELD)),
        );
        if record.is_malformed() {
            warn!(state = %name, entry = %entry, "malformed migration counts; region will be left out of both arc sets");
        }
        table.insert(name.clone(), record);
    }

    if table.is_empty() {
        warn!("migration dataset has no usable entries; every region will be unmatched");
    }
    Ok(table)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce a count to a number with JavaScript's unary-plus rules:
/// numbers pass through, numeric strings (decimal, `0x`/`0o`/`0b`) are parsed,
/// blank strings and null are zero, arrays go through their string form,
/// and anything else (including a missing field) is NaN.
pub(crate) fn coerce_count(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => if *b { 1.0 } else { 0.0 },
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => coerce_str(s),
        Some(Value::Array(items)) => coerce_array(items),
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// `[]` reads as "", `[x]` as the string form of `x`, longer arrays contain a comma.
fn coerce_array(items: &[Value]) -> f64 {
    match items {
        [] => 0.0,
        [Value::Null] => 0.0,
        [Value::Number(n)] => n.as_f64().unwrap_or(f64::NAN),
        [Value::String(s)] => coerce_str(s),
        [Value::Array(inner)] => coerce_array(inner),
        _ => f64::NAN,
    }
}

fn coerce_str(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() { return 0.0 }
    if let Some(v) = coerce_radix(s) { return v }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" { return sign * f64::INFINITY }

    // Rust's float parser also accepts "inf" and "nan"; plain decimal notation only.
    let decimal = unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal { return f64::NAN }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned `0x` / `0o` / `0b` literals. A sign in front of the prefix is NaN.
fn coerce_radix(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() { return Some(f64::NAN) }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
