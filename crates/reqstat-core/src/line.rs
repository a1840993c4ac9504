//! InfluxDB line protocol encoding.
//!
//! Only what the reporter needs: one measurement, ordered tags and a single
//! integer field, terminated by `\n`. No timestamp is written, so the
//! collector stamps the point on arrival.

use std::fmt::Write;

/// Measurement name used for the request count.
pub const REQUESTS_MEASUREMENT: &str = "requests";

/// One line-protocol point with an integer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    measurement: String,
    tags: Vec<(String, String)>,
    field: String,
    value: u64,
}

impl Point {
    /// A point always carries its integer field; the collector rejects
    /// field-less lines.
    pub fn new(measurement: impl Into<String>, field: impl Into<String>, value: u64) -> Self {
        Self {
            measurement: measurement.into(),
            tags: Vec::new(),
            field: field.into(),
            value,
        }
    }

    /// Append a tag. Tags are written in insertion order.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Render as a newline-terminated line. The field gets the `i` suffix.
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(64);
        escape_into(&mut out, &self.measurement, &[',', ' ']);
        for (k, v) in &self.tags {
            out.push(',');
            escape_into(&mut out, k, &[',', '=', ' ']);
            out.push('=');
            escape_into(&mut out, v, &[',', '=', ' ']);
        }
        out.push(' ');
        escape_into(&mut out, &self.field, &[',', '=', ' ']);
        let _ = writeln!(out, "={}i", self.value);
        out
    }
}

/// `requests,host=<host>,replicaset=<replicaset> value=<value>i\n`
pub fn requests_line(host: &str, replicaset: &str, value: u64) -> String {
    Point::new(REQUESTS_MEASUREMENT, "value", value)
        .tag("host", host)
        .tag("replicaset", replicaset)
        .to_line()
}

/// Backslash-escape `special`. A backslash itself is written as-is.
fn escape_into(out: &mut String, s: &str, special: &[char]) {
    for c in s.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}
