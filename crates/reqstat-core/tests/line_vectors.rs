//! Line protocol output vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqstat_core::{requests_line, Point};

#[test]
fn requests_line_exact() {
    assert_eq!(
        requests_line("h", "r", 42),
        "requests,host=h,replicaset=r value=42i\n"
    );
}

#[test]
fn requests_line_scenario() {
    assert_eq!(
        requests_line("node1", "rs1", 3),
        "requests,host=node1,replicaset=rs1 value=3i\n"
    );
}

#[test]
fn empty_replicaset_is_kept() {
    assert_eq!(
        requests_line("node1", "", 0),
        "requests,host=node1,replicaset= value=0i\n"
    );
}

#[test]
fn large_values_are_not_truncated() {
    assert_eq!(
        requests_line("h", "r", u64::MAX),
        format!("requests,host=h,replicaset=r value={}i\n", u64::MAX)
    );
}

#[test]
fn escapes_tag_values() {
    let line = Point::new("requests", "value", 1)
        .tag("host", "a b,c=d")
        .to_line();
    assert_eq!(line, "requests,host=a\\ b\\,c\\=d value=1i\n");
}

#[test]
fn measurement_keeps_equals() {
    let line = Point::new("a=b c", "v", 2).to_line();
    assert_eq!(line, "a=b\\ c v=2i\n");
}

#[test]
fn backslash_in_tag_is_not_doubled() {
    assert_eq!(
        requests_line("win\\host", "rs1", 3),
        "requests,host=win\\host,replicaset=rs1 value=3i\n"
    );
}

#[test]
fn field_key_is_escaped() {
    assert_eq!(Point::new("m", "a b", 5).to_line(), "m a\\ b=5i\n");
}
