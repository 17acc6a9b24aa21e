#![allow(missing_docs)]
use std::fmt::Write as _;

use streamcore::{
    ValueKind,
    text::{format_fixed, split, validate_row},
};

fn render_fixed(value: f64) -> String {
    (0..=4u8)
        .map(|precision| format_fixed(value, precision))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
#[allow(clippy::approx_constant)]
fn fixed_precision_ladder() {
    insta::assert_snapshot!(render_fixed(3.141_59), @"3 3.1 3.14 3.142 3.1416");
    insta::assert_snapshot!(render_fixed(-12.0), @"-12 -12.0 -12.00 -12.000 -12.0000");
    insta::assert_snapshot!(render_fixed(1e-5), @"0 0.0 0.00 0.000 0.0000");
}

/// Classify every field of a small record against every kind and render a
/// table, one row per field.
#[test]
fn kind_matrix() {
    let fields = split("255, -1 ,3.5,1e39,TRUE,abc", ',');
    assert!(validate_row(&fields, 6));

    let mut out = String::new();
    for field in &fields {
        let accepted: Vec<&str> = ValueKind::ALL
            .into_iter()
            .filter(|kind| kind.accepts(field))
            .map(ValueKind::as_str)
            .collect();
        writeln!(out, "{field}: {}", accepted.join(",")).unwrap();
    }

    insta::assert_snapshot!(out.trim_end(), @r"
    255: uint8,uint16,uint32,uint64,int16,int32,int64,float,double,string
    -1: int8,int16,int32,int64,float,double,string
    3.5: float,double,string
    1e39: double,string
    TRUE: string,bool
    abc: string
    ");
}
