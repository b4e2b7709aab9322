use coilgen_core::{PadType, SegmentShape};

use crate::{Footprint, Pad, PadShape};

const TEXT_EFFECTS: &str = "(effects (font (size 1 1) (thickness 0.15)))";

/// Millimetre value with at most six decimals (KiCad's nanometre grid), trailing zeros trimmed.
pub fn fmt_mm(v: f64) -> String {
    let v = if v.abs() < 1e-12 { 0.0 } else { v };
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn quoted(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\\'));
    if needs_quotes {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn render_module(fp: &Footprint) -> String {
    let name = quoted(&fp.name);
    let mut out = format!("(module {name} (layer F.Cu) (tedit 0)\n");
    out.push_str(&format!("  (descr {})\n", quoted(&fp.description)));
    out.push_str(&format!("  (tags {})\n", quoted(&fp.tags)));
    out.push_str("  (fp_text reference REF** (at 0 -2) (layer F.SilkS)\n");
    out.push_str(&format!("    {TEXT_EFFECTS}\n  )\n"));
    out.push_str(&format!("  (fp_text value {name} (at 1.5 2) (layer F.Fab)\n"));
    out.push_str(&format!("    {TEXT_EFFECTS}\n  )\n"));

    for seg in &fp.segments {
        let line = match seg.shape {
            SegmentShape::Line { start, end } => format!(
                "(fp_line (start {} {}) (end {} {}) (layer {}) (width {}))",
                fmt_mm(start.x),
                fmt_mm(start.y),
                fmt_mm(end.x),
                fmt_mm(end.y),
                seg.layer,
                fmt_mm(seg.width)
            ),
            // KiCad 5 arcs: `start` is the center, `end` the arc's first point.
            SegmentShape::Arc {
                center,
                start,
                sweep_deg,
            } => format!(
                "(fp_arc (start {} {}) (end {} {}) (angle {}) (layer {}) (width {}))",
                fmt_mm(center.x),
                fmt_mm(center.y),
                fmt_mm(start.x),
                fmt_mm(start.y),
                fmt_mm(sweep_deg),
                seg.layer,
                fmt_mm(seg.width)
            ),
        };
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }

    for pad in &fp.pads {
        out.push_str("  ");
        out.push_str(&render_pad(pad));
        out.push('\n');
    }

    out.push_str(")\n");
    out
}

fn render_pad(pad: &Pad) -> String {
    let kind = match pad.pad_type {
        PadType::Smt => "smd",
        PadType::Tht => "thru_hole",
        PadType::Connect => "connect",
    };
    let shape = match pad.shape {
        PadShape::Circle => "circle",
        PadShape::Rect => "rect",
    };
    let drill = pad
        .drill
        .map(|d| format!(" (drill {})", fmt_mm(d)))
        .unwrap_or_default();
    format!(
        "(pad {} {kind} {shape} (at {} {}) (size {} {}){drill} (layers {}))",
        pad.number,
        fmt_mm(pad.at.x),
        fmt_mm(pad.at.y),
        fmt_mm(pad.size),
        fmt_mm(pad.size),
        pad.layers()
    )
}
