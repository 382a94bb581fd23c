use crate::{Aggregator, ReportError};
use std::io::Write;

pub const SECTION_DELIMITER: &str = "#";

const SIGNIFICANT_DIGITS: usize = 6;

/// Writes the two-section report: `symbol,interval,percentage` per record in
/// input order, a `#` line, then `symbol,max_high,min_low` per symbol sorted
/// by symbol.
pub fn write_report<W: Write>(aggregator: &Aggregator, writer: W) -> Result<(), ReportError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for (record, pct) in aggregator.volume_percentages() {
        let interval = record.interval.to_string();
        let pct = format_number(pct);
        out.write_record([record.symbol.as_str(), interval.as_str(), pct.as_str()])?;
    }

    out.write_record([SECTION_DELIMITER])?;

    let mut bounds: Vec<_> = aggregator.bounds_by_stock().into_iter().collect();
    bounds.sort_by(|a, b| a.0.cmp(&b.0));
    for (symbol, b) in &bounds {
        let high = format_number(b.max_high);
        let low = format_number(b.min_low);
        out.write_record([symbol.as_str(), high.as_str(), low.as_str()])?;
    }

    out.flush()?;
    Ok(())
}

/// Renders a value with six significant digits and trailing zeros trimmed,
/// switching to exponent form for very large or very small magnitudes
/// (`80`, `33.3333`, `1.5e+06`, `-1.79769e+308`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs());
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp).max(0) as usize;
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoadOptions, Record};
    use std::collections::HashSet;
    use std::path::Path;

    fn render(aggregator: &Aggregator) -> String {
        let mut buf = Vec::new();
        write_report(aggregator, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn formats_like_six_significant_digits() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(80.000_000_000_000_01), "80");
        assert_eq!(format_number(100.0 / 3.0), "33.3333");
        assert_eq!(format_number(307.0 / 510.0 * 100.0), "60.1961");
        assert_eq!(format_number(449.8), "449.8");
        assert_eq!(format_number(1305.9), "1305.9");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn formats_extremes_in_exponent_form() {
        assert_eq!(format_number(1_500_000.0), "1.5e+06");
        assert_eq!(format_number(999_999.9), "1e+06");
        assert_eq!(format_number(0.000_012_5), "1.25e-05");
        assert_eq!(format_number(f64::MIN), "-1.79769e+308");
    }

    #[test]
    fn formats_special_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn single_record_report() {
        let aggregator = Aggregator::new(vec![Record::new("AAPL", 1, 100.0, 24.0, 10.0)]);
        assert_eq!(render(&aggregator), "AAPL,1,100\n#\nAAPL,24,10\n");
    }

    #[test]
    fn symbols_are_written_unquoted() {
        let aggregator = Aggregator::new(vec![Record::new("A\"B", 1, 100.0, 10.0, 5.0)]);
        assert_eq!(render(&aggregator), "A\"B,1,100\n#\nA\"B,10,5\n");
    }

    #[test]
    fn empty_input_prints_only_delimiter() {
        assert_eq!(render(&Aggregator::default()), "#\n");
    }

    #[test]
    fn zero_volume_renders_nan() {
        let aggregator = Aggregator::new(vec![Record::new("IDLE", 3, 0.0, 1.0, 0.5)]);
        assert_eq!(render(&aggregator), "IDLE,3,nan\n#\nIDLE,1,0.5\n");
    }

    #[test]
    fn fixture_report_sections() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/input.txt");
        let aggregator = Aggregator::from_path(path, LoadOptions::default()).unwrap();
        let output = render(&aggregator);

        let (percentages, bounds) = output.split_once("#\n").unwrap();
        assert_eq!(percentages, "VOD.L,1,80\nBT.LN,1,25\nVOD.L,2,20\nBT.LN,2,75\n");

        let rows: HashSet<&str> = bounds.lines().collect();
        let expected: HashSet<&str> = ["BT.LN,449.8,448.2", "VOD.L,184.1,182.4"]
            .into_iter()
            .collect();
        assert_eq!(rows, expected);
    }
}
