//! Delimited-text record parser.
//!
//! Field splitting uses quote-state toggling: an unescaped `"` flips the
//! in-quotes state, `,` only delimits a field while outside quotes, and
//! quote characters never reach the emitted value. There is no
//! doubled-quote escape. Every field is trimmed of surrounding whitespace.
//!
//! Numeric coercion follows the explicit column schema in
//! [`inspection_map_inspection_models::schema`]: a malformed, missing, or
//! non-finite value in a numeric column becomes 0, never an error. A
//! genuinely-zero source value and a coerced parse failure are therefore
//! indistinguishable downstream.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use inspection_map_inspection_models::schema::{self, ColumnKind, columns};
use inspection_map_inspection_models::{InspectionRecord, InspectionResult};

/// Parses a complete delimited file (header line first) into records.
///
/// Always yields exactly one record per non-header line. Rows shorter
/// than the header treat the missing trailing columns as absent:
/// numeric → 0, text → empty.
#[must_use]
pub fn parse_records(raw: &str) -> Vec<InspectionRecord> {
    let mut lines = raw.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let index = ColumnIndex::new(&split_fields(header_line));

    let records: Vec<InspectionRecord> = lines
        .map(|line| build_record(&index, &split_fields(line)))
        .collect();

    log::debug!("Parsed {} inspection records", records.len());
    records
}

/// Splits one line into trimmed fields with quote-state toggling.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_owned());
    fields
}

/// Applies the numeric coercion policy to one raw field value.
#[must_use]
pub fn coerce_numeric(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Header-name → position lookup built once per file.
struct ColumnIndex(BTreeMap<String, usize>);

impl ColumnIndex {
    fn new(headers: &[String]) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), i))
                .collect(),
        )
    }

    /// Raw text for a column; empty when the column is absent from the
    /// header or the row is short.
    fn raw<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.0
            .get(name)
            .and_then(|&i| row.get(i))
            .map_or("", String::as_str)
    }

    /// Value of a column the schema marks as text.
    fn text<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        debug_assert_eq!(
            schema::column_kind(name),
            ColumnKind::Text,
            "{name} is not a text column"
        );
        self.raw(row, name)
    }

    /// Coerced float for a column the schema marks as numeric.
    fn number(&self, row: &[String], name: &str) -> f64 {
        debug_assert_eq!(
            schema::column_kind(name),
            ColumnKind::Numeric,
            "{name} is not a numeric column"
        );
        coerce_numeric(self.raw(row, name))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn build_record(index: &ColumnIndex, row: &[String]) -> InspectionRecord {
    InspectionRecord {
        inspection_id: index.number(row, columns::INSPECTION_ID) as i64,
        license: index.number(row, columns::LICENSE) as i64,
        business_name: index.text(row, columns::DBA_NAME).to_owned(),
        address: index.text(row, columns::ADDRESS).to_owned(),
        facility_type: index.text(row, columns::FACILITY_TYPE).to_owned(),
        inspection_date: parse_inspection_date(index.text(row, columns::INSPECTION_DATE)),
        result: InspectionResult::from(index.text(row, columns::RESULTS).to_owned()),
        pass_flag: index.number(row, columns::PASS_FLAG) as u8,
        fail_flag: index.number(row, columns::FAIL_FLAG) as u8,
        critical_found: index.number(row, columns::CRITICAL_FOUND) as u8,
        critical_count: index.number(row, columns::CRITICAL_COUNT) as u32,
        serious_count: index.number(row, columns::SERIOUS_COUNT) as u32,
        minor_count: index.number(row, columns::MINOR_COUNT) as u32,
        community_name: index.text(row, columns::COMMUNITY_NAME).to_owned(),
        area_num: index.number(row, columns::AREA_NUM) as i32,
        latitude: index.number(row, columns::LATITUDE),
        longitude: index.number(row, columns::LONGITUDE),
        embedding_x: index.number(row, columns::EMBEDDING_X),
        embedding_y: index.number(row, columns::EMBEDDING_Y),
    }
}

/// Parses an inspection date, ISO format first with a US-style fallback.
fn parse_inspection_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Inspection_ID,DBA_Name,Address,Facility_Type,Inspection_Date,Results,pass_flag,criticalFound,community_name,tsne_x,tsne_y";

    fn parse_one(line: &str) -> InspectionRecord {
        let raw = format!("{HEADER}\n{line}");
        let mut records = parse_records(&raw);
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn delimiter_inside_quotes_is_literal() {
        let fields = split_fields("1,\"Joe's Pizza, Inc.\",Fail");
        assert_eq!(fields, vec!["1", "Joe's Pizza, Inc.", "Fail"]);
    }

    #[test]
    fn quotes_are_stripped_wherever_they_occur() {
        assert_eq!(split_fields("ab\"cd\"ef"), vec!["abcdef"]);
        assert_eq!(split_fields("\"quoted\",plain"), vec!["quoted", "plain"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_fields("  a , b  ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        assert_eq!(split_fields("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn coerces_malformed_numeric_to_zero() {
        assert!((coerce_numeric("abc") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_numeric("") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_numeric("inf") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_numeric("NaN") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coerces_valid_numeric() {
        assert!((coerce_numeric("42") - 42.0).abs() < f64::EPSILON);
        assert!((coerce_numeric("-87.6298") - -87.6298).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_a_full_record() {
        let record = parse_one(
            "2345,\"Joe's Pizza, Inc.\",123 W Main St,Restaurant,2024-03-15,Fail,0,1,Loop,1.5,-2.25",
        );
        assert_eq!(record.inspection_id, 2345);
        assert_eq!(record.business_name, "Joe's Pizza, Inc.");
        assert_eq!(record.facility_type, "Restaurant");
        assert_eq!(
            record.inspection_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(record.result, InspectionResult::Fail);
        assert_eq!(record.pass_flag, 0);
        assert_eq!(record.critical_found, 1);
        assert_eq!(record.community_name, "Loop");
        assert!((record.embedding_x - 1.5).abs() < f64::EPSILON);
        assert!((record.embedding_y - -2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_numeric_column_becomes_zero() {
        let record = parse_one("abc,Cafe,Addr,Bakery,2024-01-01,Pass,1,0,Loop,0.0,0.0");
        assert_eq!(record.inspection_id, 0);
    }

    #[test]
    fn short_row_fills_numeric_zero_and_text_empty() {
        let record = parse_one("17,Cafe");
        assert_eq!(record.inspection_id, 17);
        assert_eq!(record.business_name, "Cafe");
        assert_eq!(record.address, "");
        assert_eq!(record.facility_type, "");
        assert_eq!(record.inspection_date, None);
        assert_eq!(record.pass_flag, 0);
        assert!((record.embedding_x - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn row_count_matches_lines_minus_header() {
        let raw = format!("{HEADER}\n1,A\n2,B\n3,C");
        assert_eq!(parse_records(&raw).len(), 3);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_records("").is_empty());
        assert!(parse_records(HEADER).is_empty());
    }

    #[test]
    fn parses_us_style_date_fallback() {
        let record = parse_one("1,A,B,C,03/15/2024,Pass,1,0,Loop,0,0");
        assert_eq!(
            record.inspection_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn unparseable_date_is_none() {
        let record = parse_one("1,A,B,C,not-a-date,Pass,1,0,Loop,0,0");
        assert_eq!(record.inspection_date, None);
    }
}
