//! Monthly precipitation readings unrolled from the body of a `.pre` file.

use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;

use super::{is_grid_ref_line, GridRef};

/// One value for one grid cell and month. The date is always the first of the month.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub grid_ref: GridRef,
    pub date: NaiveDate,
    pub value: Value,
}

/// A monthly value, kept as an exact integer when the token is one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    /// Parses a token as an integer, falling back to a finite real.
    ///
    /// Words `f64` would otherwise accept, such as `NaN` or `inf`, are rejected.
    pub fn parse(token: &str) -> Option<Self> {
        if let Ok(v) = token.parse::<i64>() {
            return Some(Value::Integer(v));
        }
        if !token.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Real)
    }
}

impl PrecipitationReading {
    /// Date in `M/D/YYYY` form without zero padding, e.g. `1/1/1980`.
    pub fn date_string(&self) -> String {
        format!("{}/{}/{}", self.date.month(), self.date.day(), self.date.year())
    }
}

/// Walks every line after `header_end`, emitting readings in section, year, month order.
///
/// Each `grid-ref=` line starts a section and resets the year to `start_year`; every
/// other line is one year of monthly values.
pub fn extract_readings(
    lines: &[String],
    header_end: usize,
    start_year: i32,
) -> Result<Vec<PrecipitationReading>, ParseError> {
    let mut readings = Vec::new();
    let mut section: Option<(GridRef, i32)> = None;

    for (index, line) in lines.iter().enumerate().skip(header_end + 1) {
        let line_number = index + 1;

        if is_grid_ref_line(line) {
            section = Some((GridRef::from_line(line, line_number)?, start_year));
            continue;
        }

        let (grid_ref, year) = section
            .as_mut()
            .ok_or(ParseError::DataBeforeGridRef { line: line_number })?;

        for (position, token) in month_tokens(line).iter().enumerate() {
            if token.is_empty() {
                continue;
            }
            let month = position + 1;
            let date = u32::try_from(month)
                .ok()
                .and_then(|m| NaiveDate::from_ymd_opt(*year, m, 1))
                .ok_or(ParseError::InvalidMonth {
                    line: line_number,
                    month,
                })?;
            let value = Value::parse(token).ok_or_else(|| ParseError::InvalidValue {
                line: line_number,
                token: token.to_string(),
            })?;

            readings.push(PrecipitationReading {
                grid_ref: grid_ref.clone(),
                date,
                value,
            });
        }

        *year += 1;
    }

    Ok(readings)
}

// Month slots are positions in the comma-split of the whitespace-collapsed line, so a
// stray comma inside a value opens an empty slot that still advances the month.
fn month_tokens(line: &str) -> Vec<String> {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(",")
        .split(',')
        .map(str::to_string)
        .collect()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn summary(readings: &[PrecipitationReading]) -> Vec<(String, String, String, Value)> {
        readings
            .iter()
            .map(|r| {
                (
                    r.grid_ref.x.clone(),
                    r.grid_ref.y.clone(),
                    r.date_string(),
                    r.value,
                )
            })
            .collect()
    }

    #[test]
    fn should_reset_year_for_each_grid_ref() {
        let file = lines(&[
            "Years=1980-1981",
            "grid-ref=123,456",
            "1.0 2.0 3.0",
            "grid-ref=789,012",
            "4.0 5.0",
        ]);

        let readings = extract_readings(&file, 0, 1980).unwrap();

        assert_eq!(
            summary(&readings),
            vec![
                ("123".into(), "456".into(), "1/1/1980".into(), Value::Real(1.0)),
                ("123".into(), "456".into(), "2/1/1980".into(), Value::Real(2.0)),
                ("123".into(), "456".into(), "3/1/1980".into(), Value::Real(3.0)),
                ("789".into(), "012".into(), "1/1/1980".into(), Value::Real(4.0)),
                ("789".into(), "012".into(), "2/1/1980".into(), Value::Real(5.0)),
            ]
        );
    }

    #[test]
    fn should_advance_year_per_line() {
        let file = lines(&[
            "[Boxes=   67420] [Years=1991-1993] [Multi=    0.1000] [Missing=-999]",
            "Grid-ref=   1, 148",
            " 3020 2820 3040 2880 1740 1360  980  990 1410 1770 2580 2630",
            " 2460 2390 2800 2620 1540 1310  820  860 1270 1600 2250 2250",
            " 2720 2590",
        ]);

        let readings = extract_readings(&file, 0, 1991).unwrap();

        assert_eq!(readings.len(), 26);
        assert_eq!(readings[0].date_string(), "1/1/1991");
        assert_eq!(readings[11].date_string(), "12/1/1991");
        assert_eq!(readings[11].value, Value::Integer(2630));
        assert_eq!(readings[12].date_string(), "1/1/1992");
        assert_eq!(readings[25].date_string(), "2/1/1993");
        assert_eq!(readings[25].value, Value::Integer(2590));
    }

    #[test]
    fn should_skip_empty_slot_but_consume_month() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "5, 6"]);

        let readings = extract_readings(&file, 0, 2000).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].date_string(), "1/1/2000");
        assert_eq!(readings[1].date_string(), "3/1/2000");
        assert_eq!(readings[1].value, Value::Integer(6));
    }

    #[test]
    fn should_count_blank_line_as_a_year() {
        let file = lines(&["Years=2000-2002", "grid-ref=1,2", "1", "", "3"]);

        let readings = extract_readings(&file, 0, 2000).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].date_string(), "1/1/2002");
    }

    #[test]
    fn should_keep_negative_values() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "-999 12"]);

        let readings = extract_readings(&file, 0, 2000).unwrap();

        assert_eq!(readings[0].value, Value::Integer(-999));
    }

    #[test]
    fn should_fail_on_non_numeric_value() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "5 abc"]);

        assert_eq!(
            extract_readings(&file, 0, 2000),
            Err(ParseError::InvalidValue {
                line: 3,
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn should_fail_on_nan_or_inf() {
        for token in ["NaN", "inf", "-infinity", "Infinity", "1e999"] {
            let data = format!("5 {token}");
            let file = lines(&["Years=2000-2000", "grid-ref=1,2", data.as_str()]);

            assert_eq!(
                extract_readings(&file, 0, 2000),
                Err(ParseError::InvalidValue {
                    line: 3,
                    token: token.to_string()
                })
            );
        }
    }

    #[test]
    fn should_keep_large_integers_exact() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "9007199254740993 0.25 1e2"]);

        let readings = extract_readings(&file, 0, 2000).unwrap();

        assert_eq!(readings[0].value, Value::Integer(9_007_199_254_740_993));
        assert_eq!(readings[1].value, Value::Real(0.25));
        assert_eq!(readings[2].value, Value::Real(100.0));
    }

    #[test]
    fn should_fail_on_thirteenth_month() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "1 2 3 4 5 6 7 8 9 10 11 12 13"]);

        assert_eq!(
            extract_readings(&file, 0, 2000),
            Err(ParseError::InvalidMonth { line: 3, month: 13 })
        );
    }

    #[test]
    fn should_fail_on_data_before_grid_ref() {
        let file = lines(&["Years=2000-2000", "1 2", "grid-ref=1,2"]);

        assert_eq!(
            extract_readings(&file, 0, 2000),
            Err(ParseError::DataBeforeGridRef { line: 2 })
        );
    }

    #[test]
    fn should_return_nothing_for_empty_sections() {
        let file = lines(&["Years=2000-2000", "grid-ref=1,2", "grid-ref=3,4"]);

        assert!(extract_readings(&file, 0, 2000).unwrap().is_empty());
    }
}
