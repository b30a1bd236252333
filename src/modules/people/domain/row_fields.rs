/// Typed access to the raw fields of one import row
use super::errors::RowError;
use chrono::NaiveDate;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw row. Index 0 is the type tag, the rest are type-specific fields.
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    line: u64,
    fields: &'a [&'a str],
}

impl<'a> RowFields<'a> {
    pub fn new(line: u64, fields: &'a [&'a str]) -> Self {
        Self { line, fields }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|field| field.trim().is_empty())
    }

    pub fn type_tag(&self) -> &'a str {
        self.fields.first().map(|tag| tag.trim()).unwrap_or("")
    }

    /// Required, non-empty text field
    pub fn text(&self, index: usize, name: &str) -> Result<String, RowError> {
        let value = self.raw(index, name)?;
        if value.is_empty() {
            return Err(RowError::malformed(
                self.line,
                format!("field '{}' is empty", name),
            ));
        }
        Ok(value.to_string())
    }

    /// Numeric (or any `FromStr`) field
    pub fn parse<T>(&self, index: usize, name: &str) -> Result<T, RowError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.raw(index, name)?;
        value.parse::<T>().map_err(|e| {
            RowError::malformed(
                self.line,
                format!("field '{}' has invalid value '{}': {}", name, value, e),
            )
        })
    }

    /// `YYYY-MM-DD` date field
    pub fn date(&self, index: usize, name: &str) -> Result<NaiveDate, RowError> {
        let value = self.raw(index, name)?;
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
            RowError::malformed(
                self.line,
                format!("field '{}' has invalid date '{}': {}", name, value, e),
            )
        })
    }

    fn raw(&self, index: usize, name: &str) -> Result<&'a str, RowError> {
        self.fields
            .get(index)
            .map(|value| value.trim())
            .ok_or_else(|| {
                RowError::malformed(
                    self.line,
                    format!(
                        "missing field '{}' (expected at position {}, row has {})",
                        name,
                        index + 1,
                        self.fields.len()
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_typed_fields() {
        let raw = ["employee", " Jan ", "4500.50", "2020-02-29"];
        let row = RowFields::new(3, &raw);

        assert_eq!(row.type_tag(), "employee");
        assert_eq!(row.text(1, "first_name").unwrap(), "Jan");
        assert_eq!(row.parse::<f64>(2, "salary").unwrap(), 4500.50);
        assert_eq!(
            row.date(3, "employment_start").unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn reports_line_for_bad_number() {
        let raw = ["student", "abc"];
        let row = RowFields::new(7, &raw);

        match row.parse::<u32>(1, "year_of_study") {
            Err(RowError::MalformedRow { line, reason }) => {
                assert_eq!(line, 7);
                assert!(reason.contains("year_of_study"));
            }
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn missing_and_empty_fields_are_malformed() {
        let raw = ["student", ""];
        let row = RowFields::new(1, &raw);

        assert!(row.text(1, "first_name").is_err());
        assert!(row.text(5, "email").is_err());
        assert!(row.date(1, "employment_start").is_err());
    }

    #[test]
    fn blank_rows_are_empty() {
        let raw = ["", "  "];
        assert!(RowFields::new(1, &raw).is_empty());
        assert!(RowFields::new(1, &[]).is_empty());
        assert!(!RowFields::new(1, &["student"]).is_empty());
    }
}
