use crate::gateway::ApiError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional date bounds for the sales report and revenue series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ApiError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ApiError::Validation(format!(
                    "Start date {start} is after end date {end}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM-DD` inputs; blank means unbounded.
    pub fn parse(start: &str, end: &str) -> Result<Self, ApiError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start {
            query.push(("start_date".to_string(), start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end {
            query.push(("end_date".to_string(), end.format(DATE_FORMAT).to_string()));
        }
        query
    }
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>, ApiError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|e| ApiError::Validation(format!("Invalid date {input:?}: {e}")))
}
