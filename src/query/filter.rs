//! Equality filters over contributions.

use serde::{Deserialize, Deserializer};

use crate::models::ContributionRow;

/// Optional equality criteria for contributions, combined with AND.
///
/// Deserialized from the query string. Empty values count as absent, a
/// `company` that is not an unsigned integer fails deserialization and the
/// request is rejected. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContributionFilter {
    /// Exact job title.
    #[serde(default, deserialize_with = "non_empty_text")]
    pub job_title: Option<String>,
    /// Company id.
    #[serde(default, deserialize_with = "optional_id")]
    pub company: Option<u64>,
    /// Exact, case-sensitive company short name.
    #[serde(default, deserialize_with = "non_empty_text")]
    pub company_name: Option<String>,
    /// Exact level name.
    #[serde(default, deserialize_with = "non_empty_text")]
    pub level: Option<String>,
}

impl ContributionFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none()
            && self.company.is_none()
            && self.company_name.is_none()
            && self.level.is_none()
    }

    /// Whether a row satisfies every criterion that is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_tracker::query::ContributionFilter;
    ///
    /// let filter = ContributionFilter::default();
    /// assert!(filter.is_empty());
    /// ```
    pub fn matches(&self, row: &ContributionRow) -> bool {
        let contribution = &row.contribution;
        self.job_title
            .as_deref()
            .is_none_or(|title| contribution.job_title == title)
            && self.company.is_none_or(|id| contribution.company_id == id)
            && self
                .company_name
                .as_deref()
                .is_none_or(|name| row.company_short_name == name)
            && self
                .level
                .as_deref()
                .is_none_or(|level| row.level_name == level)
    }

    /// Keeps the rows that match, preserving their order.
    pub fn apply(&self, mut rows: Vec<ContributionRow>) -> Vec<ContributionRow> {
        if !self.is_empty() {
            rows.retain(|row| self.matches(row));
        }
        rows
    }
}

/// Reads an optional text parameter, treating an empty value as absent.
pub(crate) fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

/// Reads an optional id parameter, treating an empty value as absent.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_number(deserializer)
}

/// Reads an optional unsigned number, treating an empty value as absent.
pub(crate) fn optional_number<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: std::str::FromStr,
{
    match non_empty_text(deserializer)? {
        None => Ok(None),
        Some(text) => text.trim().parse::<N>().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("'{text}' is not a valid unsigned integer"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::test_support::{row, row_in_company};

    use axum::extract::Query;
    use axum::extract::rejection::QueryRejection;
    use axum::http::Uri;

    fn parse(query: &str) -> Result<ContributionFilter, QueryRejection> {
        let uri: Uri = format!("/contributions?{query}").parse().unwrap();
        Query::try_from_uri(&uri).map(|Query(filter)| filter)
    }

    #[test]
    fn test_parse_all_criteria() {
        let filter =
            parse("job_title=Software%20Engineer&company=3&company_name=Acme&level=L2").unwrap();
        assert_eq!(filter.job_title.as_deref(), Some("Software Engineer"));
        assert_eq!(filter.company, Some(3));
        assert_eq!(filter.company_name.as_deref(), Some("Acme"));
        assert_eq!(filter.level.as_deref(), Some("L2"));
    }

    #[test]
    fn test_malformed_company_rejected() {
        assert!(parse("company=abc").is_err());
        assert!(parse("company=-1").is_err());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let filter = parse("job_title=&company=").unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let filter = parse("page=2&sort=salary").unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_company_name_is_case_sensitive() {
        let rows = vec![
            row_in_company(1, "Acme", 1, "Engineer", "L1", 0, Some(10), None),
            row_in_company(2, "acme", 2, "Engineer", "L1", 0, Some(20), None),
            row_in_company(3, "ACME", 3, "Engineer", "L1", 0, Some(30), None),
        ];
        let filter = ContributionFilter {
            company_name: Some("Acme".to_string()),
            ..Default::default()
        };

        let kept = filter.apply(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].contribution.id, 1);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let rows = vec![
            row(1, "Engineer", "L1", 0, Some(10), None),
            row(2, "Engineer", "L2", 1, Some(20), None),
            row(3, "Designer", "L1", 0, Some(30), None),
        ];
        let filter = ContributionFilter {
            job_title: Some("Engineer".to_string()),
            level: Some("L1".to_string()),
            ..Default::default()
        };

        let ids: Vec<u64> = filter.apply(rows).iter().map(|r| r.contribution.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_apply_preserves_order() {
        let rows = vec![
            row(5, "Engineer", "L1", 0, None, None),
            row(2, "Designer", "L1", 0, None, None),
            row(9, "Engineer", "L1", 0, None, None),
        ];
        let filter = ContributionFilter {
            job_title: Some("Engineer".to_string()),
            ..Default::default()
        };

        let ids: Vec<u64> = filter.apply(rows).iter().map(|r| r.contribution.id).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn test_company_id_filter() {
        let rows = vec![
            row_in_company(1, "Acme", 1, "Engineer", "L1", 0, None, None),
            row_in_company(2, "Globex", 2, "Engineer", "L1", 0, None, None),
        ];
        let filter = parse("company=2").unwrap();
        let kept = filter.apply(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].company_short_name, "Globex");
    }
}
