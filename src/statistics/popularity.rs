//! Company popularity ranking.
//!
//! Companies are ranked by how many contributions they have received and
//! split into a "popular" head and an "unpopular" tail.

use serde::{Deserialize, Serialize};

use crate::models::Company;

/// Where the unpopular slice starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// The unpopular slice starts right after the popular one.
    #[default]
    Contiguous,
    /// The unpopular slice starts one past the popular one, so the company
    /// ranked at index `top` appears in neither slice.
    Legacy,
}

/// A company with its contribution count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPopularity {
    /// Company id.
    pub id: u64,
    /// Full company name.
    pub name: String,
    /// Abbreviated identifier.
    pub short_name: String,
    /// Number of contributions recorded against the company.
    pub contributions: usize,
}

/// The two slices of the popularity ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopularitySplit {
    /// The most contributed-to companies.
    pub popular: Vec<CompanyPopularity>,
    /// The rest of the ranking.
    pub unpopular: Vec<CompanyPopularity>,
}

/// Ranks companies by contribution count, highest first.
///
/// Companies with equal counts keep ascending id order.
pub fn rank_companies<I>(companies: I) -> Vec<CompanyPopularity>
where
    I: IntoIterator<Item = (Company, usize)>,
{
    let mut ranked: Vec<CompanyPopularity> = companies
        .into_iter()
        .map(|(company, contributions)| CompanyPopularity {
            id: company.id,
            name: company.name,
            short_name: company.short_name,
            contributions,
        })
        .collect();

    ranked.sort_by(|a, b| b.contributions.cmp(&a.contributions).then(a.id.cmp(&b.id)));
    ranked
}

/// Splits a ranking into its popular head of `top` companies and the tail.
pub fn split_by_popularity(
    ranked: Vec<CompanyPopularity>,
    top: usize,
    policy: SplitPolicy,
) -> PopularitySplit {
    let tail_start = match policy {
        SplitPolicy::Contiguous => top,
        SplitPolicy::Legacy => top + 1,
    };

    let mut popular = ranked;
    let unpopular = if popular.len() > tail_start {
        popular.split_off(tail_start)
    } else {
        Vec::new()
    };
    popular.truncate(top);

    PopularitySplit { popular, unpopular }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: u64) -> Company {
        Company {
            id,
            name: format!("Company {id}"),
            short_name: format!("C{id}"),
            location: "Manila".to_string(),
        }
    }

    fn ranking(counts: &[usize]) -> Vec<CompanyPopularity> {
        rank_companies(
            counts
                .iter()
                .enumerate()
                .map(|(i, count)| (company(i as u64 + 1), *count)),
        )
    }

    fn ids(slice: &[CompanyPopularity]) -> Vec<u64> {
        slice.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_rank_by_count_descending() {
        let ranked = ranking(&[1, 5, 3]);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_id_order() {
        let ranked = ranking(&[2, 2, 2]);
        assert_eq!(ids(&ranked), vec![1, 2, 3]);
    }

    #[test]
    fn test_contiguous_split_is_complementary() {
        let ranked = ranking(&[7, 6, 5, 4, 3, 2, 1]);
        let split = split_by_popularity(ranked, 4, SplitPolicy::Contiguous);
        assert_eq!(ids(&split.popular), vec![1, 2, 3, 4]);
        assert_eq!(ids(&split.unpopular), vec![5, 6, 7]);
    }

    #[test]
    fn test_legacy_split_drops_fifth_company() {
        let ranked = ranking(&[7, 6, 5, 4, 3, 2, 1]);
        let split = split_by_popularity(ranked, 4, SplitPolicy::Legacy);
        assert_eq!(ids(&split.popular), vec![1, 2, 3, 4]);
        assert_eq!(ids(&split.unpopular), vec![6, 7]);
    }

    #[test]
    fn test_short_ranking_has_empty_tail() {
        let split = split_by_popularity(ranking(&[3, 1]), 4, SplitPolicy::Contiguous);
        assert_eq!(ids(&split.popular), vec![1, 2]);
        assert!(split.unpopular.is_empty());

        let split = split_by_popularity(ranking(&[5, 4, 3, 2, 1]), 4, SplitPolicy::Legacy);
        assert_eq!(split.popular.len(), 4);
        assert!(split.unpopular.is_empty());
    }
}
