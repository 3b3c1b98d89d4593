//! In-memory record store.
//!
//! The store owns every table behind one lock. Each public operation takes
//! the lock once, so reference checks and cascading deletes are atomic from
//! a caller's point of view.
//!
//! Referential rules:
//!
//! - levels, compensations and contributions must reference an existing
//!   company;
//! - compensations and contributions must reference a level of that same
//!   company;
//! - certificates must reference an existing compensation;
//! - deleting a record deletes everything that references it, transitively.

mod seed;
mod table;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Certificate, Company, Compensation, Contribution, ContributionRow, Level, NewCertificate,
    NewCompany, NewCompensation, NewContribution, NewLevel, current_timestamp,
};
use crate::query::{CompanyScope, CompensationScope, ContributionFilter};

use table::Table;

/// Number of records per table.
///
/// Returned by deletes (what the cascade removed) and by seeding (what was
/// inserted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounts {
    /// Companies.
    pub companies: usize,
    /// Levels.
    pub levels: usize,
    /// Compensation bands.
    pub compensations: usize,
    /// Contributions.
    pub contributions: usize,
    /// Certificates.
    pub certificates: usize,
}

#[derive(Debug, Default)]
struct Tables {
    companies: Table<Company>,
    levels: Table<Level>,
    compensations: Table<Compensation>,
    contributions: Table<Contribution>,
    certificates: Table<Certificate>,
}

impl Tables {
    /// Checks that the company exists and owns the level.
    fn check_level(&self, company_id: u64, level_id: u64) -> TrackerResult<()> {
        self.companies.resolve("company", company_id)?;
        let level = self.levels.resolve("level", level_id)?;
        if level.company_id != company_id {
            return Err(TrackerError::validation(
                "level",
                format!(
                    "level {level_id} belongs to company {}, not company {company_id}",
                    level.company_id
                ),
            ));
        }
        Ok(())
    }

    fn level_in_use(&self, level_id: u64) -> bool {
        self.compensations.values().any(|c| c.level_id == level_id)
            || self.contributions.values().any(|c| c.level_id == level_id)
    }

    fn join(&self, contribution: &Contribution) -> TrackerResult<ContributionRow> {
        let company = self.companies.get(contribution.company_id)?;
        let level = self.levels.get(contribution.level_id)?;
        Ok(ContributionRow {
            contribution: contribution.clone(),
            company_short_name: company.short_name.clone(),
            level_name: level.name.clone(),
            level_order: level.order,
        })
    }

    /// Joins contributions and puts them in default order: most recent
    /// submission first, newest id first on ties.
    fn rows<'a, I>(&self, contributions: I) -> TrackerResult<Vec<ContributionRow>>
    where
        I: IntoIterator<Item = &'a Contribution>,
    {
        let mut rows = contributions
            .into_iter()
            .map(|contribution| self.join(contribution))
            .collect::<TrackerResult<Vec<_>>>()?;
        rows.sort_by(|a, b| {
            b.contribution
                .datetime_of_contribution
                .cmp(&a.contribution.datetime_of_contribution)
                .then(b.contribution.id.cmp(&a.contribution.id))
        });
        Ok(rows)
    }

    /// Removes certificates of the given compensations.
    fn remove_certificates_of(&mut self, compensation_ids: &[u64]) -> usize {
        self.certificates
            .remove_where(|c| compensation_ids.contains(&c.compensation_id))
            .len()
    }

    fn counts(&self) -> RecordCounts {
        RecordCounts {
            companies: self.companies.len(),
            levels: self.levels.len(),
            compensations: self.compensations.len(),
            contributions: self.contributions.len(),
            certificates: self.certificates.len(),
        }
    }
}

/// Thread-safe store of every record.
///
/// # Example
///
/// ```
/// use salary_tracker::models::NewCompany;
/// use salary_tracker::store::RecordStore;
///
/// let store = RecordStore::new();
/// let company = store
///     .create_company(NewCompany {
///         name: "Acme Corporation".to_string(),
///         short_name: "Acme".to_string(),
///         location: "Manila".to_string(),
///     })
///     .unwrap();
/// assert_eq!(company.id, 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    tables: RwLock<Tables>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records in each table.
    pub fn counts(&self) -> RecordCounts {
        self.read().counts()
    }

    // Companies

    /// Creates a company.
    pub fn create_company(&self, draft: NewCompany) -> TrackerResult<Company> {
        draft.validate()?;
        let mut tables = self.write();
        let id = tables.companies.next_id();
        Ok(tables.companies.put(draft.into_record(id)))
    }

    /// Every company in id order.
    pub fn companies(&self) -> Vec<Company> {
        self.read().companies.values().cloned().collect()
    }

    /// One company.
    pub fn company(&self, id: u64) -> TrackerResult<Company> {
        self.read().companies.get(id).cloned()
    }

    /// Replaces a company's fields.
    pub fn update_company(&self, id: u64, draft: NewCompany) -> TrackerResult<Company> {
        self.modify_company(id, |_| draft)
    }

    /// Rewrites a company's fields from its current values.
    pub fn modify_company<F>(&self, id: u64, change: F) -> TrackerResult<Company>
    where
        F: FnOnce(NewCompany) -> NewCompany,
    {
        let mut tables = self.write();
        let draft = change(NewCompany::from(tables.companies.get(id)?));
        draft.validate()?;
        Ok(tables.companies.put(draft.into_record(id)))
    }

    /// Deletes a company and everything that belongs to it.
    pub fn delete_company(&self, id: u64) -> TrackerResult<RecordCounts> {
        let mut tables = self.write();
        tables.companies.remove(id)?;

        let level_ids = tables.levels.remove_where(|l| l.company_id == id);
        let compensation_ids = tables
            .compensations
            .remove_where(|c| c.company_id == id || level_ids.contains(&c.level_id));
        let contributions = tables
            .contributions
            .remove_where(|c| c.company_id == id || level_ids.contains(&c.level_id))
            .len();
        let certificates = tables.remove_certificates_of(&compensation_ids);

        let removed = RecordCounts {
            companies: 1,
            levels: level_ids.len(),
            compensations: compensation_ids.len(),
            contributions,
            certificates,
        };
        debug!(company_id = id, ?removed, "Company deleted with dependents");
        Ok(removed)
    }

    /// Companies paired with their contribution counts, in id order.
    pub fn contribution_counts(&self) -> Vec<(Company, usize)> {
        let tables = self.read();
        tables
            .companies
            .values()
            .map(|company| {
                let count = tables
                    .contributions
                    .values()
                    .filter(|c| c.company_id == company.id)
                    .count();
                (company.clone(), count)
            })
            .collect()
    }

    // Levels

    /// Creates a level.
    pub fn create_level(&self, draft: NewLevel) -> TrackerResult<Level> {
        draft.validate()?;
        let mut tables = self.write();
        tables.companies.resolve("company", draft.company_id)?;
        let id = tables.levels.next_id();
        Ok(tables.levels.put(draft.into_record(id)))
    }

    /// Levels in scope, ordered by company then level order.
    pub fn levels(&self, scope: CompanyScope) -> Vec<Level> {
        let mut levels: Vec<Level> = self
            .read()
            .levels
            .values()
            .filter(|l| scope.includes(l.company_id))
            .cloned()
            .collect();
        levels.sort_by_key(|l| (l.company_id, l.order, l.id));
        levels
    }

    /// One level.
    pub fn level(&self, id: u64) -> TrackerResult<Level> {
        self.read().levels.get(id).cloned()
    }

    /// Replaces a level's fields.
    ///
    /// A level that compensations or contributions refer to cannot move to
    /// another company.
    pub fn update_level(&self, id: u64, draft: NewLevel) -> TrackerResult<Level> {
        self.modify_level(id, |_| draft)
    }

    /// Rewrites a level's fields from its current values.
    pub fn modify_level<F>(&self, id: u64, change: F) -> TrackerResult<Level>
    where
        F: FnOnce(NewLevel) -> NewLevel,
    {
        let mut tables = self.write();
        let current = tables.levels.get(id)?;
        let current_company = current.company_id;
        let draft = change(NewLevel::from(current));
        draft.validate()?;
        tables.companies.resolve("company", draft.company_id)?;
        if current_company != draft.company_id && tables.level_in_use(id) {
            return Err(TrackerError::validation(
                "company",
                "a level with compensations or contributions cannot move to another company",
            ));
        }
        Ok(tables.levels.put(draft.into_record(id)))
    }

    /// Deletes a level with its compensations, contributions and their
    /// certificates.
    pub fn delete_level(&self, id: u64) -> TrackerResult<RecordCounts> {
        let mut tables = self.write();
        tables.levels.remove(id)?;

        let compensation_ids = tables.compensations.remove_where(|c| c.level_id == id);
        let contributions = tables
            .contributions
            .remove_where(|c| c.level_id == id)
            .len();
        let certificates = tables.remove_certificates_of(&compensation_ids);

        let removed = RecordCounts {
            levels: 1,
            compensations: compensation_ids.len(),
            contributions,
            certificates,
            ..RecordCounts::default()
        };
        debug!(level_id = id, ?removed, "Level deleted with dependents");
        Ok(removed)
    }

    // Compensations

    /// Creates a compensation band.
    pub fn create_compensation(&self, draft: NewCompensation) -> TrackerResult<Compensation> {
        draft.validate()?;
        let mut tables = self.write();
        tables.check_level(draft.company_id, draft.level_id)?;
        let id = tables.compensations.next_id();
        Ok(tables.compensations.put(draft.into_record(id)))
    }

    /// Compensation bands in scope, in id order.
    pub fn compensations(&self, scope: CompanyScope) -> Vec<Compensation> {
        self.read()
            .compensations
            .values()
            .filter(|c| scope.includes(c.company_id))
            .cloned()
            .collect()
    }

    /// One compensation band.
    pub fn compensation(&self, id: u64) -> TrackerResult<Compensation> {
        self.read().compensations.get(id).cloned()
    }

    /// Replaces a compensation band's fields.
    pub fn update_compensation(
        &self,
        id: u64,
        draft: NewCompensation,
    ) -> TrackerResult<Compensation> {
        self.modify_compensation(id, |_| draft)
    }

    /// Rewrites a compensation band's fields from its current values.
    pub fn modify_compensation<F>(&self, id: u64, change: F) -> TrackerResult<Compensation>
    where
        F: FnOnce(NewCompensation) -> NewCompensation,
    {
        let mut tables = self.write();
        let draft = change(NewCompensation::from(tables.compensations.get(id)?));
        draft.validate()?;
        tables.check_level(draft.company_id, draft.level_id)?;
        Ok(tables.compensations.put(draft.into_record(id)))
    }

    /// Deletes a compensation band and its certificates.
    pub fn delete_compensation(&self, id: u64) -> TrackerResult<RecordCounts> {
        let mut tables = self.write();
        tables.compensations.remove(id)?;
        let certificates = tables.remove_certificates_of(&[id]);
        Ok(RecordCounts {
            compensations: 1,
            certificates,
            ..RecordCounts::default()
        })
    }

    // Contributions

    /// Records a contribution submitted now.
    pub fn create_contribution(&self, draft: NewContribution) -> TrackerResult<ContributionRow> {
        self.insert_contribution(draft, current_timestamp())
    }

    /// Records a contribution with an explicit submission time.
    pub fn insert_contribution(
        &self,
        draft: NewContribution,
        submitted_at: NaiveDateTime,
    ) -> TrackerResult<ContributionRow> {
        draft.validate()?;
        let mut tables = self.write();
        tables.check_level(draft.company_id, draft.level_id)?;
        let id = tables.contributions.next_id();
        let record = tables.contributions.put(draft.into_record(id, submitted_at));
        tables.join(&record)
    }

    /// Contributions matching the filter, most recent first.
    pub fn contributions(
        &self,
        filter: &ContributionFilter,
    ) -> TrackerResult<Vec<ContributionRow>> {
        let tables = self.read();
        let rows = tables.rows(tables.contributions.values())?;
        Ok(filter.apply(rows))
    }

    /// Every contribution of one company, most recent first.
    pub fn company_contributions(&self, company_id: u64) -> TrackerResult<Vec<ContributionRow>> {
        let tables = self.read();
        tables.rows(
            tables
                .contributions
                .values()
                .filter(|c| c.company_id == company_id),
        )
    }

    /// One contribution.
    pub fn contribution(&self, id: u64) -> TrackerResult<ContributionRow> {
        let tables = self.read();
        let contribution = tables.contributions.get(id)?;
        tables.join(contribution)
    }

    /// Replaces a contribution's fields, keeping its submission time.
    pub fn update_contribution(
        &self,
        id: u64,
        draft: NewContribution,
    ) -> TrackerResult<ContributionRow> {
        self.modify_contribution(id, |_| draft)
    }

    /// Rewrites a contribution's fields from its current values, keeping its
    /// submission time.
    pub fn modify_contribution<F>(&self, id: u64, change: F) -> TrackerResult<ContributionRow>
    where
        F: FnOnce(NewContribution) -> NewContribution,
    {
        let mut tables = self.write();
        let current = tables.contributions.get(id)?;
        let submitted_at = current.datetime_of_contribution;
        let draft = change(NewContribution::from(current));
        draft.validate()?;
        tables.check_level(draft.company_id, draft.level_id)?;
        let record = tables.contributions.put(draft.into_record(id, submitted_at));
        tables.join(&record)
    }

    /// Deletes a contribution.
    pub fn delete_contribution(&self, id: u64) -> TrackerResult<RecordCounts> {
        self.write().contributions.remove(id)?;
        Ok(RecordCounts {
            contributions: 1,
            ..RecordCounts::default()
        })
    }

    // Certificates

    /// Creates a certificate.
    pub fn create_certificate(&self, draft: NewCertificate) -> TrackerResult<Certificate> {
        draft.validate()?;
        let mut tables = self.write();
        tables
            .compensations
            .resolve("compensation", draft.compensation_id)?;
        let id = tables.certificates.next_id();
        Ok(tables.certificates.put(draft.into_record(id)))
    }

    /// Certificates in scope, in id order.
    pub fn certificates(&self, scope: CompensationScope) -> Vec<Certificate> {
        self.read()
            .certificates
            .values()
            .filter(|c| scope.includes(c.compensation_id))
            .cloned()
            .collect()
    }

    /// One certificate.
    pub fn certificate(&self, id: u64) -> TrackerResult<Certificate> {
        self.read().certificates.get(id).cloned()
    }

    /// Replaces a certificate's fields.
    pub fn update_certificate(&self, id: u64, draft: NewCertificate) -> TrackerResult<Certificate> {
        self.modify_certificate(id, |_| draft)
    }

    /// Rewrites a certificate's fields from its current values.
    pub fn modify_certificate<F>(&self, id: u64, change: F) -> TrackerResult<Certificate>
    where
        F: FnOnce(NewCertificate) -> NewCertificate,
    {
        let mut tables = self.write();
        let draft = change(NewCertificate::from(tables.certificates.get(id)?));
        draft.validate()?;
        tables
            .compensations
            .resolve("compensation", draft.compensation_id)?;
        Ok(tables.certificates.put(draft.into_record(id)))
    }

    /// Deletes a certificate.
    pub fn delete_certificate(&self, id: u64) -> TrackerResult<RecordCounts> {
        self.write().certificates.remove(id)?;
        Ok(RecordCounts {
            certificates: 1,
            ..RecordCounts::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicLevel, Gender, parse_timestamp};
    use rust_decimal::Decimal;

    fn new_company(short_name: &str) -> NewCompany {
        NewCompany {
            name: format!("{short_name} Inc"),
            short_name: short_name.to_string(),
            location: "Manila".to_string(),
        }
    }

    fn new_contribution(company_id: u64, level_id: u64, salary: i64) -> NewContribution {
        NewContribution {
            job_title: "Software Engineer".to_string(),
            years_of_experience: Some(2),
            years_at_company: None,
            salary: Some(Decimal::from(salary)),
            bonus: None,
            gender: Gender::Female,
            highest_academic_level_attained: AcademicLevel::Bachelors,
            company_id,
            level_id,
        }
    }

    /// A store with one company, two levels, a band with a certificate and
    /// two contributions.
    fn populated() -> (RecordStore, Company) {
        let store = RecordStore::new();
        let company = store.create_company(new_company("Acme")).unwrap();
        let junior = store
            .create_level(NewLevel {
                name: "Junior".to_string(),
                order: 0,
                company_id: company.id,
            })
            .unwrap();
        let senior = store
            .create_level(NewLevel {
                name: "Senior".to_string(),
                order: 1,
                company_id: company.id,
            })
            .unwrap();
        let band = store
            .create_compensation(NewCompensation {
                salary: Decimal::from(90_000),
                company_id: company.id,
                level_id: senior.id,
            })
            .unwrap();
        store
            .create_certificate(NewCertificate {
                certificate_name: "PMP".to_string(),
                compensation_id: band.id,
            })
            .unwrap();
        store
            .create_contribution(new_contribution(company.id, junior.id, 50_000))
            .unwrap();
        store
            .create_contribution(new_contribution(company.id, senior.id, 95_000))
            .unwrap();
        (store, company)
    }

    #[test]
    fn test_level_requires_existing_company() {
        let store = RecordStore::new();
        let result = store.create_level(NewLevel {
            name: "L1".to_string(),
            order: 0,
            company_id: 99,
        });
        assert!(matches!(
            result,
            Err(TrackerError::InvalidReference {
                field: "company",
                id: 99,
                ..
            })
        ));
        assert_eq!(store.counts().levels, 0);
    }

    #[test]
    fn test_contribution_level_must_belong_to_company() {
        let (store, _) = populated();
        let other = store.create_company(new_company("Globex")).unwrap();

        // Level 1 belongs to Acme, not Globex.
        let result = store.create_contribution(new_contribution(other.id, 1, 10));
        assert!(matches!(result, Err(TrackerError::Validation { .. })));
        assert_eq!(store.counts().contributions, 2);
    }

    #[test]
    fn test_contribution_with_unknown_level_rejected() {
        let (store, company) = populated();
        let result = store.create_contribution(new_contribution(company.id, 42, 10));
        assert!(matches!(
            result,
            Err(TrackerError::InvalidReference { field: "level", .. })
        ));
    }

    #[test]
    fn test_delete_company_cascades() {
        let (store, company) = populated();
        let survivor = store.create_company(new_company("Globex")).unwrap();

        let removed = store.delete_company(company.id).unwrap();

        assert_eq!(
            removed,
            RecordCounts {
                companies: 1,
                levels: 2,
                compensations: 1,
                contributions: 2,
                certificates: 1,
            }
        );
        assert_eq!(
            store.counts(),
            RecordCounts {
                companies: 1,
                ..RecordCounts::default()
            }
        );
        assert!(store.company(survivor.id).is_ok());
        assert!(matches!(
            store.company(company.id),
            Err(TrackerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_level_cascades_to_its_records_only() {
        let (store, _) = populated();

        // Level 2 ("Senior") has the band, its certificate and one contribution.
        let removed = store.delete_level(2).unwrap();

        assert_eq!(removed.compensations, 1);
        assert_eq!(removed.certificates, 1);
        assert_eq!(removed.contributions, 1);
        let counts = store.counts();
        assert_eq!(counts.levels, 1);
        assert_eq!(counts.contributions, 1);
    }

    #[test]
    fn test_delete_compensation_cascades_to_certificates() {
        let (store, _) = populated();
        let removed = store.delete_compensation(1).unwrap();
        assert_eq!(removed.certificates, 1);
        assert!(store.certificates(CompensationScope::default()).is_empty());
    }

    #[test]
    fn test_delete_missing_record_is_not_found() {
        let store = RecordStore::new();
        assert!(matches!(
            store.delete_company(1),
            Err(TrackerError::NotFound {
                entity: "company",
                id: 1
            })
        ));
    }

    #[test]
    fn test_contributions_most_recent_first() {
        let (store, company) = populated();
        let early = parse_timestamp("01/01/2020 00:00:00").unwrap();
        let late = parse_timestamp("01/01/2030 00:00:00").unwrap();
        let old = store
            .insert_contribution(new_contribution(company.id, 1, 1), early)
            .unwrap();
        let future = store
            .insert_contribution(new_contribution(company.id, 1, 2), late)
            .unwrap();

        let rows = store.contributions(&ContributionFilter::default()).unwrap();
        assert_eq!(rows.first().unwrap().contribution.id, future.contribution.id);
        assert_eq!(rows.last().unwrap().contribution.id, old.contribution.id);
    }

    #[test]
    fn test_update_contribution_keeps_timestamp() {
        let (store, company) = populated();
        let at = parse_timestamp("03/04/2022 05:06:07").unwrap();
        let row = store
            .insert_contribution(new_contribution(company.id, 1, 10), at)
            .unwrap();

        let updated = store
            .update_contribution(row.contribution.id, new_contribution(company.id, 2, 20))
            .unwrap();

        assert_eq!(updated.contribution.datetime_of_contribution, at);
        assert_eq!(updated.contribution.salary, Some(Decimal::from(20)));
        assert_eq!(updated.level_name, "Senior");
    }

    #[test]
    fn test_modify_changes_only_given_fields() {
        let (store, company) = populated();
        let updated = store
            .modify_company(company.id, |mut draft| {
                draft.location = "Cebu".to_string();
                draft
            })
            .unwrap();
        assert_eq!(updated.location, "Cebu");
        assert_eq!(updated.short_name, "Acme");
    }

    #[test]
    fn test_modify_rejects_invalid_result() {
        let (store, company) = populated();
        let result = store.modify_company(company.id, |mut draft| {
            draft.name = " ".to_string();
            draft
        });
        assert!(matches!(result, Err(TrackerError::Validation { .. })));
        assert_eq!(store.company(company.id).unwrap().name, "Acme Inc");
    }

    #[test]
    fn test_level_with_dependents_cannot_change_company() {
        let (store, _) = populated();
        let other = store.create_company(new_company("Globex")).unwrap();
        let result = store.update_level(
            1,
            NewLevel {
                name: "Junior".to_string(),
                order: 0,
                company_id: other.id,
            },
        );
        assert!(matches!(result, Err(TrackerError::Validation { .. })));
    }

    #[test]
    fn test_contribution_counts_per_company() {
        let (store, company) = populated();
        store.create_company(new_company("Globex")).unwrap();
        let counts = store.contribution_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0.id, company.id);
        assert_eq!(counts[0].1, 2);
        assert_eq!(counts[1].1, 0);
    }

    #[test]
    fn test_levels_sorted_by_order_within_company() {
        let store = RecordStore::new();
        let company = store.create_company(new_company("Acme")).unwrap();
        for (name, order) in [("Staff", 2), ("Intern", 0), ("Mid", 1)] {
            store
                .create_level(NewLevel {
                    name: name.to_string(),
                    order,
                    company_id: company.id,
                })
                .unwrap();
        }
        let names: Vec<String> = store
            .levels(CompanyScope::default())
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Intern", "Mid", "Staff"]);
    }
}
