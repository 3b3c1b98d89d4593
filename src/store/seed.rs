//! Loading seed data into a store.

use std::collections::HashMap;

use tracing::info;

use crate::config::{SeedCompany, SeedData};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    NewCertificate, NewCompany, NewCompensation, NewContribution, NewLevel, current_timestamp,
};

use super::{RecordCounts, RecordStore};

impl RecordStore {
    /// Inserts every seeded record and returns how many of each were added.
    ///
    /// Ids follow seed order: per company, its levels first, then its
    /// compensation bands with their certificates, then its contributions.
    /// Seeded records pass the same validation as API input.
    pub fn seed(&self, seed: &SeedData) -> TrackerResult<RecordCounts> {
        let mut added = RecordCounts::default();
        for company in &seed.companies {
            self.seed_company(company, &mut added)?;
        }
        info!(
            companies = added.companies,
            levels = added.levels,
            compensations = added.compensations,
            contributions = added.contributions,
            certificates = added.certificates,
            "Seed data loaded"
        );
        Ok(added)
    }

    fn seed_company(&self, seed: &SeedCompany, added: &mut RecordCounts) -> TrackerResult<()> {
        let company = self.create_company(NewCompany {
            name: seed.name.clone(),
            short_name: seed.short_name.clone(),
            location: seed.location.clone(),
        })?;
        added.companies += 1;

        let mut levels = HashMap::new();
        for level in &seed.levels {
            let created = self.create_level(NewLevel {
                name: level.name.clone(),
                order: level.order,
                company_id: company.id,
            })?;
            levels.insert(level.name.as_str(), created.id);
            added.levels += 1;
        }
        let level_id = |name: &str| {
            levels
                .get(name)
                .copied()
                .ok_or_else(|| TrackerError::ConfigParseError {
                    path: "seed.yaml".to_string(),
                    message: format!(
                        "company '{}' has no level named '{name}'",
                        seed.short_name
                    ),
                })
        };

        for band in &seed.compensations {
            let compensation = self.create_compensation(NewCompensation {
                salary: band.salary,
                company_id: company.id,
                level_id: level_id(&band.level)?,
            })?;
            added.compensations += 1;
            for certificate_name in &band.certificates {
                self.create_certificate(NewCertificate {
                    certificate_name: certificate_name.clone(),
                    compensation_id: compensation.id,
                })?;
                added.certificates += 1;
            }
        }

        for contribution in &seed.contributions {
            let draft = NewContribution {
                job_title: contribution.job_title.clone(),
                years_of_experience: contribution.years_of_experience,
                years_at_company: contribution.years_at_company,
                salary: contribution.salary,
                bonus: contribution.bonus,
                gender: contribution.gender,
                highest_academic_level_attained: contribution.highest_academic_level_attained,
                company_id: company.id,
                level_id: level_id(&contribution.level)?,
            };
            let submitted_at = contribution
                .datetime_of_contribution
                .unwrap_or_else(current_timestamp);
            self.insert_contribution(draft, submitted_at)?;
            added.contributions += 1;
        }
        Ok(())
    }
}
