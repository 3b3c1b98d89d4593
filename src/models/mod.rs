//! Core data models for the salary tracker.
//!
//! This module contains the records held by the store, the drafts used to
//! create and update them, and the submission timestamp format.

mod choices;
mod company;
mod compensation;
mod contribution;
mod timestamp;
mod validation;

pub use choices::{AcademicLevel, Gender};
pub use company::{Company, Level, NewCompany, NewLevel};
pub use compensation::{Certificate, Compensation, NewCertificate, NewCompensation};
pub use contribution::{Contribution, ContributionRow, NewContribution};
pub use timestamp::{
    TIMESTAMP_FORMAT, format_timestamp, now as current_timestamp, parse_timestamp,
    wire as timestamp_wire, wire_option as optional_timestamp_wire,
};
pub use validation::{MONEY_DECIMAL_PLACES, MONEY_MAX_DIGITS};
