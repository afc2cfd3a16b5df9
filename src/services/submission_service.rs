use bson::DateTime;
use thiserror::Error;

use crate::db::store::{StoreError, TravelStore};
use crate::models::submission::CitySubmission;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("City name is required")]
    MissingName,
    #[error("Min_no_of_days ({min}) cannot exceed Max_no_of_days ({max})")]
    InvertedStay { min: u32, max: u32 },
    #[error("{0} cannot be negative")]
    NegativeBudget(&'static str),
}

pub fn validate(submission: &CitySubmission) -> Result<(), SubmissionError> {
    if submission.name.trim().is_empty() {
        return Err(SubmissionError::MissingName);
    }
    if let (Some(min), Some(max)) = (submission.min_days, submission.max_days) {
        if min > max {
            return Err(SubmissionError::InvertedStay { min, max });
        }
    }
    let budgets = [
        ("Low_Budget_Per_Day", submission.low_budget_per_day),
        ("Medium_Budget_Per_Day", submission.medium_budget_per_day),
        ("High_Budget_Per_Day", submission.high_budget_per_day),
    ];
    for (field, value) in budgets {
        if value.is_some_and(|v| v < 0.0) {
            return Err(SubmissionError::NegativeBudget(field));
        }
    }
    Ok(())
}

/// Store a validated submission and return it as stored.
pub async fn submit_city(
    store: &dyn TravelStore,
    mut submission: CitySubmission,
) -> Result<CitySubmission, StoreError> {
    submission.id = None;
    submission.name = submission.name.trim().to_string();
    submission.created_at = Some(DateTime::now());

    let id = store.insert_submission(&submission).await?;
    log::info!("Stored city submission {} for {}", id, submission.name);

    submission.id = Some(id);
    Ok(submission)
}
