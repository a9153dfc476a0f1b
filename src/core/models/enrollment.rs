//! Enrollment of a candidate into a batch

use super::{Batch, Candidate, Endpoint, Entity, null_as_default};
use crate::utils::error::Result;
use crate::utils::validation::FieldValidator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Enrollment {
    pub enrollment_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub batch_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enrollment_date: String,
    pub is_active: bool,
    #[serde(skip)]
    pub is_delete_loader: bool,
}

impl Default for Enrollment {
    fn default() -> Self {
        Self {
            enrollment_id: 0,
            full_name: String::new(),
            mobile_number: String::new(),
            batch_id: None,
            candidate_id: None,
            batch_name: String::new(),
            enrollment_date: String::new(),
            is_active: true,
            is_delete_loader: false,
        }
    }
}

impl Enrollment {
    /// Fill `batch_id`/`candidate_id` from the lookup lists
    ///
    /// Listings only carry the batch and candidate names, so an edit draft
    /// must map them back to identifiers before it can be submitted.
    pub fn resolve_references(&mut self, batches: &[Batch], candidates: &[Candidate]) {
        if self.batch_id.is_none() {
            self.batch_id = batches
                .iter()
                .find(|b| b.batch_name == self.batch_name)
                .map(|b| b.batch_id);
        }
        if self.candidate_id.is_none() {
            self.candidate_id = candidates
                .iter()
                .find(|c| c.full_name == self.full_name)
                .map(|c| c.candidate_id);
        }
    }
}

impl Entity for Enrollment {
    const LABEL: &'static str = "Enrollment";
    const ENDPOINT: Endpoint = Endpoint::with_list_path("BatchEnrollments", "/GetAllEnrollment");

    fn id(&self) -> i64 {
        self.enrollment_id
    }

    fn set_id(&mut self, id: i64) {
        self.enrollment_id = id;
    }

    fn is_delete_loader(&self) -> bool {
        self.is_delete_loader
    }

    fn set_delete_loader(&mut self, value: bool) {
        self.is_delete_loader = value;
    }

    fn validate(&self) -> Result<()> {
        FieldValidator::new()
            .required_id("Batch", self.batch_id)
            .required_id("Candidate", self.candidate_id)
            .date("Enrollment date", &self.enrollment_date)
            .finish()
    }

    fn summary(&self) -> String {
        format!(
            "{} in {} since {}{}",
            self.full_name,
            self.batch_name,
            self.enrollment_date,
            if self.is_active { "" } else { " [inactive]" }
        )
    }
}
