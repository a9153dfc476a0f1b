//! Candidate enrolled in batches

use super::{Endpoint, Entity, null_as_default};
use crate::utils::error::Result;
use crate::utils::validation::FieldValidator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub candidate_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(skip)]
    pub is_delete_loader: bool,
}

impl Entity for Candidate {
    const LABEL: &'static str = "Candidate";
    const ENDPOINT: Endpoint = Endpoint::new("Candidates");
    const RESETS_PAGE_ON_VIEW_TOGGLE: bool = false;

    fn id(&self) -> i64 {
        self.candidate_id
    }

    fn set_id(&mut self, id: i64) {
        self.candidate_id = id;
    }

    fn is_delete_loader(&self) -> bool {
        self.is_delete_loader
    }

    fn set_delete_loader(&mut self, value: bool) {
        self.is_delete_loader = value;
    }

    fn validate(&self) -> Result<()> {
        FieldValidator::new()
            .required("Full name", &self.full_name)
            .email("Email", &self.email)
            .exact_len("Mobile number", &self.mobile_number, 10)
            .min_len("Password", &self.password, 6)
            .required("Role", &self.role)
            .finish()
    }

    fn summary(&self) -> String {
        format!(
            "{} <{}> {} [{}]",
            self.full_name, self.email, self.mobile_number, self.role
        )
    }
}
