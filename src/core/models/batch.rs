//! Training batch

use super::{Endpoint, Entity, null_as_default};
use crate::utils::error::Result;
use crate::utils::validation::FieldValidator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Batch {
    pub batch_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub batch_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(skip)]
    pub is_delete_loader: bool,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            batch_id: 0,
            batch_name: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
            is_delete_loader: false,
        }
    }
}

impl Entity for Batch {
    const LABEL: &'static str = "Batch";
    const ENDPOINT: Endpoint = Endpoint::new("Batches");

    fn id(&self) -> i64 {
        self.batch_id
    }

    fn set_id(&mut self, id: i64) {
        self.batch_id = id;
    }

    fn is_delete_loader(&self) -> bool {
        self.is_delete_loader
    }

    fn set_delete_loader(&mut self, value: bool) {
        self.is_delete_loader = value;
    }

    fn validate(&self) -> Result<()> {
        FieldValidator::new()
            .required("Batch name", &self.batch_name)
            .required("Description", &self.description)
            .date("Start date", &self.start_date)
            .date("End date", &self.end_date)
            .finish()
    }

    fn summary(&self) -> String {
        format!(
            "{} ({} to {}){}",
            self.batch_name,
            self.start_date,
            self.end_date,
            if self.is_active { "" } else { " [inactive]" }
        )
    }
}
