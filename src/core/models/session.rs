//! Recorded training session

use super::{Batch, Endpoint, Entity, null_as_default};
use crate::utils::error::Result;
use crate::utils::validation::{FieldValidator, parse_date};
use crate::utils::today_iso;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub session_id: i64,
    pub batch_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub topic_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub topic_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub youtube_video_id: String,
    pub duration_in_minutes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub session_date: String,
    pub display_order: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(skip)]
    pub is_delete_loader: bool,
}

impl Session {
    /// Map the listed batch name back to its identifier
    pub fn resolve_batch(&mut self, batches: &[Batch]) {
        if self.batch_id > 0 {
            return;
        }
        if let Some(name) = &self.batch_name {
            if let Some(batch) = batches.iter().find(|b| &b.batch_name == name) {
                self.batch_id = batch.batch_id;
            }
        }
    }
}

impl Entity for Session {
    const LABEL: &'static str = "Session";
    const ENDPOINT: Endpoint = Endpoint::new("BatchSessions");

    fn id(&self) -> i64 {
        self.session_id
    }

    fn set_id(&mut self, id: i64) {
        self.session_id = id;
    }

    fn is_delete_loader(&self) -> bool {
        self.is_delete_loader
    }

    fn set_delete_loader(&mut self, value: bool) {
        self.is_delete_loader = value;
    }

    fn validate(&self) -> Result<()> {
        FieldValidator::new()
            .required_id("Batch", Some(self.batch_id))
            .required("Topic name", &self.topic_name)
            .max_len("Topic name", &self.topic_name, 100)
            .max_len("Topic description", &self.topic_description, 500)
            .required("YouTube video id", &self.youtube_video_id)
            .max_len("YouTube video id", &self.youtube_video_id, 50)
            .min_value("Duration in minutes", self.duration_in_minutes, 1)
            .date("Session date", &self.session_date)
            .min_value("Display order", self.display_order, 1)
            .finish()
    }

    /// Dates go out as `YYYY-MM-DD`; timestamps are stamped with today
    fn prepare_for_submit(&mut self) {
        if let Some(date) = parse_date(&self.session_date) {
            self.session_date = date.format("%Y-%m-%d").to_string();
        }
        let today = today_iso();
        self.created_at = today.clone();
        self.updated_at = today;
    }

    fn summary(&self) -> String {
        format!(
            "#{} {} ({} min, {}) youtu.be/{}",
            self.display_order,
            self.topic_name,
            self.duration_in_minutes,
            self.session_date,
            self.youtube_video_id
        )
    }
}
