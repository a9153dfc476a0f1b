//! Test fixtures and data factories
//!
//! Every factory produces an entity that passes draft validation.

use batchdesk::{Batch, Candidate, Enrollment, Session};
use serde_json::{Value, json};

pub struct BatchFactory;

impl BatchFactory {
    pub fn create(id: i64, name: &str) -> Batch {
        Batch {
            batch_id: id,
            batch_name: name.to_string(),
            description: format!("{} cohort", name),
            start_date: "2026-01-05".to_string(),
            end_date: "2026-04-05".to_string(),
            ..Batch::default()
        }
    }

    /// `count` batches with ids `1..=count`
    pub fn many(count: i64) -> Vec<Batch> {
        (1..=count)
            .map(|id| Self::create(id, &format!("Batch {}", id)))
            .collect()
    }

    /// Wire form as the server sends it
    pub fn json(id: i64, name: &str) -> Value {
        json!({
            "batchId": id,
            "batchName": name,
            "description": format!("{} cohort", name),
            "startDate": "2026-01-05T00:00:00",
            "endDate": "2026-04-05T00:00:00",
            "isActive": true,
            "createdAt": "2025-12-01T10:00:00",
            "updatedAt": "2025-12-01T10:00:00"
        })
    }
}

pub struct CandidateFactory;

impl CandidateFactory {
    pub fn create(id: i64, name: &str) -> Candidate {
        Candidate {
            candidate_id: id,
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            mobile_number: "9876543210".to_string(),
            password: "secret1".to_string(),
            role: "Student".to_string(),
            ..Candidate::default()
        }
    }

    pub fn json(id: i64, name: &str) -> Value {
        json!({
            "candidateId": id,
            "fullName": name,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "mobileNumber": "9876543210",
            "password": "secret1",
            "role": "Student",
            "isActive": true
        })
    }
}

pub struct EnrollmentFactory;

impl EnrollmentFactory {
    /// Listing row: names only, no reference ids
    pub fn json(id: i64, full_name: &str, batch_name: &str) -> Value {
        json!({
            "enrollmentId": id,
            "fullName": full_name,
            "mobileNumber": "9876543210",
            "batchName": batch_name,
            "enrollmentDate": "2026-01-10T00:00:00",
            "isActive": true
        })
    }

    pub fn create(batch_id: i64, candidate_id: i64) -> Enrollment {
        Enrollment {
            batch_id: Some(batch_id),
            candidate_id: Some(candidate_id),
            enrollment_date: "2026-01-10".to_string(),
            ..Enrollment::default()
        }
    }
}

pub struct SessionFactory;

impl SessionFactory {
    pub fn create(id: i64, batch_id: i64, topic: &str) -> Session {
        Session {
            session_id: id,
            batch_id,
            topic_name: topic.to_string(),
            topic_description: format!("All about {}", topic),
            youtube_video_id: "dQw4w9WgXcQ".to_string(),
            duration_in_minutes: 60,
            session_date: "2026-02-01".to_string(),
            display_order: 1,
            ..Session::default()
        }
    }

    pub fn json(id: i64, batch_name: &str, topic: &str) -> Value {
        json!({
            "sessionId": id,
            "batchId": 0,
            "batchName": batch_name,
            "topicName": topic,
            "topicDescription": format!("All about {}", topic),
            "youtubeVideoId": "dQw4w9WgXcQ",
            "durationInMinutes": 60,
            "sessionDate": "2026-02-01T00:00:00",
            "displayOrder": 1
        })
    }
}
