//! services/client/src/adapters/seeds.rs
//!
//! Demo records returned by the simulated services. Project ids are fixed so
//! the seeded uploads can point at a seeded project.

use chrono::{Duration, NaiveDate, Utc};
use project_manager_core::domain::{ChatSession, Message, Project, Sender, UploadRecord};
use uuid::Uuid;

pub const CORPORATE_WEBSITE_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0001);
pub const SALES_SYSTEM_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0002);
pub const MOBILE_APP_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0003);

pub const WELCOME_MESSAGE: &str = "Hello! How can I help you today?";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn chat_sessions() -> Vec<ChatSession> {
    let now = Utc::now();
    vec![
        ChatSession {
            id: Uuid::new_v4(),
            created_at: now,
            preview: "How to create a project...".to_string(),
        },
        ChatSession {
            id: Uuid::new_v4(),
            created_at: now - Duration::days(1),
            preview: "Uploading files...".to_string(),
        },
    ]
}

pub fn welcome(session_id: Uuid) -> Vec<Message> {
    vec![Message {
        id: Uuid::new_v4(),
        session_id,
        text: WELCOME_MESSAGE.to_string(),
        sender: Sender::Bot,
        sent_at: Utc::now(),
    }]
}

pub fn projects(owner_id: Uuid) -> Vec<Project> {
    vec![
        Project {
            id: CORPORATE_WEBSITE_ID,
            name: "Corporate Website".to_string(),
            requested_date: date(2024, 1, 15),
            due_date: date(2024, 2, 15),
            owner_id,
        },
        Project {
            id: SALES_SYSTEM_ID,
            name: "Sales System".to_string(),
            requested_date: date(2024, 1, 20),
            due_date: date(2024, 3, 1),
            owner_id,
        },
        Project {
            id: MOBILE_APP_ID,
            name: "Mobile App".to_string(),
            requested_date: date(2024, 2, 1),
            due_date: date(2024, 4, 30),
            owner_id,
        },
    ]
}

pub fn uploads() -> Vec<UploadRecord> {
    let now = Utc::now();
    vec![
        UploadRecord {
            id: Uuid::new_v4(),
            file_name: "proposal.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size_bytes: 245_760,
            project_id: CORPORATE_WEBSITE_ID,
            uploaded_at: now,
        },
        UploadRecord {
            id: Uuid::new_v4(),
            file_name: "layout.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size_bytes: 1_048_576,
            project_id: CORPORATE_WEBSITE_ID,
            uploaded_at: now - Duration::days(1),
        },
    ]
}
