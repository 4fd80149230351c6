use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume document, owned by exactly one user. Section contents live
/// in JSONB columns; the wire representation is camelCase to match the web
/// client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub profile_info: Json<ProfileInfo>,
    pub contact_info: Json<ContactInfo>,
    pub work_experience: Json<Vec<WorkExperience>>,
    pub education: Json<Vec<Education>>,
    pub skills: Json<Vec<Skill>>,
    pub projects: Json<Vec<Project>>,
    pub certifications: Json<Vec<Certification>>,
    pub languages: Json<Vec<Language>>,
    pub interests: Json<Vec<String>>,
    pub thumbnail_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInfo {
    pub profile_img: Option<String>,
    pub preview_url: String,
    pub full_name: String,
    pub designation: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

/// Skill proficiency; `progress` is a 0-100 percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub github: String,
    pub live_demo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub progress: u8,
}

/// Partial update payload for PUT /api/resumes/:id.
///
/// Every field present in the body replaces the stored field wholesale; a
/// partial `workExperience` array overwrites the entire array, never
/// individual entries. Identity and timestamp columns are not client-assignable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeUpdate {
    pub title: Option<String>,
    pub profile_info: Option<ProfileInfo>,
    pub contact_info: Option<ContactInfo>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certification>>,
    pub languages: Option<Vec<Language>>,
    pub interests: Option<Vec<String>>,
    pub thumbnail_link: Option<String>,
}
