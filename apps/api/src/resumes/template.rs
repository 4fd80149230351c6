//! Canonical default resume shape and the shallow-merge rule for updates.

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::resume::{
    Certification, ContactInfo, Education, Language, ProfileInfo, Project, ResumeRow,
    ResumeUpdate, Skill, WorkExperience,
};

/// Builds the default template a new resume starts from: every section
/// present, each array section seeded with exactly one empty-shaped entry so
/// the editor has a row to fill in.
pub fn default_resume(owner_id: Uuid, title: &str) -> ResumeRow {
    let now = Utc::now();
    ResumeRow {
        id: Uuid::new_v4(),
        owner_id,
        title: title.to_string(),
        profile_info: Json(ProfileInfo::default()),
        contact_info: Json(ContactInfo::default()),
        work_experience: Json(vec![WorkExperience::default()]),
        education: Json(vec![Education::default()]),
        skills: Json(vec![Skill::default()]),
        projects: Json(vec![Project::default()]),
        certifications: Json(vec![Certification::default()]),
        languages: Json(vec![Language::default()]),
        interests: Json(vec![String::new()]),
        thumbnail_link: None,
        created_at: now,
        updated_at: now,
    }
}

/// Shallow-merges a partial update onto a stored resume.
///
/// Each field present in the update replaces the stored field in full;
/// absent fields are left untouched. Arrays are replaced wholesale, never
/// merged element-by-element.
pub fn apply_update(resume: &mut ResumeRow, update: ResumeUpdate) {
    if let Some(title) = update.title {
        resume.title = title;
    }
    if let Some(profile_info) = update.profile_info {
        resume.profile_info = Json(profile_info);
    }
    if let Some(contact_info) = update.contact_info {
        resume.contact_info = Json(contact_info);
    }
    if let Some(work_experience) = update.work_experience {
        resume.work_experience = Json(work_experience);
    }
    if let Some(education) = update.education {
        resume.education = Json(education);
    }
    if let Some(skills) = update.skills {
        resume.skills = Json(skills);
    }
    if let Some(projects) = update.projects {
        resume.projects = Json(projects);
    }
    if let Some(certifications) = update.certifications {
        resume.certifications = Json(certifications);
    }
    if let Some(languages) = update.languages {
        resume.languages = Json(languages);
    }
    if let Some(interests) = update.interests {
        resume.interests = Json(interests);
    }
    if let Some(thumbnail_link) = update.thumbnail_link {
        resume.thumbnail_link = Some(thumbnail_link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skills() -> Vec<Skill> {
        vec![
            Skill {
                name: "Rust".to_string(),
                progress: 90,
            },
            Skill {
                name: "SQL".to_string(),
                progress: 70,
            },
        ]
    }

    #[test]
    fn test_default_shape_has_one_empty_entry_per_section() {
        let owner = Uuid::new_v4();
        let resume = default_resume(owner, "My Resume");

        assert_eq!(resume.owner_id, owner);
        assert_eq!(resume.title, "My Resume");
        assert_eq!(resume.work_experience.len(), 1);
        assert_eq!(resume.work_experience[0], WorkExperience::default());
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.skills.len(), 1);
        assert_eq!(resume.skills[0].progress, 0);
        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.certifications.len(), 1);
        assert_eq!(resume.languages.len(), 1);
        assert_eq!(resume.interests.as_slice(), &[String::new()]);
        assert_eq!(resume.profile_info.profile_img, None);
        assert!(resume.profile_info.summary.is_empty());
        assert!(resume.contact_info.email.is_empty());
        assert_eq!(resume.thumbnail_link, None);
    }

    #[test]
    fn test_merge_replaces_only_present_fields() {
        let mut resume = default_resume(Uuid::new_v4(), "Original");
        let update = ResumeUpdate {
            skills: Some(sample_skills()),
            ..Default::default()
        };

        apply_update(&mut resume, update);

        assert_eq!(resume.skills.0, sample_skills());
        // Untouched fields keep their defaults, projects included.
        assert_eq!(resume.title, "Original");
        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.projects[0], Project::default());
    }

    #[test]
    fn test_merge_replaces_arrays_wholesale() {
        let mut resume = default_resume(Uuid::new_v4(), "Original");
        resume.skills = Json(sample_skills());

        // A single-element update must not be element-merged with the two
        // existing entries.
        let replacement = vec![Skill {
            name: "Go".to_string(),
            progress: 40,
        }];
        apply_update(
            &mut resume,
            ResumeUpdate {
                skills: Some(replacement.clone()),
                ..Default::default()
            },
        );

        assert_eq!(resume.skills.0, replacement);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let update = ResumeUpdate {
            title: Some("Updated".to_string()),
            skills: Some(sample_skills()),
            contact_info: Some(ContactInfo {
                email: "a@b.c".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut once = default_resume(Uuid::new_v4(), "Original");
        apply_update(&mut once, update.clone());

        let mut twice = once.clone();
        apply_update(&mut twice, update);

        assert_eq!(once.title, twice.title);
        assert_eq!(once.skills.0, twice.skills.0);
        assert_eq!(once.contact_info.0, twice.contact_info.0);
        assert_eq!(once.projects.0, twice.projects.0);
    }

    #[test]
    fn test_merge_never_touches_identity_fields() {
        let mut resume = default_resume(Uuid::new_v4(), "Original");
        let id = resume.id;
        let owner = resume.owner_id;

        apply_update(
            &mut resume,
            ResumeUpdate {
                title: Some("Updated".to_string()),
                thumbnail_link: Some("thumb.png".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(resume.id, id);
        assert_eq!(resume.owner_id, owner);
        assert_eq!(resume.thumbnail_link.as_deref(), Some("thumb.png"));
    }
}
