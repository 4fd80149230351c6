//! Postgres access for resume documents.
//!
//! Every lookup and mutation is scoped to `(id, owner_id)` jointly, never to
//! `id` alone, so one user can never observe or touch another user's records.
//! "Not found" is a normal result (`None` / `false`), distinct from a query
//! failure.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;
use crate::resumes::template::default_resume;

/// Returns all resumes owned by `owner_id`, most recently updated first.
pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE owner_id = $1 ORDER BY updated_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Inserts a new resume seeded from the default template.
pub async fn create_with_defaults(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
) -> Result<ResumeRow, sqlx::Error> {
    let resume = default_resume(owner_id, title);
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, owner_id, title, profile_info, contact_info, work_experience,
             education, skills, projects, certifications, languages, interests,
             thumbnail_link)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(resume.id)
    .bind(resume.owner_id)
    .bind(&resume.title)
    .bind(&resume.profile_info)
    .bind(&resume.contact_info)
    .bind(&resume.work_experience)
    .bind(&resume.education)
    .bind(&resume.skills)
    .bind(&resume.projects)
    .bind(&resume.certifications)
    .bind(&resume.languages)
    .bind(&resume.interests)
    .bind(&resume.thumbnail_link)
    .fetch_one(pool)
    .await
}

/// Fetches a single resume, scoped to its owner.
pub async fn find_by_id_and_owner(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

/// Persists the full current state of a resume and refreshes `updated_at`.
pub async fn save(pool: &PgPool, resume: &ResumeRow) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET title = $3,
            profile_info = $4,
            contact_info = $5,
            work_experience = $6,
            education = $7,
            skills = $8,
            projects = $9,
            certifications = $10,
            languages = $11,
            interests = $12,
            thumbnail_link = $13,
            updated_at = now()
        WHERE id = $1 AND owner_id = $2
        RETURNING *
        "#,
    )
    .bind(resume.id)
    .bind(resume.owner_id)
    .bind(&resume.title)
    .bind(&resume.profile_info)
    .bind(&resume.contact_info)
    .bind(&resume.work_experience)
    .bind(&resume.education)
    .bind(&resume.skills)
    .bind(&resume.projects)
    .bind(&resume.certifications)
    .bind(&resume.languages)
    .bind(&resume.interests)
    .bind(&resume.thumbnail_link)
    .fetch_one(pool)
    .await
}

/// Deletes a resume scoped to its owner. Returns whether a row was removed.
pub async fn delete_by_id_and_owner(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
