use super::repository;
use contracts::domain::a007_course::aggregate::CourseId;
use contracts::domain::a008_lesson::aggregate::{Lesson, LessonDto};
use uuid::Uuid;

/// Resolve the course reference; the course must exist at write time
async fn resolve_course(id: &str) -> anyhow::Result<CourseId> {
    let uuid = Uuid::parse_str(id).map_err(|_| anyhow::anyhow!("Invalid course ID"))?;
    crate::domain::a007_course::repository::get_by_id(uuid)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Course not found"))?;
    Ok(CourseId(uuid))
}

/// Create a new lesson
pub async fn create(dto: LessonDto) -> anyhow::Result<Uuid> {
    let course_id = resolve_course(&dto.course_id).await?;

    let mut aggregate =
        Lesson::new_for_insert(dto.title, dto.video_path, dto.document_path, course_id);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing lesson
pub async fn update(dto: LessonDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    let course_id = resolve_course(&dto.course_id).await?;
    aggregate.update(&dto, course_id);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Soft delete a lesson
///
/// No-action policy: a lesson keeps its reference if the course goes away.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Lesson>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Lesson>> {
    repository::list_all().await
}

pub async fn list_by_course(course_id: Uuid) -> anyhow::Result<Vec<Lesson>> {
    repository::list_by_course(course_id).await
}
