pub mod course_availability;
pub mod gender;
pub mod podcast_category;
