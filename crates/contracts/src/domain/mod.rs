pub mod common;

pub mod a001_ethnic_group;
pub mod a002_language;
pub mod a003_podcast;
pub mod a004_event;
pub mod a005_marketplace_item;
pub mod a006_theme;
pub mod a007_course;
pub mod a008_lesson;
pub mod a009_learning_item;
