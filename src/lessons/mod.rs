//! Lesson content processing
//!
//! AI-generated lesson HTML carries an embedded quiz block; this module
//! extracts it for the exercise UI and strips it from the displayed lesson.

mod exercises;

pub use exercises::{
    Exercise, ExerciseKind, clean_content_from_exercises, parse_exercises_from_content,
};
