#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
pub mod exercise;
mod grid;
mod muscle_group;
mod name;
mod result;
pub mod routine;
mod service;

pub use catalog::{
    CatalogExercise, CatalogRepository, ExerciseID, NewExercise, NewRoutine, NewWorkout,
    NewWorkoutExercise, RoutineID, UserID, WorkoutID,
};
pub use error::{CatalogError, DocumentError, ImportError};
pub use exercise::ParsedExercise;
pub use grid::{BlockDescriptor, Cell, DEFAULT_TEMPLATE, Grid, Row, Template, WORKOUTS_PER_ROUTINE};
pub use muscle_group::{MuscleGroupMap, OTHER};
pub use name::{ExerciseName, NameError};
pub use result::{
    ExercisePreview, ImportFailure, ImportResult, RoutineImportResult, RoutinePreview,
    WorkoutPreview,
};
pub use routine::{
    ParsedRoutine, ParsedWorkout, ParsedWorkoutExercise, RestInterval, UNNAMED_WORKOUT,
};
pub use service::Service;

/// Source of the text lines of a PDF document.
pub trait TextExtractor {
    /// Extract the text of all pages in reading order, one entry per line.
    fn extract_lines(&self, document: &[u8]) -> Result<Vec<String>, DocumentError>;
}

/// Source of the cells of the first worksheet of a spreadsheet.
pub trait GridExtractor {
    fn extract_grid(&self, document: &[u8]) -> Result<Grid, DocumentError>;
}
