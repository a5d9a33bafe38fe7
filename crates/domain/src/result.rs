use crate::{RestInterval, RoutineID};

/// Outcome of an exercise import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportResult {
    success_count: usize,
    failures: Vec<ImportFailure>,
}

impl ImportResult {
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.success_count
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.success_count + self.failures.len()
    }

    #[must_use]
    pub fn failures(&self) -> &[ImportFailure] {
        &self.failures
    }

    pub(crate) fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub(crate) fn record_failure(&mut self, item_name: impl Into<String>, reason: impl Into<String>) {
        self.failures.push(ImportFailure {
            item_name: item_name.into(),
            reason: reason.into(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub item_name: String,
    pub reason: String,
}

/// Outcome of a routine import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineImportResult {
    routine_name: String,
    routine_id: RoutineID,
    total_workouts: usize,
    successful_workouts: usize,
    failed_workouts: usize,
    total_exercises: usize,
    successful_exercises: usize,
    failed_exercises: usize,
    errors: Vec<String>,
}

impl RoutineImportResult {
    pub(crate) fn new(routine_name: String, routine_id: RoutineID, total_workouts: usize) -> Self {
        Self {
            routine_name,
            routine_id,
            total_workouts,
            successful_workouts: 0,
            failed_workouts: 0,
            total_exercises: 0,
            successful_exercises: 0,
            failed_exercises: 0,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn routine_name(&self) -> &str {
        &self.routine_name
    }

    #[must_use]
    pub fn routine_id(&self) -> RoutineID {
        self.routine_id
    }

    #[must_use]
    pub fn total_workouts(&self) -> usize {
        self.total_workouts
    }

    #[must_use]
    pub fn successful_workouts(&self) -> usize {
        self.successful_workouts
    }

    #[must_use]
    pub fn failed_workouts(&self) -> usize {
        self.failed_workouts
    }

    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.total_exercises
    }

    #[must_use]
    pub fn successful_exercises(&self) -> usize {
        self.successful_exercises
    }

    #[must_use]
    pub fn failed_exercises(&self) -> usize {
        self.failed_exercises
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_workouts > 0 || self.failed_exercises > 0
    }

    pub(crate) fn record_workout_success(&mut self) {
        self.successful_workouts += 1;
    }

    pub(crate) fn record_workout_failure(&mut self, error: String) {
        self.failed_workouts += 1;
        self.errors.push(error);
    }

    pub(crate) fn record_exercise_success(&mut self) {
        self.total_exercises += 1;
        self.successful_exercises += 1;
    }

    pub(crate) fn record_exercise_failure(&mut self, error: String) {
        self.total_exercises += 1;
        self.failed_exercises += 1;
        self.errors.push(error);
    }
}

/// Structure of a routine as it would be imported, without creating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutinePreview {
    pub name: String,
    pub workouts: Vec<WorkoutPreview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPreview {
    pub name: String,
    /// 1-based position in the routine.
    pub order: usize,
    pub rest: Option<RestInterval>,
    pub exercises: Vec<ExercisePreview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePreview {
    pub name: String,
    /// 1-based position in the workout.
    pub order: usize,
    pub muscle_group: Option<String>,
    pub sets: Option<u32>,
    pub repetitions: Option<u32>,
    pub advanced_technique: Option<String>,
}
