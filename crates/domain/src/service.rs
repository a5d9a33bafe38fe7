use log::{debug, info, warn};

use crate::{
    CatalogExercise, CatalogRepository, DEFAULT_TEMPLATE, ExerciseID, ExercisePreview,
    GridExtractor, ImportError, ImportResult, MuscleGroupMap, NewExercise, NewRoutine,
    NewWorkout, NewWorkoutExercise, ParsedExercise, ParsedRoutine, ParsedWorkout,
    ParsedWorkoutExercise, RoutineImportResult, RoutinePreview, Template, TextExtractor, UserID,
    WorkoutID, WorkoutPreview, exercise, routine,
};

/// Imports parsed documents into the catalog.
///
/// Every record is processed in document order. A failing record is recorded in the result
/// and does not stop the import of the remaining records.
pub struct Service<C> {
    catalog: C,
    muscle_groups: MuscleGroupMap,
    template: Template,
}

macro_rules! log_on_error {
    ($call: expr, $action: literal, $name: expr) => {{
        let result = $call;
        if let Err(ref err) = result {
            warn!("failed to {} {}: {err}", $action, $name);
        }
        result
    }};
}

impl<C: CatalogRepository> Service<C> {
    pub fn new(catalog: C, muscle_groups: MuscleGroupMap) -> Self {
        Self {
            catalog,
            muscle_groups,
            template: DEFAULT_TEMPLATE,
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn muscle_groups(&self) -> &MuscleGroupMap {
        &self.muscle_groups
    }

    pub fn import_exercises_from_pdf(
        &self,
        extractor: &impl TextExtractor,
        document: &[u8],
        file_name: &str,
    ) -> Result<ImportResult, ImportError> {
        info!("starting exercise import from {file_name}");
        let exercises = exercise::parse_document(extractor, document, &self.muscle_groups)?;
        self.import_exercises(&exercises)
    }

    pub fn import_exercises(
        &self,
        exercises: &[ParsedExercise],
    ) -> Result<ImportResult, ImportError> {
        if exercises.is_empty() {
            return Err(ImportError::NoRecords);
        }

        info!("importing {} exercises", exercises.len());

        let mut result = ImportResult::default();

        for exercise in exercises {
            match log_on_error!(
                self.catalog.create_exercise(self.new_exercise(exercise)),
                "import exercise",
                exercise.name
            ) {
                Ok(CatalogExercise { id: Some(_), .. }) => result.record_success(),
                Ok(CatalogExercise { id: None, .. }) => {
                    warn!("failed to import exercise {}: no identifier", exercise.name);
                    result.record_failure(exercise.name.as_str(), "API returned no identifier");
                }
                Err(err) => result.record_failure(exercise.name.as_str(), err.to_string()),
            }
        }

        info!(
            "exercise import completed (success: {}, failed: {})",
            result.success_count(),
            result.failure_count()
        );

        Ok(result)
    }

    pub fn import_routine_from_xlsx(
        &self,
        extractor: &impl GridExtractor,
        document: &[u8],
        file_name: &str,
        user_id: UserID,
    ) -> Result<RoutineImportResult, ImportError> {
        let routine = routine::parse_spreadsheet(extractor, document, file_name, &self.template)?;
        self.import_routine(&routine, user_id)
    }

    pub fn import_routine(
        &self,
        routine: &ParsedRoutine,
        user_id: UserID,
    ) -> Result<RoutineImportResult, ImportError> {
        info!(
            "starting routine import of {} for user {user_id}",
            routine.name
        );

        let routine_id = log_on_error!(
            self.catalog.create_routine(NewRoutine {
                name: routine.name.clone(),
                user_id,
            }),
            "create routine",
            routine.name
        )
        .map_err(ImportError::RoutineCreation)?;

        let mut result =
            RoutineImportResult::new(routine.name.clone(), routine_id, routine.workouts.len());

        for workout in &routine.workouts {
            debug!("importing workout {}", workout.name);

            let workout_id = match log_on_error!(
                self.catalog.create_workout(NewWorkout {
                    name: workout.name.clone(),
                    routine_id,
                    user_id,
                    min_rest_seconds: workout.min_rest_seconds(),
                    max_rest_seconds: workout.max_rest_seconds(),
                }),
                "create workout",
                workout.name
            ) {
                Ok(id) => id,
                Err(err) => {
                    result.record_workout_failure(format!(
                        "Failed to create workout '{}': {err}",
                        workout.name
                    ));
                    continue;
                }
            };

            result.record_workout_success();

            for exercise in &workout.exercises {
                match self.import_workout_exercise(workout, workout_id, exercise, user_id) {
                    Ok(()) => result.record_exercise_success(),
                    Err(error) => {
                        warn!("{error}");
                        result.record_exercise_failure(error);
                    }
                }
            }
        }

        info!(
            "routine import completed (workouts: {}/{} successful, exercises: {}/{} successful)",
            result.successful_workouts(),
            result.total_workouts(),
            result.successful_exercises(),
            result.total_exercises()
        );

        Ok(result)
    }

    /// Build the structure of a routine without creating anything in the catalog.
    ///
    /// The muscle group of each exercise is taken from the first search hit in the catalog.
    pub fn preview_routine(&self, routine: &ParsedRoutine) -> RoutinePreview {
        RoutinePreview {
            name: routine.name.clone(),
            workouts: routine
                .workouts
                .iter()
                .enumerate()
                .map(|(i, workout)| WorkoutPreview {
                    name: workout.name.clone(),
                    order: i + 1,
                    rest: workout.rest,
                    exercises: workout
                        .exercises
                        .iter()
                        .enumerate()
                        .map(|(j, exercise)| ExercisePreview {
                            name: exercise.name.clone(),
                            order: j + 1,
                            muscle_group: self.catalog_muscle_group(&exercise.name),
                            sets: exercise.sets,
                            repetitions: exercise.repetitions,
                            advanced_technique: exercise.advanced_technique.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn new_exercise(&self, exercise: &ParsedExercise) -> NewExercise {
        let muscle_group = self
            .muscle_groups
            .translate(&exercise.muscle_group_source_name);

        if let Some(muscle_group) = muscle_group {
            debug!(
                "mapped muscle group {} -> {muscle_group}",
                exercise.muscle_group_source_name
            );
        }

        NewExercise {
            name: exercise.name.to_string(),
            video_url: exercise.video_url.clone(),
            muscle_group: muscle_group.map(ToString::to_string),
        }
    }

    fn import_workout_exercise(
        &self,
        workout: &ParsedWorkout,
        workout_id: WorkoutID,
        exercise: &ParsedWorkoutExercise,
        user_id: UserID,
    ) -> Result<(), String> {
        let exercise_id = self.find_or_create_exercise(&exercise.name)?;

        self.catalog
            .attach_exercise(NewWorkoutExercise {
                workout_id,
                exercise_id,
                user_id,
                recommended_sets: exercise.sets,
                recommended_reps: exercise.repetitions,
                training_technique: exercise.advanced_technique.clone(),
            })
            .map_err(|err| {
                format!(
                    "Failed to add exercise '{}' to workout '{}': {err}",
                    exercise.name, workout.name
                )
            })
    }

    fn find_or_create_exercise(&self, name: &str) -> Result<ExerciseID, String> {
        let found = self
            .catalog
            .search_exercises(name)
            .map_err(|err| format!("Failed to search exercise '{name}': {err}"))?;

        if let Some(existing) = found.into_iter().next() {
            debug!(
                "found exercise {name} with muscle group {}",
                existing.muscle_group.as_deref().unwrap_or("-")
            );
            return existing
                .id
                .ok_or_else(|| format!("Failed to find exercise '{name}': no identifier returned"));
        }

        let muscle_group = self.muscle_groups.derive_from_exercise_name(name);
        debug!("exercise {name} not found, creating it with muscle group {muscle_group}");

        match self.catalog.create_exercise(NewExercise {
            name: name.to_string(),
            video_url: None,
            muscle_group: Some(muscle_group.to_string()),
        }) {
            Ok(CatalogExercise { id: Some(id), .. }) => Ok(id),
            Ok(CatalogExercise { id: None, .. }) => Err(format!(
                "Failed to create exercise '{name}': no identifier returned"
            )),
            Err(err) => Err(format!("Failed to create exercise '{name}': {err}")),
        }
    }

    fn catalog_muscle_group(&self, name: &str) -> Option<String> {
        match self.catalog.search_exercises(name) {
            Ok(found) => {
                let muscle_group = found.into_iter().next().and_then(|e| e.muscle_group);
                if muscle_group.is_none() {
                    warn!("exercise {name} not found in catalog");
                }
                muscle_group
            }
            Err(err) => {
                warn!("failed to search exercise {name}: {err}");
                None
            }
        }
    }
}
