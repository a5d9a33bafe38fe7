use kraftlog_import_domain as domain;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseImport {
    pub status: &'static str,
    pub message: &'static str,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub failures: Vec<ImportFailure>,
}

impl From<&domain::ImportResult> for ExerciseImport {
    fn from(value: &domain::ImportResult) -> Self {
        Self {
            status: "success",
            message: "Import completed",
            total_processed: value.total_count(),
            successful: value.success_count(),
            failed: value.failure_count(),
            failures: value.failures().iter().map(ImportFailure::from).collect(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub item_name: String,
    pub reason: String,
}

impl From<&domain::ImportFailure> for ImportFailure {
    fn from(value: &domain::ImportFailure) -> Self {
        Self {
            item_name: value.item_name.clone(),
            reason: value.reason.clone(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct RoutineImport {
    pub success: bool,
    pub message: &'static str,
    pub result: RoutineImportResult,
}

impl From<&domain::RoutineImportResult> for RoutineImport {
    fn from(value: &domain::RoutineImportResult) -> Self {
        Self {
            success: !value.has_failures(),
            message: if value.has_failures() {
                "Import completed with some failures"
            } else {
                "Import completed successfully"
            },
            result: value.into(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineImportResult {
    pub routine_name: String,
    pub routine_id: Uuid,
    pub total_workouts: usize,
    pub successful_workouts: usize,
    pub failed_workouts: usize,
    pub total_exercises: usize,
    pub successful_exercises: usize,
    pub failed_exercises: usize,
    pub errors: Vec<String>,
}

impl From<&domain::RoutineImportResult> for RoutineImportResult {
    fn from(value: &domain::RoutineImportResult) -> Self {
        Self {
            routine_name: value.routine_name().to_string(),
            routine_id: *value.routine_id(),
            total_workouts: value.total_workouts(),
            successful_workouts: value.successful_workouts(),
            failed_workouts: value.failed_workouts(),
            total_exercises: value.total_exercises(),
            successful_exercises: value.successful_exercises(),
            failed_exercises: value.failed_exercises(),
            errors: value.errors().to_vec(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct RoutinePreview {
    pub name: String,
    pub workouts: Vec<WorkoutPreview>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPreview {
    pub name: String,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rest_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rest_seconds: Option<u32>,
    pub exercises: Vec<ExercisePreview>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePreview {
    pub name: String,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_technique: Option<String>,
}

impl From<domain::RoutinePreview> for RoutinePreview {
    fn from(value: domain::RoutinePreview) -> Self {
        Self {
            name: value.name,
            workouts: value
                .workouts
                .into_iter()
                .map(|workout| WorkoutPreview {
                    name: workout.name,
                    order: workout.order,
                    min_rest_seconds: workout.rest.map(|r| r.min_seconds),
                    max_rest_seconds: workout.rest.map(|r| r.max_seconds),
                    exercises: workout
                        .exercises
                        .into_iter()
                        .map(|exercise| ExercisePreview {
                            name: exercise.name,
                            order: exercise.order,
                            muscle_group: exercise.muscle_group,
                            sets: exercise.sets,
                            repetitions: exercise.repetitions,
                            advanced_technique: exercise.advanced_technique,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExercise {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub muscle_group_source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
}

impl ParsedExercise {
    pub fn new(exercise: &domain::ParsedExercise, muscle_groups: &domain::MuscleGroupMap) -> Self {
        Self {
            name: exercise.name.to_string(),
            video_url: exercise.video_url.clone(),
            muscle_group_source_name: exercise.muscle_group_source_name.clone(),
            muscle_group: muscle_groups
                .translate(&exercise.muscle_group_source_name)
                .map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_routine_preview_json() {
        let preview = RoutinePreview::from(domain::RoutinePreview {
            name: "Hipertrofia".to_string(),
            workouts: vec![
                domain::WorkoutPreview {
                    name: "Treino A".to_string(),
                    order: 1,
                    rest: Some(domain::RestInterval {
                        min_seconds: 60,
                        max_seconds: 120,
                    }),
                    exercises: vec![domain::ExercisePreview {
                        name: "Supino Reto".to_string(),
                        order: 1,
                        muscle_group: Some("Chest".to_string()),
                        sets: Some(3),
                        repetitions: Some(12),
                        advanced_technique: Some("Drop-set".to_string()),
                    }],
                },
                domain::WorkoutPreview {
                    name: domain::UNNAMED_WORKOUT.to_string(),
                    order: 2,
                    rest: None,
                    exercises: vec![domain::ExercisePreview {
                        name: "Agachamento".to_string(),
                        order: 1,
                        muscle_group: None,
                        sets: None,
                        repetitions: None,
                        advanced_technique: None,
                    }],
                },
            ],
        });

        assert_eq!(
            serde_json::to_value(&preview).unwrap(),
            json!({
                "name": "Hipertrofia",
                "workouts": [
                    {
                        "name": "Treino A",
                        "order": 1,
                        "minRestSeconds": 60,
                        "maxRestSeconds": 120,
                        "exercises": [
                            {
                                "name": "Supino Reto",
                                "order": 1,
                                "muscleGroup": "Chest",
                                "sets": 3,
                                "repetitions": 12,
                                "advancedTechnique": "Drop-set",
                            }
                        ],
                    },
                    {
                        "name": "Unnamed Workout",
                        "order": 2,
                        "exercises": [{ "name": "Agachamento", "order": 1 }],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_parsed_exercise() {
        let muscle_groups = domain::MuscleGroupMap::new([("PEITO", "Chest")]);
        let exercise = domain::ParsedExercise {
            name: domain::ExerciseName::new("Supino Reto").unwrap(),
            video_url: None,
            muscle_group_source_name: "PEITO".to_string(),
        };

        assert_eq!(
            serde_json::to_value(ParsedExercise::new(&exercise, &muscle_groups)).unwrap(),
            json!({
                "name": "Supino Reto",
                "muscleGroupSourceName": "PEITO",
                "muscleGroup": "Chest",
            })
        );
    }
}
