use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::CatalogError;

/// Remote exercise catalog in which imported exercises, routines and workouts are created.
///
/// All operations block until the catalog responded or the request timed out.
pub trait CatalogRepository {
    fn create_exercise(&self, exercise: NewExercise) -> Result<CatalogExercise, CatalogError>;
    fn search_exercises(&self, name: &str) -> Result<Vec<CatalogExercise>, CatalogError>;
    fn create_routine(&self, routine: NewRoutine) -> Result<RoutineID, CatalogError>;
    fn create_workout(&self, workout: NewWorkout) -> Result<WorkoutID, CatalogError>;
    fn attach_exercise(&self, workout_exercise: NewWorkoutExercise) -> Result<(), CatalogError>;
}

impl<C: CatalogRepository + ?Sized> CatalogRepository for &C {
    fn create_exercise(&self, exercise: NewExercise) -> Result<CatalogExercise, CatalogError> {
        (**self).create_exercise(exercise)
    }

    fn search_exercises(&self, name: &str) -> Result<Vec<CatalogExercise>, CatalogError> {
        (**self).search_exercises(name)
    }

    fn create_routine(&self, routine: NewRoutine) -> Result<RoutineID, CatalogError> {
        (**self).create_routine(routine)
    }

    fn create_workout(&self, workout: NewWorkout) -> Result<WorkoutID, CatalogError> {
        (**self).create_workout(workout)
    }

    fn attach_exercise(&self, workout_exercise: NewWorkoutExercise) -> Result<(), CatalogError> {
        (**self).attach_exercise(workout_exercise)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogExercise {
    /// Missing if the catalog did not return an identifier.
    pub id: Option<ExerciseID>,
    pub name: String,
    pub muscle_group: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub name: String,
    pub video_url: Option<String>,
    pub muscle_group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoutine {
    pub name: String,
    pub user_id: UserID,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: String,
    pub routine_id: RoutineID,
    pub user_id: UserID,
    pub min_rest_seconds: Option<u32>,
    pub max_rest_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutExercise {
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub user_id: UserID,
    pub recommended_sets: Option<u32>,
    pub recommended_reps: Option<u32>,
    pub training_technique: Option<String>,
}

macro_rules! id {
    ($name: ident) => {
        #[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            #[must_use]
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(Uuid::from_bytes(value.to_be_bytes()))
            }
        }
    };
}

id!(ExerciseID);
id!(RoutineID);
id!(WorkoutID);
id!(UserID);
