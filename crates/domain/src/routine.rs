use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::{BlockDescriptor, DocumentError, Grid, GridExtractor, Template, WORKOUTS_PER_ROUTINE};

pub const UNNAMED_WORKOUT: &str = "Unnamed Workout";

static REST_INTERVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*a\s*(\d+)\s*minutos?").expect("valid rest interval pattern")
});

static SETS_REPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[xX]\s*(\d+)").expect("valid sets and reps pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoutine {
    pub name: String,
    pub workouts: [ParsedWorkout; WORKOUTS_PER_ROUTINE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWorkout {
    pub name: String,
    pub exercises: Vec<ParsedWorkoutExercise>,
    pub rest: Option<RestInterval>,
}

impl ParsedWorkout {
    #[must_use]
    pub fn min_rest_seconds(&self) -> Option<u32> {
        self.rest.map(|r| r.min_seconds)
    }

    #[must_use]
    pub fn max_rest_seconds(&self) -> Option<u32> {
        self.rest.map(|r| r.max_seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestInterval {
    pub min_seconds: u32,
    pub max_seconds: u32,
}

impl RestInterval {
    /// Parse phrases like "1 a 2 minutos".
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = REST_INTERVAL.captures(text)?;
        let min_minutes = captures[1].parse::<u32>().ok()?;
        let max_minutes = captures[2].parse::<u32>().ok()?;
        Some(Self {
            min_seconds: min_minutes.checked_mul(60)?,
            max_seconds: max_minutes.checked_mul(60)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWorkoutExercise {
    pub name: String,
    pub sets: Option<u32>,
    pub repetitions: Option<u32>,
    pub advanced_technique: Option<String>,
}

/// Parse phrases like "3x12", "3 x 12" or "3X12" into sets and repetitions.
#[must_use]
pub fn parse_sets_reps(text: &str) -> Option<(u32, u32)> {
    let captures = SETS_REPS.captures(text)?;
    let sets = captures[1].parse::<u32>().ok()?;
    let repetitions = captures[2].parse::<u32>().ok()?;
    if sets == 0 || repetitions == 0 {
        return None;
    }
    Some((sets, repetitions))
}

pub fn parse_spreadsheet(
    extractor: &impl GridExtractor,
    document: &[u8],
    file_name: &str,
    template: &Template,
) -> Result<ParsedRoutine, DocumentError> {
    info!("parsing routine from {file_name}");
    let grid = extractor.extract_grid(document)?;
    Ok(parse_routine(&grid, file_name, template))
}

#[must_use]
pub fn parse_routine(grid: &Grid, file_name: &str, template: &Template) -> ParsedRoutine {
    ParsedRoutine {
        name: routine_name(file_name),
        workouts: template.each_ref().map(|block| parse_workout(grid, block)),
    }
}

/// Remove the extension from the file name.
#[must_use]
pub fn routine_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

fn parse_workout(grid: &Grid, block: &BlockDescriptor) -> ParsedWorkout {
    let name = non_blank(grid.text(block.name_row, block.column))
        .unwrap_or_else(|| UNNAMED_WORKOUT.to_string());

    debug!(
        "parsing workout {name} at column {} (rows {}-{})",
        block.column, block.first_exercise_row, block.last_exercise_row
    );

    let rest = grid
        .text(block.rest_row, block.column)
        .and_then(|text| RestInterval::parse(&text));

    let exercises = (block.first_exercise_row..=block.last_exercise_row)
        .filter_map(|r| {
            let row = grid.row(r)?;
            let name = non_blank(row.text(block.column))?;
            let (sets, repetitions) = row
                .text(block.column + 1)
                .and_then(|text| parse_sets_reps(&text))
                .unzip();
            Some(ParsedWorkoutExercise {
                name,
                sets,
                repetitions,
                advanced_technique: non_blank(row.text(block.column + 2)),
            })
        })
        .collect::<Vec<_>>();

    debug!("parsed {} exercises for workout {name}", exercises.len());

    ParsedWorkout {
        name,
        exercises,
        rest,
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Cell, DEFAULT_TEMPLATE};

    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn workout_exercise(
        name: &str,
        sets: Option<u32>,
        repetitions: Option<u32>,
        advanced_technique: Option<&str>,
    ) -> ParsedWorkoutExercise {
        ParsedWorkoutExercise {
            name: name.to_string(),
            sets,
            repetitions,
            advanced_technique: advanced_technique.map(ToString::to_string),
        }
    }

    fn unnamed_workout() -> ParsedWorkout {
        ParsedWorkout {
            name: UNNAMED_WORKOUT.to_string(),
            exercises: vec![],
            rest: None,
        }
    }

    #[test]
    fn test_parse_routine_reproduces_values_of_all_blocks() {
        let mut grid = Grid::new();
        for (i, block) in DEFAULT_TEMPLATE.iter().enumerate() {
            grid.set(block.name_row, block.column, text(&format!("Treino {i}")));
            for (j, r) in (block.first_exercise_row..=block.last_exercise_row).enumerate() {
                grid.set(r, block.column, text(&format!("Exercício {i}.{j}")));
                grid.set(r, block.column + 1, text(&format!("{} x {}", i + 1, j + 8)));
                grid.set(r, block.column + 2, text(&format!("Técnica {i}.{j}")));
            }
        }
        grid.set(15, 1, text("1 a 2 minutos"));
        grid.set(15, 5, text("2 a 3 minutos"));
        grid.set(15, 9, text("1 a 1 minuto"));

        let routine = parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE);

        assert_eq!(routine.name, "Rotina");
        for (i, (workout, block)) in routine.workouts.iter().zip(DEFAULT_TEMPLATE).enumerate() {
            assert_eq!(workout.name, format!("Treino {i}"));
            assert_eq!(
                workout.exercises,
                (block.first_exercise_row..=block.last_exercise_row)
                    .enumerate()
                    .map(|(j, _)| ParsedWorkoutExercise {
                        name: format!("Exercício {i}.{j}"),
                        sets: Some(u32::try_from(i + 1).unwrap()),
                        repetitions: Some(u32::try_from(j + 8).unwrap()),
                        advanced_technique: Some(format!("Técnica {i}.{j}")),
                    })
                    .collect::<Vec<_>>()
            );
        }
        assert_eq!(
            routine.workouts.each_ref().map(ParsedWorkout::min_rest_seconds),
            [Some(60), Some(120), Some(60), Some(60), Some(120)]
        );
        assert_eq!(
            routine.workouts.each_ref().map(ParsedWorkout::max_rest_seconds),
            [Some(120), Some(180), Some(60), Some(120), Some(180)]
        );
    }

    #[test]
    fn test_parse_routine_rest_interval() {
        let grid = Grid::new().with(15, 1, text("1 a 2 minutos"));

        let routine = parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE);

        assert_eq!(
            routine.workouts[0].rest,
            Some(RestInterval {
                min_seconds: 60,
                max_seconds: 120
            })
        );
        assert_eq!(routine.workouts[0].min_rest_seconds(), Some(60));
        assert_eq!(routine.workouts[0].max_rest_seconds(), Some(120));
        assert_eq!(routine.workouts[2].rest, None);
    }

    #[test]
    fn test_parse_routine_empty_grid() {
        assert_eq!(
            parse_routine(&Grid::new(), "Vazia.xlsx", &DEFAULT_TEMPLATE),
            ParsedRoutine {
                name: "Vazia".to_string(),
                workouts: [
                    unnamed_workout(),
                    unnamed_workout(),
                    unnamed_workout(),
                    unnamed_workout(),
                    unnamed_workout(),
                ],
            }
        );
    }

    #[test]
    fn test_parse_routine_skips_missing_rows_and_blank_names() {
        let grid = Grid::new()
            .with(1, 1, text("  Treino A  "))
            .with(3, 1, text("Supino Reto"))
            .with(3, 2, text("3x12"))
            .with(5, 1, text("   "))
            .with(5, 2, text("4x10"))
            .with(6, 2, text("4x10"))
            .with(7, 1, text("Crucifixo"))
            .with(7, 3, text(" drop set "))
            .with(8, 1, text("Outside of block"));

        let workout = &parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE).workouts[0];

        assert_eq!(workout.name, "Treino A");
        assert_eq!(
            workout.exercises,
            vec![
                workout_exercise("Supino Reto", Some(3), Some(12), None),
                workout_exercise("Crucifixo", None, None, Some("drop set")),
            ]
        );
    }

    #[test]
    fn test_parse_routine_typed_cells() {
        let grid = Grid::new()
            .with(1, 5, Cell::Number(2.0))
            .with(3, 5, Cell::Formula("CONCATENATE(\"Leg\",\" Press\")".to_string()))
            .with(3, 6, Cell::Number(3.0))
            .with(3, 7, Cell::Boolean(false))
            .with(4, 5, text("Agachamento"))
            .with(4, 6, Cell::Formula("A1".to_string()))
            .with(4, 7, Cell::Empty);

        let workout = &parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE).workouts[1];

        assert_eq!(workout.name, "2");
        assert_eq!(
            workout.exercises,
            vec![
                workout_exercise(
                    "CONCATENATE(\"Leg\",\" Press\")",
                    None,
                    None,
                    Some("false")
                ),
                workout_exercise("Agachamento", None, None, None),
            ]
        );
    }

    #[test]
    fn test_parse_routine_is_idempotent() {
        let grid = Grid::new()
            .with(1, 1, text("Treino A"))
            .with(3, 1, text("Supino Reto"))
            .with(3, 2, text("3x12"));

        assert_eq!(
            parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE),
            parse_routine(&grid, "Rotina.xlsx", &DEFAULT_TEMPLATE)
        );
    }

    #[rstest]
    #[case::compact("3x12", Some((3, 12)))]
    #[case::spaced("3 x 12", Some((3, 12)))]
    #[case::uppercase("3X12", Some((3, 12)))]
    #[case::surrounding_text("Séries: 4 x 8 a 10", Some((4, 8)))]
    #[case::zero_sets("0x12", None)]
    #[case::missing_reps("3x", None)]
    #[case::text("até a falha", None)]
    #[case::empty("", None)]
    fn test_parse_sets_reps(#[case] text: &str, #[case] expected: Option<(u32, u32)>) {
        assert_eq!(parse_sets_reps(text), expected);
    }

    #[rstest]
    #[case::minutes("1 a 2 minutos", Some((60, 120)))]
    #[case::compact("2a3minutos", Some((120, 180)))]
    #[case::singular("1 a 1 minuto", Some((60, 60)))]
    #[case::capitalized("Descanso: 1 A 2 MINUTOS", Some((60, 120)))]
    #[case::seconds("30 a 60 segundos", None)]
    #[case::single_value("2 minutos", None)]
    #[case::overflow("99999999 a 99999999 minutos", None)]
    fn test_rest_interval_parse(#[case] text: &str, #[case] expected: Option<(u32, u32)>) {
        assert_eq!(
            RestInterval::parse(text),
            expected.map(|(min_seconds, max_seconds)| RestInterval {
                min_seconds,
                max_seconds
            })
        );
    }

    #[rstest]
    #[case("Rotina.xlsx", "Rotina")]
    #[case("Hipertrofia.v2.xlsx", "Hipertrofia.v2")]
    #[case("Rotina", "Rotina")]
    #[case(".xlsx", ".xlsx")]
    fn test_routine_name(#[case] file_name: &str, #[case] expected: &str) {
        assert_eq!(routine_name(file_name), expected);
    }

    #[test]
    fn test_parse_spreadsheet() {
        struct Corrupt;

        impl GridExtractor for Corrupt {
            fn extract_grid(&self, _: &[u8]) -> Result<Grid, DocumentError> {
                Err(DocumentError::Spreadsheet("invalid zip header".to_string()))
            }
        }

        struct Sheet;

        impl GridExtractor for Sheet {
            fn extract_grid(&self, _: &[u8]) -> Result<Grid, DocumentError> {
                Ok(Grid::new().with(17, 5, Cell::Text("Treino E".to_string())))
            }
        }

        assert_eq!(
            parse_spreadsheet(&Corrupt, b"", "Rotina.xlsx", &DEFAULT_TEMPLATE),
            Err(DocumentError::Spreadsheet("invalid zip header".to_string()))
        );
        assert_eq!(
            parse_spreadsheet(&Sheet, b"", "Rotina.xlsx", &DEFAULT_TEMPLATE)
                .unwrap()
                .workouts[4]
                .name,
            "Treino E"
        );
    }
}
