use crate::rest::{Credentials, Response};

pub static CREDENTIALS: std::sync::LazyLock<Credentials> =
    std::sync::LazyLock::new(|| Credentials {
        username: "coach".to_string(),
        password: "secret".to_string(),
    });

pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.first";
pub const TOKEN_2: &str = "eyJhbGciOiJIUzI1NiJ9.second";

pub const EXERCISE_ID: u128 = 1;
pub const ROUTINE_ID: u128 = 2;
pub const WORKOUT_ID: u128 = 3;
pub const USER_ID: u128 = 7;

pub fn login_response(token: &str) -> Result<Response, String> {
    Ok(Response {
        status: 200,
        body: serde_json::json!({ "token": token, "type": "Bearer" }).to_string(),
    })
}

pub fn exercise_json(id: Option<u128>, name: &str, muscle_group: Option<&str>) -> String {
    serde_json::json!({
        "id": id.map(uuid::Uuid::from_u128),
        "name": name,
        "muscleGroup": muscle_group,
        "description": null,
    })
    .to_string()
}

pub const MUSCLE_GROUPS_YAML: &str = "\
PEITO: Chest
COSTAS: Back
OMBROS: Shoulders
BÍCEPS: Biceps
TRÍCEPS: Triceps
PERNAS: Legs
ABDÔMEN: Abs
";

/// Workbook with a routine on its first sheet "Treino" (B2:D16) and an unrelated second sheet.
///
/// B5 holds the formula `CONCATENATE("Leg"," Press")` and C5 the number 3.9.
pub const ROUTINE_XLSX: &[u8] = include_bytes!("routine.xlsx");

/// One-page exercise list with the sections PEITO and COSTAS.
pub const EXERCISES_PDF: &[u8] = include_bytes!("exercises.pdf");
