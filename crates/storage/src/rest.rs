//! REST client of the KraftLog catalog API.
//!
//! Every call authenticates lazily with the configured credentials and carries the received
//! token as bearer token. An expired token leads to exactly one re-authentication and one
//! repetition of the call.

use std::{cell::RefCell, fmt, time::Duration};

use kraftlog_import_domain as domain;
use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl Request {
    fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            query: Vec::new(),
            token: None,
            body: None,
        }
    }

    fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            token: None,
            body: Some(body),
        }
    }

    fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn bearer(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport of a single request.
///
/// An `Err` means that no response was received at all.
pub trait SendRequest {
    fn send_request(&self, request: Request) -> Result<Response, String>;
}

pub struct ReqwestSendRequest {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ReqwestSendRequest {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl SendRequest for ReqwestSendRequest {
    fn send_request(&self, request: Request) -> Result<Response, String> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }
        let response = builder.send().map_err(|err| err.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| err.to_string())?;
        Ok(Response { status, body })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

pub struct REST<S: SendRequest> {
    sender: S,
    credentials: Credentials,
    token: RefCell<Option<String>>,
}

impl REST<ReqwestSendRequest> {
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::with_sender(
            ReqwestSendRequest::new(base_url, timeout)?,
            credentials,
        ))
    }
}

impl<S: SendRequest> REST<S> {
    pub fn with_sender(sender: S, credentials: Credentials) -> Self {
        Self {
            sender,
            credentials,
            token: RefCell::new(None),
        }
    }

    fn authenticate(&self) -> Result<String, domain::CatalogError> {
        debug!("authenticating as {}", self.credentials.username);

        let response = self.send(Request::post(
            "/api/auth/login",
            json!({
                "username": self.credentials.username,
                "password": self.credentials.password,
            }),
        ))?;

        if !response.ok() {
            error!("authentication failed: {} {}", response.status, response.body);
            return Err(domain::CatalogError::Authentication(format!(
                "{} {}",
                response.status, response.body
            )));
        }

        let LoginResponse { token } = decode(&response)?;
        *self.token.borrow_mut() = Some(token.clone());
        Ok(token)
    }

    fn token(&self) -> Result<String, domain::CatalogError> {
        let cached = self.token.borrow().clone();
        match cached {
            Some(token) => Ok(token),
            None => self.authenticate(),
        }
    }

    fn execute(&self, request: Request) -> Result<Response, domain::CatalogError> {
        let response = self.send(request.clone().bearer(self.token()?))?;

        if response.status != 401 {
            return check(response);
        }

        warn!("token expired, re-authenticating");
        self.token.borrow_mut().take();

        let response = self.send(request.bearer(self.authenticate()?))?;

        if response.status == 401 {
            error!("request unauthorized after re-authentication");
            return Err(domain::CatalogError::Unauthorized);
        }

        check(response)
    }

    fn send(&self, request: Request) -> Result<Response, domain::CatalogError> {
        debug!("{} {}", request.method, request.path);
        self.sender
            .send_request(request)
            .map_err(domain::CatalogError::NoConnection)
    }
}

impl<S: SendRequest> domain::CatalogRepository for REST<S> {
    fn create_exercise(
        &self,
        exercise: domain::NewExercise,
    ) -> Result<domain::CatalogExercise, domain::CatalogError> {
        let mut content = Map::new();
        content.insert("name".into(), json!(exercise.name));
        if let Some(video_url) = exercise.video_url {
            content.insert("videoUrl".into(), json!(video_url));
        }
        if let Some(muscle_group) = exercise.muscle_group {
            content.insert("muscleGroup".into(), json!(muscle_group));
        }

        let response = self.execute(Request::post("/api/exercises", Value::Object(content)))?;
        Ok(decode::<ExerciseResponse>(&response)?.into())
    }

    fn search_exercises(
        &self,
        name: &str,
    ) -> Result<Vec<domain::CatalogExercise>, domain::CatalogError> {
        let response = self.execute(Request::get("/api/exercises").query("search", name))?;
        Ok(decode::<Vec<ExerciseResponse>>(&response)?
            .into_iter()
            .map(domain::CatalogExercise::from)
            .collect())
    }

    fn create_routine(
        &self,
        routine: domain::NewRoutine,
    ) -> Result<domain::RoutineID, domain::CatalogError> {
        let response = self.execute(Request::post(
            "/api/routines",
            json!({
                "name": routine.name,
                "userId": *routine.user_id,
            }),
        ))?;
        Ok(created_id(&response)?.into())
    }

    fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::WorkoutID, domain::CatalogError> {
        let mut content = Map::new();
        content.insert("name".into(), json!(workout.name));
        content.insert("routineId".into(), json!(*workout.routine_id));
        content.insert("userId".into(), json!(*workout.user_id));
        if let Some(min_rest_seconds) = workout.min_rest_seconds {
            content.insert("minRestSeconds".into(), json!(min_rest_seconds));
        }
        if let Some(max_rest_seconds) = workout.max_rest_seconds {
            content.insert("maxRestSeconds".into(), json!(max_rest_seconds));
        }

        let response = self.execute(Request::post("/api/workouts", Value::Object(content)))?;
        Ok(created_id(&response)?.into())
    }

    fn attach_exercise(
        &self,
        workout_exercise: domain::NewWorkoutExercise,
    ) -> Result<(), domain::CatalogError> {
        let mut content = Map::new();
        content.insert("workoutId".into(), json!(*workout_exercise.workout_id));
        content.insert("exerciseId".into(), json!(*workout_exercise.exercise_id));
        content.insert("userId".into(), json!(*workout_exercise.user_id));
        if let Some(sets) = workout_exercise.recommended_sets {
            content.insert("recommendedSets".into(), json!(sets));
        }
        if let Some(reps) = workout_exercise.recommended_reps {
            content.insert("recommendedReps".into(), json!(reps));
        }
        if let Some(technique) = workout_exercise.training_technique {
            content.insert("trainingTechnique".into(), json!(technique));
        }

        self.execute(Request::post(
            "/api/workout-exercises",
            Value::Object(content),
        ))?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseResponse {
    id: Option<Uuid>,
    #[serde(default)]
    name: String,
    muscle_group: Option<String>,
    video_url: Option<String>,
}

impl From<ExerciseResponse> for domain::CatalogExercise {
    fn from(value: ExerciseResponse) -> Self {
        Self {
            id: value.id.map(domain::ExerciseID::from),
            name: value.name,
            muscle_group: value.muscle_group,
            video_url: value.video_url,
        }
    }
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: Option<Uuid>,
}

fn check(response: Response) -> Result<Response, domain::CatalogError> {
    if response.ok() {
        Ok(response)
    } else {
        error!("unexpected response: {} {}", response.status, response.body);
        Err(domain::CatalogError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

fn decode<T>(response: &Response) -> Result<T, domain::CatalogError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(&response.body)
        .map_err(|err| domain::CatalogError::Deserialization(err.to_string()))
}

fn created_id(response: &Response) -> Result<Uuid, domain::CatalogError> {
    decode::<CreatedResponse>(response)?
        .id
        .ok_or(domain::CatalogError::MissingIdentifier)
}
