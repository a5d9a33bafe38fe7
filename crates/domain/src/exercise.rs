//! Exercise Parser
//!
//! Recovers exercises from the text lines of an exercise list document. The document is
//! divided into sections by muscle group headers. Each section lists exercise names and links
//! to demonstration videos, but gives no reliable indication which link belongs to which name.
//! Names and links are therefore collected per section and paired by their position.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::{DocumentError, ExerciseName, MuscleGroupMap, NameError, TextExtractor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExercise {
    pub name: ExerciseName,
    pub video_url: Option<String>,
    pub muscle_group_source_name: String,
}

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/watch\?v=|youtu\.be/)[A-Za-z0-9_-]+",
    )
    .expect("valid video URL pattern")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|\t]+").expect("valid separator pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static ENUMERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\-•*–)]+\s*").expect("valid enumeration pattern"));

static TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-–:]+$").expect("valid trailing separator pattern"));

/// Prefixes of table headings, page footers and contact lines.
const BOILERPLATE: [&str; 9] = [
    "EXERCÍCIO",
    "EXERCICIO",
    "VÍDEO",
    "VIDEO",
    "CONTATO",
    "INSTAGRAM",
    "WHATSAPP",
    "E-MAIL",
    "PÁGINA",
];

pub fn parse_document(
    extractor: &impl TextExtractor,
    document: &[u8],
    muscle_groups: &MuscleGroupMap,
) -> Result<Vec<ParsedExercise>, DocumentError> {
    let lines = extractor.extract_lines(document)?;
    let exercises = parse_exercises(&lines, muscle_groups);
    debug!(
        "parsed {} exercises from {} lines",
        exercises.len(),
        lines.len()
    );
    Ok(exercises)
}

#[must_use]
pub fn parse_exercises<I, S>(lines: I, muscle_groups: &MuscleGroupMap) -> Vec<ParsedExercise>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut exercises = Vec::new();
    let mut section = Section::default();

    for line in lines {
        let line = line.as_ref().trim();

        if let Some(header) = muscle_groups.detect_header(line) {
            exercises.extend(section.finish());
            debug!("found muscle group: {header}");
            section = Section::new(header);
            continue;
        }

        if is_noise(line) {
            continue;
        }

        if let Some(url) = VIDEO_URL.find(line) {
            if section.is_active() {
                if let Some(name) = candidate_name(&line[..url.start()]) {
                    section.names.push(name);
                }
            }
            debug!("found video: {}", url.as_str());
            section.urls.push(url.as_str().to_string());
        } else if section.is_active() {
            if let Some(name) = candidate_name(line) {
                section.names.push(name);
            }
        }
    }

    exercises.extend(section.finish());
    exercises
}

/// Pair the names and videos of one section by their position.
///
/// The i-th name gets the i-th video. Names without a counterpart get no video, videos
/// without a counterpart are dropped.
#[must_use]
pub fn pair_by_position(
    names: Vec<ExerciseName>,
    urls: Vec<String>,
    muscle_group: &str,
) -> Vec<ParsedExercise> {
    let mut urls = urls.into_iter();
    let exercises = names
        .into_iter()
        .map(|name| ParsedExercise {
            name,
            video_url: urls.next(),
            muscle_group_source_name: muscle_group.to_string(),
        })
        .collect::<Vec<_>>();

    if urls.len() > 0 {
        debug!(
            "dropped {} videos without exercise in section {muscle_group}",
            urls.len()
        );
    }

    exercises
}

#[derive(Default)]
struct Section {
    muscle_group: Option<String>,
    names: Vec<ExerciseName>,
    urls: Vec<String>,
}

impl Section {
    fn new(muscle_group: &str) -> Self {
        Self {
            muscle_group: Some(muscle_group.to_string()),
            names: Vec::new(),
            urls: Vec::new(),
        }
    }

    fn is_active(&self) -> bool {
        self.muscle_group.is_some()
    }

    fn finish(self) -> Vec<ParsedExercise> {
        match self.muscle_group {
            Some(muscle_group) => {
                let exercises = pair_by_position(self.names, self.urls, &muscle_group);
                for exercise in &exercises {
                    debug!(
                        "parsed exercise: {} - {}",
                        exercise.name, exercise.muscle_group_source_name
                    );
                }
                exercises
            }
            None => Vec::new(),
        }
    }
}

fn is_noise(line: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    let uppercase_line = line.to_uppercase();
    BOILERPLATE
        .iter()
        .any(|prefix| uppercase_line.starts_with(prefix))
}

fn clean_name(name: &str) -> String {
    let name = SEPARATORS.replace_all(name, " ");
    let name = WHITESPACE.replace_all(name.trim(), " ");
    let name = ENUMERATION.replace(&name, "");
    let name = TRAILING_SEPARATOR.replace(&name, "");
    name.trim().to_string()
}

fn candidate_name(text: &str) -> Option<ExerciseName> {
    let name = clean_name(text);
    match ExerciseName::new(&name) {
        Ok(name) => Some(name),
        Err(NameError::UrlFragment) => {
            warn!("exercise name still contains URL fragments: {name}");
            None
        }
        Err(NameError::TooShort(_)) => {
            if !name.is_empty() {
                debug!("ignored short line: {name}");
            }
            None
        }
    }
}
