use std::{fs, path::Path};

use kraftlog_import_domain::MuscleGroupMap;
use log::{debug, info, warn};
use serde_yaml::{Mapping, Value};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid muscle group configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load the muscle group translation table from a YAML file.
///
/// A file that cannot be read results in an empty table, so that exercises are imported
/// without muscle groups.
pub fn load(path: &Path) -> Result<MuscleGroupMap, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "could not load muscle group configuration from {}: {err}, exercises will be imported without muscle groups",
                path.display()
            );
            return Ok(MuscleGroupMap::default());
        }
    };

    info!("loading muscle group configuration from {}", path.display());

    let muscle_groups = from_yaml_str(&content)?;

    if muscle_groups.is_empty() {
        warn!("muscle group configuration {} is empty", path.display());
    } else {
        info!("loaded {} muscle group mappings", muscle_groups.len());
    }

    Ok(muscle_groups)
}

pub fn from_yaml_str(content: &str) -> Result<MuscleGroupMap, Error> {
    if content.trim().is_empty() {
        return Ok(MuscleGroupMap::default());
    }

    let mapping = serde_yaml::from_str::<Option<Mapping>>(content)?.unwrap_or_default();

    Ok(mapping
        .iter()
        .filter_map(|(key, value)| {
            let Some(key) = scalar(key) else {
                debug!("ignoring muscle group with non-scalar key {key:?}");
                return None;
            };
            let Some(value) = scalar(value) else {
                debug!("ignoring muscle group {key} without scalar name");
                return None;
            };
            Some((key, value))
        })
        .collect())
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(string) => Some(string.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(boolean) => Some(boolean.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
