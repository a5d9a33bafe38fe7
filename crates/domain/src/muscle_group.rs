use std::collections::{BTreeMap, BTreeSet};

use log::debug;

/// Canonical muscle group assigned to exercises whose name matches no known header token.
pub const OTHER: &str = "Other";

/// Translation table from source-language muscle group header tokens to canonical names.
///
/// Keys are stored upper-cased. Iteration and lookups that may match several tokens follow
/// the lexicographic order of the keys, so results are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MuscleGroupMap {
    mapping: BTreeMap<String, String>,
}

impl MuscleGroupMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mapping = entries
            .into_iter()
            .filter_map(|(source, canonical)| {
                let source = source.as_ref().trim().to_uppercase();
                if source.is_empty() {
                    return None;
                }
                Some((source, canonical.into()))
            })
            .collect::<BTreeMap<_, _>>();

        for (source, canonical) in &mapping {
            debug!("muscle group mapping: {source} -> {canonical}");
        }

        Self { mapping }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn headers(&self) -> BTreeSet<&str> {
        self.mapping.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn translate(&self, source_name: &str) -> Option<&str> {
        self.mapping
            .get(&source_name.trim().to_uppercase())
            .map(String::as_str)
    }

    /// Find the header token contained in the line.
    ///
    /// If several tokens occur in the line, the longest one wins.
    #[must_use]
    pub fn detect_header(&self, line: &str) -> Option<&str> {
        let uppercase_line = line.to_uppercase();
        self.mapping
            .keys()
            .filter(|header| uppercase_line.contains(header.as_str()))
            .fold(None, |longest: Option<&String>, header| match longest {
                Some(current) if current.chars().count() >= header.chars().count() => {
                    Some(current)
                }
                _ => Some(header),
            })
            .map(String::as_str)
    }

    /// Guess the canonical muscle group of an exercise from its name.
    ///
    /// The first header token contained in the name determines the result.
    #[must_use]
    pub fn derive_from_exercise_name(&self, exercise_name: &str) -> &str {
        let uppercase_name = exercise_name.to_uppercase();
        self.mapping
            .iter()
            .find(|(source, _)| uppercase_name.contains(source.as_str()))
            .map_or(OTHER, |(_, canonical)| canonical.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping
            .iter()
            .map(|(source, canonical)| (source.as_str(), canonical.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for MuscleGroupMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn muscle_groups() -> MuscleGroupMap {
        MuscleGroupMap::new([
            ("PEITO", "Chest"),
            ("costas", "Back"),
            ("OMBROS", "Shoulders"),
            ("BÍCEPS", "Biceps"),
            ("PERNA", "Legs"),
            ("PERNA POSTERIOR", "Hamstrings"),
        ])
    }

    #[test]
    fn test_new_normalizes_keys() {
        let map = MuscleGroupMap::new([(" costas ", "Back"), ("", "Nothing")]);
        assert_eq!(map.headers(), BTreeSet::from(["COSTAS"]));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    #[case("PEITO", Some("Chest"))]
    #[case("peito", Some("Chest"))]
    #[case(" Costas ", Some("Back"))]
    #[case("bíceps", Some("Biceps"))]
    #[case("GLÚTEOS", None)]
    #[case("", None)]
    fn test_translate(#[case] source_name: &str, #[case] expected: Option<&str>) {
        assert_eq!(muscle_groups().translate(source_name), expected);
    }

    #[rstest]
    #[case::exact("PEITO", Some("PEITO"))]
    #[case::lowercase("exercícios de peito", Some("PEITO"))]
    #[case::longest_wins("PERNA POSTERIOR", Some("PERNA POSTERIOR"))]
    #[case::shorter_prefix("PERNA ANTERIOR", Some("PERNA"))]
    #[case::none("Supino Reto", None)]
    #[case::empty("", None)]
    fn test_detect_header(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(muscle_groups().detect_header(line), expected);
    }

    #[rstest]
    #[case("Desenvolvimento Ombros Halter", "Shoulders")]
    #[case("Rosca Bíceps Direta", "Biceps")]
    #[case("Supino Reto", OTHER)]
    #[case("Extensora Perna Posterior", "Legs")]
    fn test_derive_from_exercise_name(#[case] exercise_name: &str, #[case] expected: &str) {
        assert_eq!(
            muscle_groups().derive_from_exercise_name(exercise_name),
            expected
        );
    }

    #[test]
    fn test_empty_map() {
        let map = MuscleGroupMap::default();
        assert!(map.is_empty());
        assert_eq!(map.detect_header("PEITO"), None);
        assert_eq!(map.translate("PEITO"), None);
        assert_eq!(map.derive_from_exercise_name("Supino Reto"), OTHER);
    }

    #[test]
    fn test_from_iterator() {
        let map = [("PEITO", "Chest")]
            .into_iter()
            .collect::<MuscleGroupMap>();
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("PEITO", "Chest")]);
    }
}
