use std::sync::OnceLock;

use regex::Regex;

const LINE_BREAK: &str = "<br>";
const OBSERVATION_MARKER: &str = "Observações:";
const VEGAN_LINE: &str = "vegan menu";

/// A meal description split into its side items and the trailing note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub accompaniments: Vec<String>,
    pub observation: String,
}

fn strip_tags(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("regex should be valid"));
    re.replace_all(s, "").into_owned()
}

/// Splits the inner html of a description node.
///
/// Lines are separated by `<br>`. Lines mentioning the vegan menu are
/// dropped. Everything before an `Observações:` line is an accompaniment,
/// everything after it becomes the observation. Only the observation has
/// its tags stripped; accompaniments keep any inline markup.
pub fn normalize(raw_html: Option<&str>) -> Description {
    let Some(raw_html) = raw_html else {
        return Description::default();
    };

    let lines: Vec<&str> = raw_html
        .split(LINE_BREAK)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.to_lowercase().contains(VEGAN_LINE))
        .collect();

    match lines.iter().position(|line| *line == OBSERVATION_MARKER) {
        Some(marker) => Description {
            accompaniments: lines[..marker].iter().map(ToString::to_string).collect(),
            observation: strip_tags(&lines[marker + 1..].join("\n")).trim().to_string(),
        },
        None => Description {
            accompaniments: lines.into_iter().map(ToString::to_string).collect(),
            observation: String::new(),
        },
    }
}
