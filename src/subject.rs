//! Subjects with authored quiz content.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Subject {
    Mathematics,
    Science,
    English,
    SocialStudies,
}

impl Subject {
    /// Display order used by the mastery panel and quiz picker.
    pub const ALL: [Subject; 4] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::SocialStudies,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::SocialStudies => "Social Studies",
        }
    }

    /// Case-insensitive lookup by display name; `social_studies` style is accepted too.
    pub fn parse(name: &str) -> Option<Subject> {
        let wanted = name.trim().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(&wanted))
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_display_and_snake_names() {
        assert_eq!(Subject::parse("Mathematics"), Some(Subject::Mathematics));
        assert_eq!(Subject::parse("social studies"), Some(Subject::SocialStudies));
        assert_eq!(Subject::parse("social_studies"), Some(Subject::SocialStudies));
        assert_eq!(Subject::parse("Astronomy"), None);
    }
}
