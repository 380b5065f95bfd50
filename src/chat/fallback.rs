//! Canned answers used whenever the chat endpoint cannot be reached.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Math,
    Science,
    Help,
    Default,
}

const GREETINGS: [&str; 3] = [
    "Hello! I'm excited to help you learn! What subject would you like to explore today?",
    "Hi there! I'm your AI study buddy. What can I help you understand better?",
    "Welcome! I'm here to make learning fun and easy. What would you like to study?",
];

const MATH: [&str; 3] = [
    "Mathematics is fascinating! Let me break this down step by step for you.",
    "Great question about math! Here's how we can approach this problem...",
    "I love helping with math problems! Let me explain this concept clearly.",
];

const SCIENCE: [&str; 3] = [
    "Science is all about understanding the world around us! Let me explain this concept.",
    "Excellent scientific question! Here's what's happening here...",
    "Science can be complex, but I'll make it simple and clear for you.",
];

const HELP: [&str; 3] = [
    "I'm here to help! You can ask me about any subject - math, science, history, literature, and more.",
    "Feel free to ask me anything! I can explain concepts, provide examples, or help with practice problems.",
    "I'm your learning companion! Ask me to explain, give examples, or help you practice any topic.",
];

const DEFAULT: [&str; 3] = [
    "That's an interesting question! Let me help you understand this better.",
    "I'd be happy to explain that! Here's what I think you're asking about...",
    "Great question! Let me break this down in a way that's easy to understand.",
];

impl Category {
    /// First matching keyword group wins, in this order. Plain substring match.
    pub fn of(message: &str) -> Category {
        let m = message.to_lowercase();
        let any = |words: &[&str]| words.iter().any(|w| m.contains(w));
        if any(&["hello", "hi", "hey"]) {
            Category::Greeting
        } else if any(&["math", "calculate", "equation"]) {
            Category::Math
        } else if any(&["science", "physics", "chemistry", "biology"]) {
            Category::Science
        } else if any(&["help", "what can you do"]) {
            Category::Help
        } else {
            Category::Default
        }
    }

    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Category::Greeting => &GREETINGS,
            Category::Math => &MATH,
            Category::Science => &SCIENCE,
            Category::Help => &HELP,
            Category::Default => &DEFAULT,
        }
    }
}

/// One random canned answer for the message's category, with a subject nudge
/// appended when the learner has a subject selected.
pub fn fallback_response<R: Rng>(message: &str, subject: Option<&str>, rng: &mut R) -> String {
    let pick = Category::of(message)
        .responses()
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT[0]);
    match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) => format!(
            "{pick}\n\nSince you're studying {subject}, I can provide more specific examples and explanations related to that subject. What specific aspect of {subject} would you like to explore?"
        ),
        None => pick.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_keyword_priority() {
        assert_eq!(Category::of("Hello there"), Category::Greeting);
        assert_eq!(Category::of("calculate 2+2"), Category::Math);
        assert_eq!(Category::of("BIOLOGY notes"), Category::Science);
        assert_eq!(Category::of("can you help"), Category::Help);
        assert_eq!(Category::of("photosynthesis?"), Category::Default);
        // "which" contains "hi": greeting wins over science.
        assert_eq!(Category::of("which science topic"), Category::Greeting);
    }
}
