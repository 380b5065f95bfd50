// English question bank, grades 6-12.
use super::{GradeSet, Question};

pub static ENGLISH: &[GradeSet] = &[
    (6, &[
        Question::new(
            "What is the past tense of \"go\"?",
            ["went", "goed", "gone", "going"], 0, 10,
            "The past tense of \"go\" is \"went\"",
        ),
        Question::new(
            "Which word is an adjective in: \"The beautiful sunset\"?",
            ["beautiful", "sunset", "the", "All of them"], 0, 12,
            "\"Beautiful\" describes the noun \"sunset\"",
        ),
    ]),
    (7, &[
        Question::new(
            "What is a synonym for \"happy\"?",
            ["joyful", "sad", "angry", "tired"], 0, 12,
            "Joyful means the same as happy",
        ),
        Question::new(
            "Which sentence is in passive voice?",
            ["The book was read by me", "I read the book", "Reading the book", "I will read the book"], 0, 15,
            "Passive voice: subject receives the action",
        ),
    ]),
    (8, &[
        Question::new(
            "What is the literary device in: \"The stars danced playfully\"?",
            ["Personification", "Metaphor", "Simile", "Alliteration"], 0, 18,
            "Giving human qualities to non-human things",
        ),
        Question::new(
            "What is the plural of \"crisis\"?",
            ["crises", "crisises", "crisis", "crisi"], 0, 20,
            "Words ending in -is become -es in plural",
        ),
    ]),
    (9, &[
        Question::new(
            "What is the theme of a story?",
            ["The main message or lesson", "The setting", "The characters", "The plot"], 0, 22,
            "Theme is the central message or lesson",
        ),
        Question::new(
            "Which is a compound sentence?",
            ["I like tea, and she likes coffee", "I like tea", "Liking tea", "Tea is good"], 0, 25,
            "Compound sentence has two independent clauses joined by conjunction",
        ),
    ]),
    (10, &[
        Question::new(
            "What is the tone of: \"I can't believe you did that!\"?",
            ["Shocked/Disappointed", "Happy", "Calm", "Excited"], 0, 25,
            "The exclamation and \"can't believe\" show shock",
        ),
        Question::new(
            "What is the purpose of a thesis statement?",
            ["To state the main argument", "To provide evidence", "To conclude", "To introduce characters"], 0, 30,
            "Thesis statement presents the main argument",
        ),
    ]),
    (11, &[
        Question::new(
            "What is the difference between \"affect\" and \"effect\"?",
            [
                "Affect is a verb, effect is a noun",
                "Effect is a verb, affect is a noun",
                "They are the same",
                "They are opposites",
            ], 0, 30,
            "Affect (verb) = to influence; Effect (noun) = result",
        ),
        Question::new(
            "What is the purpose of a counterargument?",
            ["To address opposing views", "To support your argument", "To conclude", "To introduce the topic"], 0, 35,
            "Counterarguments address opposing viewpoints",
        ),
    ]),
    (12, &[
        Question::new(
            "What is the purpose of rhetorical questions?",
            ["To engage the audience", "To provide answers", "To confuse readers", "To end arguments"], 0, 35,
            "Rhetorical questions engage and make readers think",
        ),
        Question::new(
            "What is the difference between denotation and connotation?",
            [
                "Denotation is literal meaning, connotation is implied meaning",
                "Connotation is literal, denotation is implied",
                "They are the same",
                "They are opposites",
            ], 0, 40,
            "Denotation = dictionary meaning; Connotation = emotional/implied meaning",
        ),
    ]),
];
