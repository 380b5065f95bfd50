// Science question bank, grades 6-12.
use super::{GradeSet, Question};

pub static SCIENCE: &[GradeSet] = &[
    (6, &[
        Question::new(
            "What gas do plants absorb from the atmosphere during photosynthesis?",
            ["Carbon dioxide", "Oxygen", "Nitrogen", "Hydrogen"], 0, 12,
            "Plants absorb CO₂ and release O₂ during photosynthesis",
        ),
        Question::new(
            "Which part of the plant absorbs water from the soil?",
            ["Roots", "Leaves", "Stem", "Flowers"], 0, 10,
            "Roots absorb water and nutrients from the soil",
        ),
    ]),
    (7, &[
        Question::new(
            "What is the chemical symbol for gold?",
            ["Au", "Ag", "Go", "Gd"], 0, 15,
            "Au comes from the Latin word \"aurum\" meaning gold",
        ),
        Question::new(
            "Which force keeps planets in orbit around the Sun?",
            ["Gravitational force", "Magnetic force", "Electric force", "Frictional force"], 0, 18,
            "Gravity keeps planets in their orbits",
        ),
    ]),
    (8, &[
        Question::new(
            "What is the pH of pure water?",
            ["7", "0", "14", "1"], 0, 20,
            "Pure water is neutral with pH = 7",
        ),
        Question::new(
            "Which organelle is known as the powerhouse of the cell?",
            ["Mitochondria", "Nucleus", "Ribosome", "Chloroplast"], 0, 22,
            "Mitochondria produce energy (ATP) for the cell",
        ),
    ]),
    (9, &[
        Question::new(
            "What is the speed of light in vacuum?",
            ["3 × 10⁸ m/s", "3 × 10⁶ m/s", "3 × 10¹⁰ m/s", "3 × 10⁴ m/s"], 0, 25,
            "Speed of light = 299,792,458 m/s ≈ 3 × 10⁸ m/s",
        ),
        Question::new(
            "What is the chemical formula for methane?",
            ["CH₄", "C₂H₆", "CO₂", "H₂O"], 0, 20,
            "Methane has one carbon and four hydrogen atoms",
        ),
    ]),
    (10, &[
        Question::new(
            "What is the unit of electric current?",
            ["Ampere", "Volt", "Watt", "Ohm"], 0, 25,
            "Ampere (A) is the SI unit of electric current",
        ),
        Question::new(
            "Which blood group is known as the universal donor?",
            ["O negative", "A positive", "B positive", "AB positive"], 0, 30,
            "O negative can be donated to any blood type",
        ),
    ]),
    (11, &[
        Question::new(
            "What is the first law of thermodynamics?",
            [
                "Energy cannot be created or destroyed",
                "Entropy always increases",
                "Heat flows from hot to cold",
                "Pressure and volume are inversely related",
            ], 0, 35,
            "First law states conservation of energy",
        ),
        Question::new(
            "What is the molecular formula for glucose?",
            ["C₆H₁₂O₆", "C₆H₁₀O₅", "C₅H₁₀O₅", "C₆H₁₄O₆"], 0, 30,
            "Glucose has 6 carbons, 12 hydrogens, and 6 oxygens",
        ),
    ]),
    (12, &[
        Question::new(
            "What is the uncertainty principle in quantum mechanics?",
            [
                "Position and momentum cannot be precisely measured simultaneously",
                "Energy and time are inversely related",
                "Wave and particle nature are complementary",
                "All of the above",
            ], 3, 45,
            "Heisenberg uncertainty principle has multiple formulations",
        ),
        Question::new(
            "What is the half-life of Carbon-14?",
            ["5730 years", "573 years", "57300 years", "573000 years"], 0, 40,
            "C-14 has a half-life of approximately 5730 years",
        ),
    ]),
];
