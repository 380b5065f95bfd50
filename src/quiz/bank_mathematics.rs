// Mathematics question bank, grades 6-12.
use super::{GradeSet, Question};

pub static MATHEMATICS: &[GradeSet] = &[
    (6, &[
        Question::new(
            "If a farmer has 24 mangoes and gives away 8, how many are left?",
            ["16", "32", "18", "14"], 0, 10,
            "24 - 8 = 16 mangoes left",
        ),
        Question::new(
            "What is the perimeter of a square field with each side 12 meters?",
            ["48 meters", "24 meters", "36 meters", "144 meters"], 0, 15,
            "Perimeter = 4 × side = 4 × 12 = 48 meters",
        ),
        Question::new(
            "If 1 kg of rice costs ₹50, how much will 3 kg cost?",
            ["₹150", "₹100", "₹200", "₹120"], 0, 12,
            "3 × ₹50 = ₹150",
        ),
    ]),
    (7, &[
        Question::new(
            "What is 15% of 200?",
            ["30", "25", "35", "40"], 0, 15,
            "15% of 200 = (15/100) × 200 = 30",
        ),
        Question::new(
            "If a train travels 120 km in 2 hours, what is its speed?",
            ["60 km/h", "240 km/h", "40 km/h", "80 km/h"], 0, 18,
            "Speed = Distance/Time = 120/2 = 60 km/h",
        ),
    ]),
    (8, &[
        Question::new(
            "Solve: 2x + 5 = 13",
            ["x = 4", "x = 3", "x = 5", "x = 6"], 0, 20,
            "2x = 13 - 5 = 8, so x = 4",
        ),
        Question::new(
            "What is the area of a circle with radius 7 cm? (Use π = 22/7)",
            ["154 cm²", "44 cm²", "88 cm²", "308 cm²"], 0, 25,
            "Area = πr² = (22/7) × 7² = 154 cm²",
        ),
    ]),
    (9, &[
        Question::new(
            "What is the value of x² - 4 when x = 3?",
            ["5", "7", "9", "11"], 0, 20,
            "x² - 4 = 3² - 4 = 9 - 4 = 5",
        ),
        Question::new(
            "In a right triangle, if one angle is 30°, what is the other acute angle?",
            ["60°", "45°", "90°", "120°"], 0, 25,
            "Sum of angles = 180°, so 90° + 30° + x = 180°, x = 60°",
        ),
    ]),
    (10, &[
        Question::new(
            "What is the discriminant of the quadratic equation x² - 5x + 6 = 0?",
            ["1", "-1", "25", "49"], 0, 30,
            "Discriminant = b² - 4ac = 25 - 24 = 1",
        ),
        Question::new(
            "What is the probability of getting a head when tossing a coin?",
            ["1/2", "1/4", "1/3", "2/3"], 0, 25,
            "There are 2 outcomes, 1 favorable, so P = 1/2",
        ),
    ]),
    (11, &[
        Question::new(
            "What is the derivative of x³?",
            ["3x²", "x²", "3x", "x³/3"], 0, 35,
            "d/dx(x³) = 3x²",
        ),
        Question::new(
            "What is the value of sin(30°)?",
            ["1/2", "√3/2", "1", "0"], 0, 30,
            "sin(30°) = 1/2",
        ),
    ]),
    (12, &[
        Question::new(
            "What is the integral of 2x?",
            ["x² + C", "2x² + C", "x + C", "2 + C"], 0, 40,
            "∫2x dx = 2(x²/2) + C = x² + C",
        ),
        Question::new(
            "What is the limit of (x² - 1)/(x - 1) as x approaches 1?",
            ["2", "0", "1", "∞"], 0, 45,
            "Factor: (x-1)(x+1)/(x-1) = x+1, so limit = 2",
        ),
    ]),
];
