// Social Studies question bank, grades 6-12.
use super::{GradeSet, Question};

pub static SOCIAL_STUDIES: &[GradeSet] = &[
    (6, &[
        Question::new(
            "What is the capital of India?",
            ["New Delhi", "Mumbai", "Kolkata", "Chennai"], 0, 10,
            "New Delhi is the capital of India",
        ),
        Question::new(
            "Which is the largest state in India by area?",
            ["Rajasthan", "Madhya Pradesh", "Maharashtra", "Uttar Pradesh"], 0, 12,
            "Rajasthan is the largest state by area",
        ),
    ]),
    (7, &[
        Question::new(
            "Who was the first Prime Minister of India?",
            ["Jawaharlal Nehru", "Mahatma Gandhi", "Sardar Patel", "Dr. Rajendra Prasad"], 0, 15,
            "Jawaharlal Nehru was the first PM of independent India",
        ),
        Question::new(
            "What is the currency of Japan?",
            ["Yen", "Dollar", "Euro", "Pound"], 0, 12,
            "Japanese Yen is the currency of Japan",
        ),
    ]),
    (8, &[
        Question::new(
            "Which battle marked the beginning of British rule in India?",
            ["Battle of Plassey", "Battle of Panipat", "Battle of Haldighati", "Battle of Buxar"], 0, 18,
            "Battle of Plassey (1757) established British dominance",
        ),
        Question::new(
            "What is the largest ocean on Earth?",
            ["Pacific Ocean", "Atlantic Ocean", "Indian Ocean", "Arctic Ocean"], 0, 15,
            "Pacific Ocean covers about 1/3 of Earth",
        ),
    ]),
    (9, &[
        Question::new(
            "What is the significance of the year 1947 in Indian history?",
            ["India gained independence", "India became a republic", "First general election", "Constitution was adopted"], 0, 20,
            "India gained independence from British rule on August 15, 1947",
        ),
        Question::new(
            "What is the main function of the Parliament?",
            ["To make laws", "To enforce laws", "To interpret laws", "To execute laws"], 0, 22,
            "Parliament is the legislative body that makes laws",
        ),
    ]),
    (10, &[
        Question::new(
            "What is the difference between weather and climate?",
            [
                "Weather is short-term, climate is long-term",
                "Climate is short-term, weather is long-term",
                "They are the same",
                "Weather is global, climate is local",
            ], 0, 25,
            "Weather = daily conditions; Climate = average over time",
        ),
        Question::new(
            "What is the main cause of inflation?",
            ["Increase in money supply", "Decrease in production", "Increase in taxes", "All of the above"], 3, 30,
            "Inflation can be caused by multiple factors",
        ),
    ]),
    (11, &[
        Question::new(
            "What is the concept of federalism?",
            [
                "Division of power between central and state governments",
                "Concentration of power in central government",
                "Power only with state governments",
                "No government power",
            ], 0, 35,
            "Federalism divides power between different levels of government",
        ),
        Question::new(
            "What is the significance of the Green Revolution?",
            ["Increased agricultural production", "Reduced pollution", "Increased industrialization", "Reduced population"], 0, 30,
            "Green Revolution increased food production through new techniques",
        ),
    ]),
    (12, &[
        Question::new(
            "What is the concept of sustainable development?",
            [
                "Development that meets present needs without compromising future",
                "Fast economic growth",
                "Maximum resource extraction",
                "Urban development only",
            ], 0, 40,
            "Sustainable development balances present and future needs",
        ),
        Question::new(
            "What is the role of the judiciary in democracy?",
            ["To interpret and protect the constitution", "To make laws", "To execute laws", "To collect taxes"], 0, 35,
            "Judiciary interprets laws and protects constitutional rights",
        ),
    ]),
];
