// Built-in symptom table. Keys match disease names in the reference store
// through a case-insensitive contains lookup.

use crate::model::KeywordProfile;

pub(crate) fn profiles() -> Vec<KeywordProfile> {
    vec![
        KeywordProfile::new(
            "dengue",
            [
                "high fever",
                "headache",
                "pain behind eyes",
                "joint pain",
                "muscle pain",
                "rash",
                "bleeding",
            ],
            [("high fever", 3), ("pain behind eyes", 3), ("joint pain", 2), ("rash", 2)],
        ),
        KeywordProfile::new(
            "tuberculosis",
            [
                "persistent cough",
                "cough",
                "blood in cough",
                "chest pain",
                "night sweats",
                "weight loss",
                "fever",
            ],
            [
                ("persistent cough", 3),
                ("blood in cough", 4),
                ("night sweats", 2),
                ("weight loss", 2),
            ],
        ),
        KeywordProfile::new(
            "typhoid",
            ["prolonged fever", "weakness", "stomach pain", "headache", "loss of appetite"],
            [("prolonged fever", 3), ("stomach pain", 2), ("weakness", 2)],
        ),
        KeywordProfile::new(
            "malaria",
            ["cyclic fever", "chills", "sweating", "headache", "nausea", "vomiting", "muscle pain"],
            [("cyclic fever", 4), ("chills", 3), ("sweating", 2)],
        ),
        KeywordProfile::new(
            "diabetes",
            [
                "increased thirst",
                "frequent urination",
                "weight loss",
                "fatigue",
                "blurred vision",
                "slow healing",
            ],
            [("increased thirst", 3), ("frequent urination", 3), ("blurred vision", 2)],
        ),
        // "severe headache" is weighted but not a keyword; it only raises the
        // denominator.
        KeywordProfile::new(
            "hypertension",
            ["headache", "dizziness", "nosebleed", "chest pain"],
            [("severe headache", 2), ("dizziness", 2), ("nosebleed", 2)],
        ),
        KeywordProfile::new(
            "hepatitis",
            ["jaundice", "yellow eyes", "yellow skin", "dark urine", "pale stools", "fever", "fatigue"],
            [("jaundice", 4), ("yellow eyes", 4), ("dark urine", 3)],
        ),
        KeywordProfile::new(
            "asthma",
            [
                "wheezing",
                "shortness of breath",
                "chest tightness",
                "coughing at night",
                "difficulty breathing",
            ],
            [("wheezing", 4), ("shortness of breath", 3), ("chest tightness", 2)],
        ),
        KeywordProfile::new(
            "pneumonia",
            ["fever", "cough with phlegm", "chest pain", "shortness of breath", "chills"],
            [("cough with phlegm", 3), ("chest pain", 3), ("fever", 2)],
        ),
        KeywordProfile::new(
            "gastroenteritis",
            ["diarrhea", "vomiting", "stomach cramps", "nausea", "fever", "dehydration"],
            [("diarrhea", 3), ("vomiting", 3), ("stomach cramps", 2)],
        ),
        KeywordProfile::new(
            "cholera",
            [
                "severe diarrhea",
                "watery diarrhea",
                "rice water stools",
                "vomiting",
                "dehydration",
                "leg cramps",
            ],
            [("severe diarrhea", 4), ("watery diarrhea", 4), ("dehydration", 3)],
        ),
        KeywordProfile::new(
            "chikungunya",
            ["high fever", "severe joint pain", "muscle pain", "headache", "rash", "fatigue"],
            [("severe joint pain", 4), ("high fever", 3), ("rash", 2)],
        ),
        KeywordProfile::new(
            "common cold",
            ["runny nose", "sneezing", "sore throat", "mild fever", "cough", "congestion"],
            [("runny nose", 2), ("sneezing", 2), ("sore throat", 2)],
        ),
    ]
}
