// Built-in symptom pattern table
use crate::catalog::PatternEntry;
use crate::model::{Condition, Level};

use Level::{High, Low, Medium};

fn entry(
    keyword: &str,
    conditions: &[(&str, u8, Level)],
    recommendations: &[&str],
    urgency: Level,
) -> PatternEntry {
    PatternEntry {
        keyword: keyword.to_string(),
        conditions: conditions
            .iter()
            .map(|&(name, confidence, severity)| Condition::new(name, confidence, severity))
            .collect(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        urgency,
    }
}

/// Reference patterns in declaration order. The order decides the order in
/// which conditions and recommendations of several matches are appended.
pub fn patterns() -> Vec<PatternEntry> {
    vec![
        entry(
            "headache",
            &[
                ("Tension Headache", 80, Low),
                ("Migraine", 70, Medium),
                ("Sinus Headache", 65, Low),
            ],
            &[
                "Rest in a quiet, dark room",
                "Stay hydrated",
                "Consider over-the-counter pain relievers",
                "Avoid bright lights and loud noises",
            ],
            Low,
        ),
        entry(
            "fever",
            &[
                ("Viral Infection", 85, Medium),
                ("Bacterial Infection", 70, Medium),
                ("Inflammatory Condition", 60, Medium),
            ],
            &[
                "Monitor temperature regularly",
                "Stay hydrated with water and clear fluids",
                "Rest and avoid strenuous activity",
                "Consider fever-reducing medications if above 101°F",
            ],
            Medium,
        ),
        entry(
            "chest pain",
            &[
                ("Musculoskeletal Pain", 75, Medium),
                ("Acid Reflux", 70, Low),
                ("Anxiety", 65, Low),
            ],
            &[
                "Seek immediate medical attention if pain is severe",
                "Avoid strenuous activity",
                "Monitor for shortness of breath",
                "Consider antacids if related to eating",
            ],
            High,
        ),
        entry(
            "shortness of breath",
            &[
                ("Anxiety or Panic Attack", 80, Medium),
                ("Respiratory Infection", 75, Medium),
                ("Allergic Reaction", 70, Medium),
            ],
            &[
                "Try deep breathing exercises",
                "Sit in an upright position",
                "Seek immediate medical attention if severe",
                "Avoid triggers like smoke or allergens",
            ],
            High,
        ),
        entry(
            "abdominal pain",
            &[
                ("Gastritis", 80, Medium),
                ("Food Poisoning", 75, Medium),
                ("Irritable Bowel Syndrome", 70, Low),
            ],
            &[
                "Avoid spicy or fatty foods",
                "Stay hydrated",
                "Consider over-the-counter antacids",
                "Seek medical attention if pain is severe or persistent",
            ],
            Medium,
        ),
        entry(
            "dizziness",
            &[
                ("Benign Paroxysmal Positional Vertigo", 75, Medium),
                ("Inner Ear Infection", 70, Medium),
                ("Low Blood Pressure", 65, Low),
            ],
            &[
                "Move slowly and avoid sudden movements",
                "Stay hydrated",
                "Avoid driving or operating machinery",
                "Consider seeing an ENT specialist if persistent",
            ],
            Medium,
        ),
        entry(
            "fatigue",
            &[
                ("Sleep Deprivation", 85, Low),
                ("Stress or Anxiety", 80, Low),
                ("Vitamin Deficiency", 70, Low),
            ],
            &[
                "Ensure 7-9 hours of quality sleep",
                "Practice stress management techniques",
                "Maintain a balanced diet",
                "Consider multivitamins if diet is poor",
            ],
            Low,
        ),
        entry(
            "nausea",
            &[
                ("Gastroenteritis", 80, Medium),
                ("Food Poisoning", 75, Medium),
                ("Morning Sickness", 70, Low),
            ],
            &[
                "Stay hydrated with small sips of water",
                "Avoid solid foods until nausea subsides",
                "Try ginger tea or ginger candies",
                "Seek medical attention if vomiting persists for more than 24 hours",
            ],
            Medium,
        ),
        entry(
            "joint pain",
            &[
                ("Muscle Strain", 80, Low),
                ("Arthritis", 70, Medium),
                ("Fibromyalgia", 60, Medium),
            ],
            &[
                "Apply ice or heat therapy",
                "Gentle stretching exercises",
                "Consider over-the-counter pain relievers",
                "Avoid overuse of affected joints",
            ],
            Low,
        ),
        entry(
            "rash",
            &[
                ("Contact Dermatitis", 80, Low),
                ("Allergic Reaction", 75, Medium),
                ("Eczema", 70, Low),
            ],
            &[
                "Avoid scratching the affected area",
                "Use gentle, fragrance-free skincare products",
                "Consider over-the-counter hydrocortisone cream",
                "Seek medical attention if rash spreads or becomes severe",
            ],
            Low,
        ),
    ]
}
