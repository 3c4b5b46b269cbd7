//! Reference data for the built-in diseases
//!
//! Loaded into empty stores so a fresh deployment can answer predictions for
//! every profile in the built-in keyword model.

use symptom_engine::ReferenceRecord;

use crate::models::Organ;

struct SeedDisease {
    name: &'static str,
    organ_system: &'static str,
    severity: &'static str,
    description: &'static str,
    symptoms: &'static str,
    causes: &'static str,
    transmission: &'static str,
    precautions: &'static str,
    treatment: &'static str,
    medicines: &'static str,
    prevalence: &'static str,
}

const DISEASES: &[SeedDisease] = &[
    SeedDisease {
        name: "Dengue",
        organ_system: "Circulatory",
        severity: "High",
        description: "Viral infection spread by Aedes mosquitoes that can progress to severe bleeding.",
        symptoms: "High fever, severe headache, pain behind the eyes, joint pain, muscle pain, rash",
        causes: "Dengue virus (DENV 1-4)",
        transmission: "Bite of infected Aedes aegypti mosquitoes",
        precautions: "Remove standing water, use mosquito repellent and nets",
        treatment: "Rest, oral fluids, monitoring of platelet count",
        medicines: "Paracetamol; avoid aspirin and ibuprofen",
        prevalence: "Endemic, peaks during the monsoon season",
    },
    SeedDisease {
        name: "Tuberculosis",
        organ_system: "Respiratory",
        severity: "High",
        description: "Chronic bacterial infection that mainly affects the lungs.",
        symptoms: "Persistent cough, coughing blood, night sweats, weight loss, fever, chest pain",
        causes: "Mycobacterium tuberculosis",
        transmission: "Airborne droplets from an infected person",
        precautions: "BCG vaccination, ventilation, completing the full course of treatment",
        treatment: "Directly observed multi-drug therapy for at least six months",
        medicines: "Isoniazid, rifampicin, pyrazinamide, ethambutol",
        prevalence: "High burden; national elimination programme in place",
    },
    SeedDisease {
        name: "Typhoid",
        organ_system: "Digestive",
        severity: "Medium",
        description: "Systemic bacterial infection acquired from contaminated food or water.",
        symptoms: "Prolonged fever, weakness, abdominal pain, headache, loss of appetite",
        causes: "Salmonella Typhi",
        transmission: "Contaminated food and water",
        precautions: "Safe drinking water, hand hygiene, typhoid vaccination",
        treatment: "Antibiotics and hydration",
        medicines: "Azithromycin, ceftriaxone",
        prevalence: "Common in areas with poor sanitation",
    },
    SeedDisease {
        name: "Malaria",
        organ_system: "Circulatory",
        severity: "High",
        description: "Parasitic infection of red blood cells transmitted by mosquitoes.",
        symptoms: "Fever with chills, sweating, headache, nausea, body ache",
        causes: "Plasmodium parasites",
        transmission: "Bite of infected Anopheles mosquitoes",
        precautions: "Bed nets, repellents, clearing stagnant water",
        treatment: "Antimalarial therapy based on species",
        medicines: "Artemisinin combination therapy, chloroquine",
        prevalence: "Seasonal, concentrated in forested and tribal regions",
    },
    SeedDisease {
        name: "Diabetes",
        organ_system: "Endocrine",
        severity: "Medium",
        description: "Chronic condition with elevated blood sugar.",
        symptoms: "Frequent urination, excessive thirst, unexplained weight loss, fatigue, blurred vision",
        causes: "Insulin deficiency or resistance",
        transmission: "Not contagious",
        precautions: "Balanced diet, regular exercise, periodic sugar checks",
        treatment: "Lifestyle changes, oral drugs or insulin",
        medicines: "Metformin, insulin",
        prevalence: "Very common among adults",
    },
    SeedDisease {
        name: "Hypertension",
        organ_system: "Circulatory",
        severity: "Medium",
        description: "Persistently raised blood pressure.",
        symptoms: "Headache, dizziness, chest pain, blurred vision",
        causes: "Genetics, high salt intake, obesity, stress",
        transmission: "Not contagious",
        precautions: "Reduce salt, exercise, avoid tobacco",
        treatment: "Lifestyle changes and antihypertensive drugs",
        medicines: "Amlodipine, telmisartan",
        prevalence: "Affects a large share of adults",
    },
    SeedDisease {
        name: "Hepatitis",
        organ_system: "Digestive",
        severity: "High",
        description: "Inflammation of the liver, usually viral.",
        symptoms: "Jaundice, yellow eyes, dark urine, abdominal pain, fatigue",
        causes: "Hepatitis viruses A to E",
        transmission: "Contaminated water (A, E) or blood and body fluids (B, C)",
        precautions: "Vaccination, safe water, screened blood products",
        treatment: "Supportive care; antivirals for chronic infection",
        medicines: "Tenofovir, entecavir",
        prevalence: "Hepatitis A and E outbreaks are common",
    },
    SeedDisease {
        name: "Asthma",
        organ_system: "Respiratory",
        severity: "Medium",
        description: "Chronic inflammation and narrowing of the airways.",
        symptoms: "Wheezing, shortness of breath, chest tightness, coughing",
        causes: "Allergens, pollution, respiratory infections",
        transmission: "Not contagious",
        precautions: "Avoid triggers, keep a reliever inhaler",
        treatment: "Inhaled bronchodilators and corticosteroids",
        medicines: "Salbutamol, budesonide",
        prevalence: "Common in urban areas",
    },
    SeedDisease {
        name: "Pneumonia",
        organ_system: "Respiratory",
        severity: "High",
        description: "Infection that inflames the air sacs of the lungs.",
        symptoms: "Cough with phlegm, fever, chest pain, difficulty breathing",
        causes: "Bacteria, viruses or fungi",
        transmission: "Respiratory droplets",
        precautions: "Pneumococcal vaccination, hand hygiene",
        treatment: "Antibiotics, oxygen when needed",
        medicines: "Amoxicillin, azithromycin",
        prevalence: "Leading infectious cause of death in young children",
    },
    SeedDisease {
        name: "Gastroenteritis",
        organ_system: "Digestive",
        severity: "Low",
        description: "Inflammation of the stomach and intestines.",
        symptoms: "Diarrhea, vomiting, stomach cramps, nausea, mild fever",
        causes: "Viruses, bacteria, contaminated food",
        transmission: "Contaminated food, water or hands",
        precautions: "Hand washing, safe food handling",
        treatment: "Oral rehydration and rest",
        medicines: "ORS, zinc supplements",
        prevalence: "Very common, especially in summer",
    },
    SeedDisease {
        name: "Cholera",
        organ_system: "Digestive",
        severity: "High",
        description: "Acute diarrheal infection that can cause rapid dehydration.",
        symptoms: "Watery diarrhea, vomiting, dehydration, leg cramps",
        causes: "Vibrio cholerae",
        transmission: "Contaminated water and food",
        precautions: "Safe drinking water, sanitation, oral cholera vaccine",
        treatment: "Aggressive rehydration",
        medicines: "ORS, doxycycline",
        prevalence: "Outbreaks during floods and monsoon",
    },
    SeedDisease {
        name: "Chikungunya",
        organ_system: "Musculoskeletal",
        severity: "Medium",
        description: "Mosquito-borne viral disease known for severe joint pain.",
        symptoms: "Sudden fever, severe joint pain, joint swelling, rash, headache",
        causes: "Chikungunya virus",
        transmission: "Bite of infected Aedes mosquitoes",
        precautions: "Mosquito control and personal protection",
        treatment: "Rest, fluids, pain relief",
        medicines: "Paracetamol",
        prevalence: "Periodic outbreaks",
    },
    SeedDisease {
        name: "Common Cold",
        organ_system: "Respiratory",
        severity: "Low",
        description: "Mild viral infection of the nose and throat.",
        symptoms: "Runny nose, sneezing, sore throat, mild cough, congestion",
        causes: "Rhinoviruses",
        transmission: "Droplets and contaminated surfaces",
        precautions: "Hand washing, covering coughs",
        treatment: "Rest and fluids",
        medicines: "Paracetamol, saline nasal drops",
        prevalence: "Extremely common",
    },
];

const ORGANS: &[(&str, &str, &str)] = &[
    ("Heart", "Circulatory", "Pumps blood through the body"),
    ("Intestines", "Digestive", "Absorb nutrients and water"),
    ("Joints", "Musculoskeletal", "Allow movement between bones"),
    ("Liver", "Digestive", "Filters blood and produces bile"),
    ("Lungs", "Respiratory", "Exchange oxygen and carbon dioxide"),
    ("Pancreas", "Endocrine", "Produces insulin and digestive enzymes"),
    ("Stomach", "Digestive", "Breaks down food"),
];

/// Reference records with ids assigned from 1 in seed order
pub fn reference_records() -> Vec<ReferenceRecord> {
    DISEASES
        .iter()
        .zip(1i64..)
        .map(|(seed, disease_id)| ReferenceRecord {
            disease_id,
            disease_name: seed.name.to_string(),
            organ_system: Some(seed.organ_system.to_string()),
            severity_level: Some(seed.severity.to_string()),
            description: Some(seed.description.to_string()),
            symptoms: Some(seed.symptoms.to_string()),
            causes: Some(seed.causes.to_string()),
            transmission: Some(seed.transmission.to_string()),
            precautions: Some(seed.precautions.to_string()),
            treatment: Some(seed.treatment.to_string()),
            medicines: Some(seed.medicines.to_string()),
            prevalence_in_india: Some(seed.prevalence.to_string()),
        })
        .collect()
}

pub fn organs() -> Vec<Organ> {
    ORGANS
        .iter()
        .zip(1i64..)
        .map(|((name, system, description), organ_id)| Organ {
            organ_id,
            organ_name: (*name).to_string(),
            organ_system: (*system).to_string(),
            description: Some((*description).to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_engine::KeywordModel;

    #[test]
    fn test_every_builtin_profile_has_a_record() {
        let records = reference_records();
        for profile in KeywordModel::builtin().profiles() {
            assert!(
                records.iter().any(|r| r.name_contains(&profile.disease_key)),
                "no seed record for {}",
                profile.disease_key
            );
        }
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i64> = reference_records().iter().map(|r| r.disease_id).collect();
        assert_eq!(ids, (1..=13).collect::<Vec<_>>());
    }
}
