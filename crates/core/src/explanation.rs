//! Patient-friendly prescription explanation built from NLP entities

use serde::{Deserialize, Serialize};

/// Entity returned by the language service's `analyzeEntities` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,

    #[serde(rename = "type")]
    pub entity_type: String,

    #[serde(default)]
    pub salience: f64,
}

impl Entity {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            salience: 0.0,
        }
    }
}

/// Entity type labels the explanation reads
pub mod entity_type {
    pub const MEDICINE: &str = "MEDICINE";
    pub const STRENGTH: &str = "STRENGTH";
    pub const FREQUENCY: &str = "FREQUENCY";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub instructions: String,
    pub duration: String,
    pub timing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideEffects {
    pub common: Vec<String>,
    pub severe: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    pub foods: Vec<String>,
    pub activities: Vec<String>,
}

/// Simplified explanation rendered to the patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionExplanation {
    pub medication: Medication,
    pub usage: Usage,
    pub side_effects: SideEffects,
    pub restrictions: Restrictions,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Name of the first entity of the given type, or an empty string
fn first_of(entities: &[Entity], wanted: &str) -> String {
    entities
        .iter()
        .find(|e| e.entity_type == wanted)
        .map(|e| e.name.clone())
        .unwrap_or_default()
}

impl PrescriptionExplanation {
    /// Build an explanation from extracted entities.
    ///
    /// Only the medication block comes from the entities; the guidance
    /// sections are the general advice shown for blood-pressure medication.
    pub fn from_entities(entities: &[Entity]) -> Self {
        Self {
            medication: Medication {
                name: first_of(entities, entity_type::MEDICINE),
                dosage: first_of(entities, entity_type::STRENGTH),
                frequency: first_of(entities, entity_type::FREQUENCY),
                purpose: "For blood pressure and heart health".to_string(),
            },
            usage: Usage {
                instructions: "Take one tablet by mouth every morning".to_string(),
                duration: "Continue as prescribed by your doctor".to_string(),
                timing: "Best taken at the same time each day".to_string(),
            },
            side_effects: SideEffects {
                common: strings(&["Dry cough", "Dizziness", "Headache", "Fatigue"]),
                severe: strings(&[
                    "Severe allergic reaction",
                    "Kidney problems",
                    "High potassium levels",
                ]),
            },
            restrictions: Restrictions {
                foods: strings(&[
                    "Avoid excessive salt",
                    "Limit potassium-rich foods",
                    "Moderate alcohol",
                ]),
                activities: strings(&["Avoid sudden position changes", "Stay hydrated"]),
            },
        }
    }
}
