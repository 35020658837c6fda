//! Builtin cattle catalog: the question graph and condition checklists.
//!
//! Data only. Structural validation happens in `KnowledgeBase::from_parts`.

use crate::domain::foundation::{ConditionKey, Likelihood, NodeKey, ValidationError};
use super::condition::{Condition, MediaRef};
use super::criterion::Criterion;
use super::node::{Diagnosis, QuestionNode};

type Parts = (
    Vec<Condition>,
    Vec<(NodeKey, QuestionNode)>,
    NodeKey,
    Vec<(String, ConditionKey)>,
);

pub(super) fn builtin() -> Result<Parts, ValidationError> {
    Ok((conditions()?, nodes()?, NodeKey::new("start")?, symptom_map()?))
}

fn binary(
    key: &str,
    prompt: &str,
    yes: &str,
    no: &str,
) -> Result<(NodeKey, QuestionNode), ValidationError> {
    Ok((
        NodeKey::new(key)?,
        QuestionNode::BranchBinary {
            prompt: prompt.to_string(),
            yes: NodeKey::new(yes)?,
            no: NodeKey::new(no)?,
        },
    ))
}

fn terminal(
    key: &str,
    condition: &str,
    name: &str,
    likelihood: u8,
    treatment: &str,
    prevention: &str,
) -> Result<(NodeKey, QuestionNode), ValidationError> {
    Ok((
        NodeKey::new(key)?,
        QuestionNode::Terminal(Diagnosis::new(
            ConditionKey::new(condition)?,
            name,
            Likelihood::new(likelihood),
            treatment,
            prevention,
        )?),
    ))
}

fn nodes() -> Result<Vec<(NodeKey, QuestionNode)>, ValidationError> {
    let start = (
        NodeKey::new("start")?,
        QuestionNode::BranchMultiway {
            prompt: "What is the primary symptom observed?".to_string(),
            options: vec![
                ("Weakness or lethargy".to_string(), NodeKey::new("weakness_q1")?),
                (
                    "Coughing or laboured breathing".to_string(),
                    NodeKey::new("brd_q1")?,
                ),
                ("Diarrhoea".to_string(), NodeKey::new("diarrhea_q1")?),
                (
                    "Lameness or foot/mouth issues".to_string(),
                    NodeKey::new("lameness_q1")?,
                ),
                (
                    "Weight loss or poor condition".to_string(),
                    NodeKey::new("weightloss_q1")?,
                ),
                (
                    "Eye discharge or cloudiness".to_string(),
                    NodeKey::new("eye_q1")?,
                ),
                (
                    "Nervous signs (tremors, aggression)".to_string(),
                    NodeKey::new("nervous_q1")?,
                ),
                (
                    "Recumbency or inability to stand".to_string(),
                    NodeKey::new("recumbent_q1")?,
                ),
                ("Other/Unclear".to_string(), NodeKey::new("context_q1")?),
            ],
        },
    );

    Ok(vec![
        start,
        binary(
            "weakness_q1",
            "Is the cow eating normally?",
            "weakness_q2",
            "weakness_q3",
        )?,
        binary(
            "weakness_q2",
            "Is there any sign of mineral deficiency (e.g. chewing soil)?",
            "pica_final",
            "unknown_final",
        )?,
        binary(
            "weakness_q3",
            "Has the cow recently calved?",
            "milk_fever_final",
            "ketosis_final",
        )?,
        binary(
            "brd_q1",
            "Is the cow coughing or showing abnormal breathing sounds (e.g. wheezing)?",
            "brd_q2",
            "unknown_final",
        )?,
        binary(
            "brd_q2",
            "Is there mucopurulent nasal discharge (thick and cloudy)?",
            "brd_q3",
            "unknown_final",
        )?,
        binary(
            "brd_q3",
            "Is the cow's rectal temperature above 39.5°C?",
            "brd_q4",
            "unknown_final",
        )?,
        binary(
            "brd_q4",
            "Has the cow recently been transported, weaned, or exposed to new animals?",
            "brd_final",
            "unknown_final",
        )?,
        binary(
            "diarrhea_q1",
            "Is the diarrhea watery and persistent?",
            "bvd_q1",
            "coccidiosis_q1",
        )?,
        binary(
            "bvd_q1",
            "Is the cow experiencing diarrhea and fever for more than 2 days?",
            "bvd_q2",
            "unknown_final",
        )?,
        binary(
            "bvd_q2",
            "Is the animal less than 24 months old or pregnant?",
            "bvd_q3",
            "unknown_final",
        )?,
        binary(
            "bvd_q3",
            "Are there signs of nasal or eye discharge and depression?",
            "bvd_q4",
            "unknown_final",
        )?,
        binary(
            "bvd_q4",
            "Has the animal shown signs of immunosuppression such as persistent infections?",
            "bvd_q5",
            "unknown_final",
        )?,
        binary(
            "bvd_q5",
            "Has the animal had contact with persistently infected animals or wildlife?",
            "bvd_q6",
            "unknown_final",
        )?,
        binary(
            "bvd_q6",
            "Was the animal vaccinated against BVD within the past year?",
            "unknown_final",
            "bvd_final",
        )?,
        binary(
            "coccidiosis_q1",
            "Is the calf under 6 months of age?",
            "coccidiosis_q2",
            "unknown_final",
        )?,
        binary(
            "coccidiosis_q2",
            "Is there watery or bloody diarrhea?",
            "coccidiosis_q3",
            "unknown_final",
        )?,
        binary(
            "coccidiosis_q3",
            "Is the calf weak, dehydrated, and showing signs of straining or tenesmus?",
            "coccidiosis_q4",
            "unknown_final",
        )?,
        binary(
            "coccidiosis_q4",
            "Has the calf recently been weaned, transported, or exposed to new groups?",
            "coccidiosis_q5",
            "unknown_final",
        )?,
        binary(
            "coccidiosis_q5",
            "Is the environment dirty, overcrowded, humid, or poorly drained?",
            "coccidiosis_final",
            "unknown_final",
        )?,
        binary(
            "lameness_q1",
            "Is the lameness localized to a single limb?",
            "lameness_q2",
            "lameness_q3",
        )?,
        binary(
            "lameness_q2",
            "Is there swelling or heat in the affected limb?",
            "lameness_q4",
            "lameness_q5",
        )?,
        binary(
            "lameness_q3",
            "Is the cow showing multiple foot lesions or difficulty walking?",
            "fmd_q1",
            "unknown_final",
        )?,
        binary(
            "lameness_q4",
            "Does the hoof have a foul smell or discharge between the claws?",
            "footrot_final",
            "arthritis_final",
        )?,
        binary(
            "lameness_q5",
            "Is there a history of trauma or recent injury?",
            "arthritis_final",
            "unknown_final",
        )?,
        binary(
            "fmd_q1",
            "Are there ulcers or blisters on the mouth or feet?",
            "fmd_final",
            "unknown_final",
        )?,
        binary(
            "weightloss_q1",
            "Is appetite normal despite weight loss?",
            "johnes_q1",
            "ketosis_final",
        )?,
        binary(
            "johnes_q1",
            "Is the cow over 2 years old?",
            "johnes_q2",
            "unknown_final",
        )?,
        binary(
            "johnes_q2",
            "Is there chronic diarrhea with normal appetite?",
            "johnes_q3",
            "unknown_final",
        )?,
        binary(
            "johnes_q3",
            "Has there been gradual decline in condition over months?",
            "johnes_q4",
            "unknown_final",
        )?,
        binary(
            "johnes_q4",
            "Has the cow been in contact with known Johne's positive herds?",
            "johnes_final",
            "unknown_final",
        )?,
        binary(
            "eye_q1",
            "Is there ulceration or cloudiness in the eye?",
            "ibk_final",
            "unknown_final",
        )?,
        binary(
            "nervous_q1",
            "Is the cow showing signs of circling or head pressing?",
            "neurological_final",
            "unknown_final",
        )?,
        binary(
            "recumbent_q1",
            "Is the cow alert but unable to rise?",
            "milk_fever_final",
            "unknown_final",
        )?,
        binary(
            "context_q1",
            "Have there been recent changes in weather or feed?",
            "stress_related_final",
            "unknown_final",
        )?,
        terminal(
            "brd_final",
            "brd",
            "Bovine Respiratory Disease (BRD)",
            85,
            "Administer long-acting antibiotics and NSAIDs. Ensure good ventilation and reduce stress.",
            "Vaccinate against respiratory pathogens and avoid overcrowding and stress.",
        )?,
        terminal(
            "milk_fever_final",
            "milk_fever",
            "Milk Fever (Hypocalcemia)",
            75,
            "IV calcium borogluconate. Monitor cardiac function and keep cow warm.",
            "Manage calcium intake. Administer oral calcium supplements at calving.",
        )?,
        terminal(
            "ketosis_final",
            "ketosis",
            "Ketosis (Acetonemia)",
            70,
            "Provide oral propylene glycol and IV dextrose. Adjust dietary energy.",
            "Monitor fresh cows and ensure energy-rich diet pre- and post-calving.",
        )?,
        terminal(
            "pica_final",
            "pica",
            "Pica (Mineral Deficiency)",
            60,
            "Supplement missing minerals (P, Na). Provide mineral blocks and clean water.",
            "Regular forage analysis and balanced mineral supplementation.",
        )?,
        terminal(
            "bvd_final",
            "bvd",
            "Bovine Viral Diarrhea (BVD)",
            65,
            "Supportive care only. Isolate infected animals.",
            "Vaccination program and removal of persistently infected animals.",
        )?,
        terminal(
            "coccidiosis_final",
            "coccidiosis",
            "Coccidiosis",
            70,
            "Use sulfa drugs or amprolium. Isolate and rehydrate affected calves.",
            "Keep housing clean and dry. Use medicated feed preventively.",
        )?,
        terminal(
            "footrot_final",
            "footrot",
            "Foot Rot",
            70,
            "Clean and trim the affected area. Administer appropriate antibiotics.",
            "Maintain dry, clean footing and regular hoof care.",
        )?,
        terminal(
            "arthritis_final",
            "arthritis",
            "Septic Arthritis or Joint Inflammation",
            55,
            "Anti-inflammatories and possibly antibiotics. Consult a veterinarian.",
            "Avoid injuries in housing and ensure clean, dry conditions.",
        )?,
        terminal(
            "fmd_final",
            "fmd",
            "Foot-and-Mouth Disease (FMD)",
            80,
            "Supportive care, soft feed, isolate affected animals.",
            "Vaccinate in endemic areas and enforce strict biosecurity.",
        )?,
        terminal(
            "johnes_final",
            "johnes",
            "Johne's Disease",
            75,
            "No cure. Cull affected animals. Improve biosecurity.",
            "Avoid fecal-oral spread. Raise calves in clean areas and test herds.",
        )?,
        terminal(
            "ibk_final",
            "ibk",
            "Infectious Bovine Keratoconjunctivitis (Pinkeye)",
            65,
            "Topical or injectable antibiotics. Provide shade and fly protection.",
            "Fly control, pasture management, and vaccination.",
        )?,
        terminal(
            "neurological_final",
            "neurological",
            "Neurological disorder (Listeriosis or Polioencephalomalacia)",
            55,
            "Seek veterinary advice. Administer thiamine and antibiotics where appropriate.",
            "Avoid spoiled silage and ensure proper vitamin supplementation.",
        )?,
        terminal(
            "stress_related_final",
            "stress_related",
            "Stress-related illness",
            45,
            "Supportive care. Reduce environmental and management stressors.",
            "Avoid abrupt changes in feed or housing. Maintain consistent routines.",
        )?,
        // Catch-all terminal shared by every inconclusive branch.
        terminal(
            "unknown_final",
            "unknown",
            "Diagnosis unclear",
            10,
            "Consult a veterinarian for further examination.",
            "Continue regular monitoring and record-keeping.",
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn condition(
    key: &str,
    name: &str,
    summary: &str,
    treatment: &str,
    prevention: &str,
    likelihood: u8,
    media: &[&str],
    criteria: Vec<Criterion>,
) -> Result<Condition, ValidationError> {
    Condition::new(
        ConditionKey::new(key)?,
        name,
        summary,
        treatment,
        prevention,
        Likelihood::new(likelihood),
        media.iter().map(|m| MediaRef::new(*m)).collect(),
        criteria,
    )
}

fn yes_no_set(questions: &[&str]) -> Result<Vec<Criterion>, ValidationError> {
    questions.iter().map(|q| Criterion::yes_no(*q)).collect()
}

fn conditions() -> Result<Vec<Condition>, ValidationError> {
    let mut babesiosis_criteria = yes_no_set(&[
        "Have you seen red or dark-colored urine?",
        "Does the cow have a high fever (40-42°C)?",
        "Are the eyes or gums pale or yellowish?",
        "Is the cow weak or isolating from the herd?",
    ])?;
    babesiosis_criteria.push(Criterion::new(
        "Are ticks visible on the cow?",
        vec!["Yes".to_string(), "No".to_string(), "Not checked".to_string()],
        vec!["Yes".to_string()],
    )?);

    Ok(vec![
        condition(
            "fmd",
            "Foot-and-Mouth Disease",
            "Viral disease marked by fever, drooling, and blisters in the mouth and on the feet.",
            "Supportive care, soft feed, and strict isolation of affected animals.",
            "Vaccinate in endemic areas and control animal movement.",
            80,
            &["images/fmd_mouth.jpg", "images/fmd_foot.jpg"],
            yes_no_set(&[
                "Is the cow drooling or foaming at the mouth?",
                "Do you see blisters or raw ulcers in the cow's mouth?",
                "Is the cow lame or reluctant to move due to hoof lesions?",
                "Have multiple animals shown these signs at the same time?",
                "Was there recent movement of animals into the herd?",
            ])?,
        )?,
        condition(
            "cbpp",
            "Contagious Bovine Pleuropneumonia",
            "Bacterial lung infection causing deep cough, painful breathing, and nasal discharge.",
            "Long courses of antibiotics under veterinary guidance. Isolate affected cattle.",
            "Vaccinate herds in endemic areas and test before introducing new animals.",
            70,
            &["images/cbpp_cough.jpg", "images/cbpp_pleura.jpg"],
            yes_no_set(&[
                "Is the cow coughing deeply and painfully?",
                "Does the cow grunt or show labored breathing?",
                "Is there thick or blood-stained nasal discharge?",
                "Has the illness persisted for weeks and affected other cattle?",
                "Is the herd unvaccinated in an endemic area?",
            ])?,
        )?,
        condition(
            "trypanosomiasis",
            "Trypanosomiasis (Nagana)",
            "Parasitic disease with intermittent fever, anemia, weight loss, and weakness.",
            "Trypanocidal drugs such as diminazene aceturate. Support nutrition during recovery.",
            "Tsetse fly control with traps, targets, and pour-on insecticides.",
            65,
            &["images/nagana_anemia.jpg", "images/tsetse_fly.jpg"],
            yes_no_set(&[
                "Has the cow lost weight over several weeks?",
                "Are the eyes or gums pale (anemia)?",
                "Has the fever been intermittent (on and off)?",
                "Is the cow weak or lethargic?",
                "Are lymph nodes swollen or is there bottle jaw?",
            ])?,
        )?,
        condition(
            "lsd",
            "Lumpy Skin Disease",
            "Viral illness with firm, raised skin nodules, fever, and lymph node enlargement.",
            "Supportive care and antibiotics for secondary skin infections.",
            "Vaccination and control of biting insects.",
            70,
            &["images/lsd_nodules.jpg", "images/lsd_lymph.jpg"],
            yes_no_set(&[
                "Does the cow have multiple firm skin nodules?",
                "Did fever occur before or during nodule appearance?",
                "Have other cattle developed similar nodules?",
                "Is there eye tearing or nasal discharge?",
                "Were new animals introduced from an infected area?",
            ])?,
        )?,
        condition(
            "babesiosis",
            "Babesiosis (Redwater)",
            "Tick-borne; high fever, anemia, and red or dark-colored urine.",
            "Imidocarb dipropionate given early. Blood transfusion in severe anemia.",
            "Regular tick control by dipping or spraying.",
            75,
            &["images/babesiosis_urine.jpg", "images/blue_tick.jpg"],
            babesiosis_criteria,
        )?,
        condition(
            "anaplasmosis",
            "Anaplasmosis",
            "Tick-borne bacterial disease causing fever, severe anemia, and no red urine.",
            "Tetracycline antibiotics. Handle affected animals gently.",
            "Tick control and screening of introduced cattle.",
            60,
            &["images/anaplasmosis_jaundice.jpg"],
            yes_no_set(&[
                "Is the cow feverish (around 41°C)?",
                "Is the urine normal color (no hemoglobinuria)?",
                "Are the mucous membranes pale or jaundiced?",
                "Is the cow weak or breathless on exertion?",
            ])?,
        )?,
        condition(
            "ecf",
            "East Coast Fever",
            "Protozoal disease with high fever, marked lymph node swelling, and respiratory distress.",
            "Buparvaquone given early. Supportive care for breathing difficulty.",
            "Tick control and immunization where available.",
            65,
            &["images/ecf_nodes.jpg"],
            yes_no_set(&[
                "Are superficial lymph nodes visibly swollen?",
                "Is the fever very high (>41°C)?",
                "Does the cow have difficulty breathing?",
                "Is there nasal discharge or tearing of eyes?",
            ])?,
        )?,
        condition(
            "brucellosis",
            "Brucellosis",
            "Bacterial reproductive disease causing late-term abortion and retained placenta.",
            "No effective treatment. Cull reactors and dispose of aborted material safely.",
            "Calfhood vaccination and regular herd testing.",
            60,
            &["images/brucellosis_abortion.jpg"],
            yes_no_set(&[
                "Has the cow recently aborted late in pregnancy?",
                "Did the placenta remain attached after birth?",
                "Have multiple cows aborted in the herd?",
                "Do you notice joint swellings (hygromas)?",
            ])?,
        )?,
        condition(
            "blackleg",
            "Blackleg",
            "Clostridial infection causing sudden death and muscle swelling in young cattle.",
            "High doses of penicillin in the earliest stage. Usually fatal once signs appear.",
            "Vaccinate young stock and avoid grazing on contaminated pasture.",
            55,
            &["images/blackleg_swelling.jpg"],
            yes_no_set(&[
                "Was a young animal found dead suddenly?",
                "Was there rapid muscle swelling before death?",
                "Could you feel crackling gas under the skin?",
                "If observed alive, was the animal feverish and depressed?",
            ])?,
        )?,
        condition(
            "parasites",
            "Parasitic Gastroenteritis",
            "Helminth infestation causing poor condition, diarrhea, anemia, and bottle jaw.",
            "Broad-spectrum anthelmintic to the whole group. Repeat per product guidance.",
            "Rotational grazing and strategic deworming of young stock.",
            50,
            &["images/bottle_jaw.jpg"],
            yes_no_set(&[
                "Are young cattle losing condition despite good feed?",
                "Is there chronic diarrhea in the herd?",
                "Do you see pale membranes or fluid under the jaw?",
            ])?,
        )?,
    ])
}

fn symptom_map() -> Result<Vec<(String, ConditionKey)>, ValidationError> {
    let entries = [
        ("Drooling & blisters", "fmd"),
        ("Deep cough & labored breathing", "cbpp"),
        ("Weight loss & anemia", "trypanosomiasis"),
        ("Skin nodules", "lsd"),
        ("Red or dark urine", "babesiosis"),
        ("Anemia without red urine", "anaplasmosis"),
        ("Swollen lymph nodes & dyspnea", "ecf"),
        ("Late-term abortion", "brucellosis"),
        ("Sudden death in young cattle", "blackleg"),
        ("Chronic diarrhea & weight loss", "parasites"),
    ];
    entries
        .iter()
        .map(|(label, key)| Ok((label.to_string(), ConditionKey::new(*key)?)))
        .collect()
}
