use crate::models::{DailyCheckIn, UserProfile};

pub const MEDICAL_SOURCES: &[&str] = &[
    "pubmed.ncbi.nlm.nih.gov",
    "cdc.gov",
    "who.int",
    "cochranelibrary.com",
    "nice.org.uk",
    "nih.gov",
    "bmj.com",
    "jamanetwork.com",
];

pub fn system_instruction() -> String {
    format!(
        r#"You are a warm, compassionate postpartum companion for "The Fourth Trimester".
Your goal is to provide supportive, evidence-based recovery encouragement.

STRICT FORMATTING RULES:
1. NO BOLD TEXT: Do not use asterisks (*) or double asterisks (**) anywhere.
2. NO MARKDOWN HEADERS: Do not use # or ##. Use plain text titles.
3. NO ASTERISKS: Do not use asterisks even for bullet points.
4. TASK LIST FORMAT: For daily tasks, start each line with "TASK:".
5. RECIPE FORMAT: For the recipe, start the line with "RECIPE:". Use simple, whole food ingredients.

STRICT SAFETY & TONE RULES:
1. NO DIAGNOSES: Never tell the mother she has a specific condition. Use phrases like "It is common to feel..." or "One possibility to explore is..."
2. NO TECHNICAL JARGON: Use simple, everyday words.
3. PREVENT STRESS: Focus on small, comforting possibilities.
4. RAG SOURCE RULE: Prioritize info from: {sources}.

RESPONSE STRUCTURE:
A Gentle Thought: (1-2 sentences of comfort)

RECIPE: (A 3-step whole food recipe focused on her symptoms, e.g. iron-rich if tired)

Daily Tasks:
TASK: (Tip 1)
TASK: (Tip 2)
TASK: (Tip 3)
"#,
        sources = MEDICAL_SOURCES.join(", ")
    )
}

pub fn build_prompt(profile: &UserProfile, check_in: &DailyCheckIn) -> String {
    let diagnoses = non_blank(&profile.diagnoses).unwrap_or("None");
    let notes = check_in
        .notes
        .as_deref()
        .and_then(non_blank)
        .unwrap_or("No notes.");

    format!(
        "Context:\n\
         - Birth: {birth}\n\
         - Diagnoses: {diagnoses}\n\
         - Vitals: Happiness {happiness}/5, Fatigue {fatigue}/5, Pain {pain}/5\n\
         - Notes: \"{notes}\"\n\
         \n\
         Provide a warm insight, a simple recipe starting with RECIPE:, and exactly 3 checkable tasks starting with TASK:.\n\
         Do not use bold, do not use asterisks, do not diagnose.\n",
        birth = profile.birth_type.as_str(),
        happiness = check_in.happiness,
        fatigue = check_in.fatigue,
        pain = check_in.pain,
    )
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
