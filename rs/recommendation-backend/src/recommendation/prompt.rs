pub const CATEGORIES: [&str; 9] = [
    "scene_setting",
    "lighting_type",
    "subject_type",
    "subject_action",
    "camera_angle",
    "motion_pacing",
    "aesthetic",
    "color_palette",
    "audio_type",
];

pub const SUGGESTIONS_PER_CATEGORY: usize = 5;

pub const SYSTEM_PROMPT: &str = "You are an expert video prompt specialist for the text-to-video model Google Veo 3.\nAnswer ONLY with a valid JSON object and no other text.";

/// Embeds the description verbatim and spells out the expected object: every
/// category maps to an array of short suggestions.
pub fn create_user_prompt(description: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!("Based on this description: \"{description}\"\n\n"));
    prompt.push_str(&format!(
        "Create {SUGGESTIONS_PER_CATEGORY} short recommendations for each of the following fields in JSON format:\n"
    ));
    let fields: Vec<String> = CATEGORIES
        .iter()
        .map(|category| format!("  \"{category}\": [\"...\"]"))
        .collect();
    prompt.push_str(&format!("{{\n{}\n}}", fields.join(",\n")));
    prompt
}
