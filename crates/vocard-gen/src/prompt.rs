//! The instruction prompt sent to the generation backend.

/// Build the per-word prompt.
///
/// The wording pins the model to a bare JSON object with the five exact
/// keys the note schema expects; extraction still tolerates drift.
pub fn build_prompt(word: &str) -> String {
    format!(
        "You are a concise, accurate dictionary assistant.\n\
         For the English word: \"{word}\"\n\n\
         Return ONLY a single JSON object and nothing else with these exact keys:\n  \
         meaning: A concise English definition (one or two short sentences).\n  \
         translation: The Portuguese translation of the word (single word or short phrase).\n  \
         meaning_translation: The Portuguese translation of the meaning.\n  \
         example_phrase: One short natural English sentence that uses the word exactly as given.\n  \
         phrase_translation: The Portuguese translation of the example phrase.\n\n\
         Make JSON well-formed and escape quotes as needed. Do NOT wrap the JSON in markdown, commentary, or text."
    )
}
