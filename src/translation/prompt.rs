/// Instruction sent to the model for every translation.
///
/// `{from}`, `{to}` and `{text}` are substituted verbatim.
pub const PROMPT_TEMPLATE: &str = "Translate the following text from {from} to {to}. \n\
\n\
IMPORTANT: \n\
- Detect the emotional context (romantic, formal, casual, family, business)\n\
- Translate naturally to match that context\n\
- Preserve tone and warmth\n\
- Use appropriate honorifics if needed\n\
- Output ONLY the translation, no explanations\n\
\n\
Text to translate: \"{text}\"";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(text: &str, from: &str, to: &str) -> String {
    // Placeholders are replaced before the text so braces inside user text survive
    PROMPT_TEMPLATE
        .replace("{from}", from)
        .replace("{to}", to)
        .replace("{text}", text)
}
