//! Prompt assembly for script generation.

use promoreel_models::{ContentSnippet, ThemeDescriptor};

/// System instruction sent with every script request.
pub const SCRIPT_SYSTEM_PROMPT: &str = "You are a senior creative director writing short promotional video scripts for a pharmaceutical brand. You write precise, regulation-aware copy and you always answer with a single JSON object, no prose.";

/// Build the user instruction for one script request.
pub fn build_script_prompt(
    theme: &ThemeDescriptor,
    snippets: &[ContentSnippet],
    duration_secs: u32,
) -> String {
    let mut prompt = format!(
        "Write a promotional video script for the theme \"{}\".\nTheme description: {}\n",
        theme.name, theme.description
    );

    if !snippets.is_empty() {
        prompt.push_str("\nSupporting content to draw from:\n");
        for snippet in snippets {
            prompt.push_str(&format!("- {}: {}\n", snippet.name, snippet.content));
        }
    }

    prompt.push_str(&format!(
        r#"
MANDATORY CONSTRAINTS:
- The video is exactly {duration} seconds long
- Describe one single continuous shot; no cuts between scenes
- Do not invent clinical claims beyond the supporting content; no unsafe or unapproved claims
- Scenes must be contiguous, non-overlapping, and together cover 0 to {duration} seconds

IMPORTANT: You must strictly follow this output format.
Return ONLY a single JSON object with this schema:
{{
  "title": "Script title",
  "duration_secs": {duration},
  "scenes": [
    {{
      "start_secs": 0,
      "end_secs": 2,
      "visual": "What the camera sees",
      "overlay_text": "Optional on-screen text"
    }}
  ],
  "voiceover": "One voiceover line spoken over the whole video",
  "prompt": "A single cinematic prompt for a video generation model covering the full shot"
}}"#,
        duration = duration_secs
    ));

    prompt
}
