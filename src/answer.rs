//! Yes/no classification of free-form answers.

/// Whether `text` reads as an affirmative answer.
///
/// Any ASCII `y` or `Y` anywhere in the text counts, so "yes", "Y", "okay"
/// and "maybe" all classify as yes while "no" and "" do not.
#[must_use]
pub fn is_answer_yes(text: &str) -> bool {
    text.bytes().any(|b| b.eq_ignore_ascii_case(&b'y'))
}
