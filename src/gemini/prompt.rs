//! Prompt construction for Gemini.

/// Marker placed on the line before the diff.
pub const DIFF_START_MARKER: &str = "--- GIT DIFF ---";

/// Marker placed on the line after the diff.
pub const DIFF_END_MARKER: &str = "--- END GIT DIFF ---";

/// Build the commit message prompt for a staged diff.
///
/// The diff is embedded verbatim between [`DIFF_START_MARKER`] and
/// [`DIFF_END_MARKER`]; it is not sanitized or truncated.
pub fn build_prompt(diff: &str) -> String {
    format!(
        "You are an expert programmer. Your task is to write a concise and conventional \
         commit message based on the following git diff. The message should be in the imperative mood, \
         for example, 'Add feature' not 'Added feature'. Do not include any preamble or backticks.\n\n\
         {DIFF_START_MARKER}\n\
         {diff}\
         \n{DIFF_END_MARKER}\n\n\
         Commit message:"
    )
}
