// Prompt constants for the responsibility-fit judge.

/// System prompt for the judge. Enforces JSON-only output.
pub const JUDGE_SYSTEM: &str = "You are an experienced technical recruiter. \
    You compare what a role will ask of someone with what a candidate has already done. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the `rationale` field.";

/// Judge prompt template. Replace `{responsibilities}` and `{experience}` before sending.
pub const JUDGE_PROMPT_TEMPLATE: &str = r#"Assess how well the candidate's past experience prepares them for the responsibilities of this role.

ROLE RESPONSIBILITIES:
{responsibilities}

CANDIDATE EXPERIENCE:
{experience}

Scoring guide:
- 0.0 to 0.39: the experience does not prepare the candidate for these responsibilities
- 0.4 to 0.59: partial overlap; the candidate could grow into the role
- 0.6 to 1.0: the candidate has clearly done this kind of work before

Judge the substance of the work, not shared vocabulary. Ignore skills lists, education and titles.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 0.72,
  "rationale": "One or two sentences naming the strongest overlap and the biggest gap."
}"#;

/// Fills the judge template.
pub fn judge_prompt(responsibilities: &str, experience: &str) -> String {
    JUDGE_PROMPT_TEMPLATE
        .replace("{responsibilities}", responsibilities)
        .replace("{experience}", experience)
}
