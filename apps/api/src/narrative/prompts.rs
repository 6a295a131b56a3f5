// Prompt templates for the narrative adapter.

use crate::models::Prospect;

pub fn fit_analysis_prompt(prospect: &Prospect) -> String {
    let score = prospect
        .fit_score
        .map(|s| format!("{s}%"))
        .unwrap_or_else(|| "not yet computed".to_string());
    let status = if prospect.needs_retest {
        "Needs Retesting"
    } else {
        "Up to Date"
    };

    format!(
        r#"Perform a high-level "Fit Analysis" for this baseball player based on their metrics:
Name: {name}
Position: {position}
Clutch Factor: {clutch}
Fit Probability Score: {score}
Status: {status}
Year: {year}

Evaluate how their "Clutch Factor" and the {score} Fit Probability align for professional or high-level collegiate recruitment. Be concise (2-3 sentences). Highlight if they are a "High Impact" or "Developmental" fit. Explain the reasoning behind the {score} score provided."#,
        name = prospect.name,
        position = prospect.position,
        clutch = prospect.clutch_factor,
        year = prospect.graduation_label(),
    )
}

pub fn scouting_report_prompt(prospect: &Prospect) -> String {
    let year = prospect
        .graduation_year
        .as_ref()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Not Specified".to_string());

    format!(
        r#"Analyze this baseball player's performance data and provide a concise professional scouting report (3-4 sentences):
Name: {name}
Position: {position}
Clutch Factor: {clutch}
Year of Graduation: {year}

Focus on what the 'Clutch Factor' might indicate for a player in their position. Be realistic and professional."#,
        name = prospect.name,
        position = prospect.position,
        clutch = prospect.clutch_factor,
    )
}
