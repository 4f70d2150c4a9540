//! Markdown rendering of a triage outcome
//!
//! Pure and deterministic: identical input always produces identical text.

use crate::core::models::{
    FastTrackPolicy, OwnershipTier, PackageClassification, Recommendation, RecoveryClaim,
    TriageOutcome,
};

/// Heading of the ownership comment
pub const REPORT_HEADING: &str = "### Package Ownership";

/// Notice that the final determination rests with the index administrators
pub const BOT_NOTICE: &str = "### NOTE\n\n\
    _This action was performed automatically by a bot and **does not guarantee account recovery**. \
    Account recovery requires manual approval processing by the PyPI team._";

/// Link to a package on the index
#[must_use]
pub fn package_link(name: &str) -> String {
    format!("[{name}](https://pypi.org/project/{name})")
}

/// Link to an index account
#[must_use]
pub fn index_user_link(user: &str) -> String {
    format!("[{user}](https://pypi.org/user/{user}/)")
}

/// Link to a hosting-platform account
#[must_use]
pub fn hosting_user_link(user: &str) -> String {
    format!("[{user}](https://github.com/{user}/)")
}

/// Render the full comment for an outcome
#[must_use]
pub fn format_report(claim: &RecoveryClaim, outcome: &TriageOutcome) -> String {
    match outcome {
        TriageOutcome::NoPackages => {
            format!("User {} has no packages", index_user_link(claim.index_account.as_str()))
        },
        TriageOutcome::Classified {
            classifications,
            recommendation,
        } => [
            REPORT_HEADING.to_string(),
            format_table(classifications),
            recommendation_sentence(claim, recommendation),
            BOT_NOTICE.to_string(),
        ]
        .join("\n\n"),
    }
}

/// Render the ownership table, one `X` per row in its tier column
#[must_use]
pub fn format_table(classifications: &[PackageClassification]) -> String {
    let mut header = vec!["Package", "Repository"];
    header.extend(OwnershipTier::ALL.iter().map(|tier| tier.column_label()));

    let mut alignment = vec!["---"; 2];
    alignment.extend(std::iter::repeat_n(":-:", OwnershipTier::ALL.len()));

    let mut lines = vec![header.join(" | "), alignment.join(" | ")];
    for c in classifications {
        let mut cells = vec![String::new(); header.len()];
        cells[0] = package_link(&c.package);
        cells[1] = table_cell(&c.source_url);
        cells[2 + c.tier.rank()] = "X".to_string();
        lines.push(cells.join(" | "));
    }
    lines.join("\n")
}

/// Make author-supplied text safe inside one table cell
///
/// A raw `|` would start a new column and a line break would end the row,
/// either of which can move the `X` into another tier's column.
#[must_use]
pub fn table_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|")
}

fn recommendation_sentence(claim: &RecoveryClaim, rec: &Recommendation) -> String {
    let who = hosting_user_link(claim.hosting_account.as_str());
    let relation = match rec.policy {
        FastTrackPolicy::OwnerOrAdmin => "owned or administered",
        FastTrackPolicy::OwnerOnly => "owned",
    };
    if rec.fast_track {
        format!(
            "**Recommendation: fast-track.** All {} package(s) are {relation} by {who}.",
            rec.total
        )
    } else {
        format!(
            "**Recommendation: manual review.** {} of {} package(s) could not be verified as \
             {relation} by {who}.",
            rec.unresolved, rec.total
        )
    }
}
