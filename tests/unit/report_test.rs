//! Golden tests for the markdown report

use recovery_triage::core::models::{
    FastTrackPolicy, OwnershipTier, PackageClassification, RecoveryClaim, TriageOutcome,
};
use recovery_triage::core::services::report::{BOT_NOTICE, format_table};
use recovery_triage::core::services::{format_report, recommend};

fn row(package: &str, source_url: &str, tier: OwnershipTier) -> PackageClassification {
    PackageClassification {
        package: package.to_string(),
        source_url: source_url.to_string(),
        tier,
    }
}

fn outcome(rows: Vec<PackageClassification>, policy: FastTrackPolicy) -> TriageOutcome {
    let recommendation = recommend(&rows, policy);
    TriageOutcome::Classified {
        classifications: rows,
        recommendation,
    }
}

#[test]
fn test_mixed_report_golden() {
    let claim = RecoveryClaim::new("alice", "alice-gh");
    let text = format_report(
        &claim,
        &outcome(
            vec![
                row("foo", "https://github.com/alice-gh/foo", OwnershipTier::BelongsDirectly),
                row("bar", "https://github.com/acme/bar", OwnershipTier::OrgAdmin),
                PackageClassification::without_repository("baz"),
            ],
            FastTrackPolicy::OwnerOrAdmin,
        ),
    );

    let expected = format!(
        "### Package Ownership\n\n\
         Package | Repository | Owner | Admin | Member | Unknown | No Repo\n\
         --- | --- | :-: | :-: | :-: | :-: | :-:\n\
         [foo](https://pypi.org/project/foo) | https://github.com/alice-gh/foo | X |  |  |  | \n\
         [bar](https://pypi.org/project/bar) | https://github.com/acme/bar |  | X |  |  | \n\
         [baz](https://pypi.org/project/baz) |  |  |  |  |  | X\n\n\
         **Recommendation: manual review.** 1 of 3 package(s) could not be verified as owned or \
         administered by [alice-gh](https://github.com/alice-gh/).\n\n\
         {BOT_NOTICE}"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_owner_only_wording() {
    let claim = RecoveryClaim::single("alice");
    let text = format_report(
        &claim,
        &outcome(
            vec![row("foo", "https://github.com/alice/foo", OwnershipTier::BelongsDirectly)],
            FastTrackPolicy::OwnerOnly,
        ),
    );
    assert!(text.contains(
        "**Recommendation: fast-track.** All 1 package(s) are owned by \
         [alice](https://github.com/alice/)."
    ));
}

#[test]
fn test_rows_keep_listing_order() {
    let claim = RecoveryClaim::single("alice");
    let text = format_report(
        &claim,
        &outcome(
            vec![
                PackageClassification::without_repository("zeta"),
                PackageClassification::without_repository("alpha"),
            ],
            FastTrackPolicy::OwnerOrAdmin,
        ),
    );
    let zeta = text.find("[zeta]").unwrap();
    let alpha = text.find("[alpha]").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn test_report_is_deterministic() {
    let claim = RecoveryClaim::single("alice");
    let build = || {
        outcome(
            vec![
                row("a", "https://github.com/x/a", OwnershipTier::OrgMember),
                row("b", "https://example.com", OwnershipTier::Unknown),
            ],
            FastTrackPolicy::OwnerOrAdmin,
        )
    };
    assert_eq!(format_report(&claim, &build()), format_report(&claim, &build()));
}

/// Split a table row on column separators, honoring `\|` escapes
fn columns(line: &str) -> Vec<String> {
    let mut cells = vec![String::new()];
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cells.last_mut().unwrap().push_str("\\|");
                chars.next();
            },
            '|' => cells.push(String::new()),
            _ => cells.last_mut().unwrap().push(c),
        }
    }
    cells.iter().map(|c| c.trim().to_string()).collect()
}

#[test]
fn test_pipe_in_source_url_stays_in_its_cell() {
    let table = format_table(&[
        row("evil", "https://example.com/x|X", OwnershipTier::Unknown),
        row("multi", "https://example.com/a\nX | X", OwnershipTier::NoRepositoryListed),
    ]);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[2],
        "[evil](https://pypi.org/project/evil) | https://example.com/x\\|X |  |  |  | X | "
    );

    let evil = columns(lines[2]);
    assert_eq!(evil.len(), 7);
    assert_eq!(evil[2], "", "Owner column must stay empty");
    assert_eq!(evil[5], "X");

    let multi = columns(lines[3]);
    assert_eq!(multi.len(), 7);
    assert_eq!(multi[1], "https://example.com/a X \\| X");
    assert_eq!(multi[6], "X");
}
