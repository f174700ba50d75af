//! Plain-text rendering of notice search results.

use crate::types::NoticeResult;

const DIVIDER: &str = "---";

/// Render `results` as a numbered report, or a single line when empty.
///
/// Results are rendered in the given order; nothing is dropped or merged.
pub fn format_results(results: &[NoticeResult], query: &str) -> String {
    if results.is_empty() {
        return format!("\"{query}\"에 대한 검색 결과가 없습니다.");
    }

    let blocks = results
        .iter()
        .enumerate()
        .map(|(i, result)| format_block(i + 1, result))
        .collect::<Vec<_>>()
        .join(&format!("\n{DIVIDER}\n"));

    format!("총 {}개의 공고를 찾았습니다.\n\n{blocks}", results.len())
}

fn format_block(position: usize, result: &NoticeResult) -> String {
    [
        format!("{}. {}", position, result.title),
        format!("   URL: {}", result.url),
        format!("   기관: {}", result.metadata.organization),
        format!("   지역: {}", result.metadata.region),
        format!("   창업 업력: {}", result.metadata.startup_history),
        format!("   유사도: {}", similarity(result.score)),
    ]
    .join("\n")
}

fn similarity(score: f64) -> String {
    format!("{}%", fixed_one_decimal(score * 100.0))
}

/// Every fractional digit a finite `f64` can have.
const EXACT_DIGITS: usize = 1074;

/// One-decimal rendering that rounds exact ties away from zero.
///
/// `{:.1}` alone rounds ties to even, so `87.25` would become `87.2`.
fn fixed_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.1}");
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let fraction = exact
        .split_once('.')
        .map(|(_, f)| f.trim_end_matches('0'))
        .unwrap_or_default();

    if fraction.len() == 2 && fraction.ends_with('5') {
        format!("{:.1}", value + 0.05_f64.copysign(value))
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(title: &str, score: f64) -> NoticeResult {
        NoticeResult::new(title, "http://x", score).with_metadata("Org", "Seoul", "2yr")
    }

    #[test]
    fn test_empty_results_echo_query() {
        assert_eq!(
            format_results(&[], "quantum widgets"),
            "\"quantum widgets\"에 대한 검색 결과가 없습니다."
        );
    }

    #[test]
    fn test_single_result_block() {
        let report = format_results(&[grant("Grant A", 0.873)], "grants");

        assert!(report.starts_with("총 1개의 공고를 찾았습니다.\n\n"));
        assert!(report.contains("1. Grant A\n"));
        assert!(report.contains("URL: http://x"));
        assert!(report.contains("기관: Org"));
        assert!(report.contains("지역: Seoul"));
        assert!(report.contains("창업 업력: 2yr"));
        assert!(report.contains("유사도: 87.3%"));
        assert!(!report.contains(DIVIDER));
    }

    #[test]
    fn test_blocks_keep_order_and_are_divided() {
        let report = format_results(
            &[grant("First", 0.9), grant("Second", 0.5), grant("First", 0.9)],
            "q",
        );

        assert!(report.starts_with("총 3개의 공고를 찾았습니다."));
        assert_eq!(report.matches(DIVIDER).count(), 2);

        let first = report.find("1. First").unwrap();
        let second = report.find("2. Second").unwrap();
        let third = report.find("3. First").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_similarity_is_not_clamped() {
        assert_eq!(similarity(0.0), "0.0%");
        assert_eq!(similarity(1.0), "100.0%");
        assert_eq!(similarity(1.25), "125.0%");
        assert_eq!(similarity(0.0449), "4.5%");
    }

    #[test]
    fn test_similarity_ties_round_away_from_zero() {
        assert_eq!(similarity(0.8725), "87.3%");
        assert_eq!(similarity(0.0025), "0.3%");

        assert_eq!(fixed_one_decimal(87.25), "87.3");
        assert_eq!(fixed_one_decimal(87.75), "87.8");
        assert_eq!(fixed_one_decimal(0.25), "0.3");
        assert_eq!(fixed_one_decimal(-87.25), "-87.3");
        assert_eq!(fixed_one_decimal(87.35), "87.3");
        assert_eq!(fixed_one_decimal(87.24), "87.2");
    }

    #[test]
    fn test_tie_score_in_report() {
        let report = format_results(&[grant("Grant B", 0.8725)], "grants");
        assert!(report.contains("유사도: 87.3%"));
    }
}
