//! Plain-text rendering for tool output

use std::fmt::{Display, Write as _};

use anyhow::Context;
use maxcdn_domain::PopularFiles;
use maxcdn_infra::FanOutReport;
use serde_json::Value;

/// Re-indent a JSON body.
///
/// # Errors
/// Fails if `raw` is not JSON.
pub fn pretty_json(raw: &[u8]) -> anyhow::Result<String> {
    let value: Value = serde_json::from_slice(raw).context("response body is not JSON")?;
    serde_json::to_string_pretty(&value).context("failed to format JSON")
}

/// One `name => value` line per header name; repeated headers are joined.
pub fn format_headers(headers: &[(String, String)]) -> String {
    let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();
    for (name, value) in headers {
        match grouped.iter_mut().find(|(seen, _)| seen.eq_ignore_ascii_case(name)) {
            Some((_, values)) => values.push(value),
            None => grouped.push((name, vec![value])),
        }
    }

    grouped.iter().fold(String::new(), |mut out, (name, values)| {
        let _ = writeln!(out, "{name} => {}", values.join(", "));
        out
    })
}

/// Hits/file table, limited to the first `top` rows (`0` shows all),
/// followed by a summary line.
pub fn popular_table(files: &PopularFiles, top: usize) -> String {
    let limit = if top == 0 { files.popular_files.len() } else { top };

    let mut out = format!("{:>10} | file\n", "hits");
    out.push_str("   -----------------\n");
    for file in files.popular_files.iter().take(limit) {
        let _ = writeln!(out, "{:>10} | {}", file.hit, file.uri);
    }

    let shown = files.popular_files.len().min(limit);
    let _ = writeln!(out, "\n{shown} of {} files shown, {} hits total", files.total, files.summary.hit);
    out
}

/// One line per purge target: `label target: purged` or the error.
pub fn purge_lines<T: Display, R>(label: &str, report: &FanOutReport<T, R>) -> String {
    report.outcomes().iter().fold(String::new(), |mut out, outcome| {
        let _ = match &outcome.result {
            Ok(_) => writeln!(out, "{label} {}: purged", outcome.target),
            Err(e) => writeln!(out, "{label} {}: {e}", outcome.target),
        };
        out
    })
}

#[cfg(test)]
mod tests {
    use maxcdn_domain::{Envelope, MaxCdnError};
    use maxcdn_infra::Outcome;
    use serde_json::json;

    use super::*;

    #[test]
    fn pretty_json_indents() {
        let pretty = pretty_json(br#"{"code":200,"data":{"a":1}}"#).unwrap();
        assert_eq!(pretty, "{\n  \"code\": 200,\n  \"data\": {\n    \"a\": 1\n  }\n}");
        assert!(pretty_json(b"<html>").is_err());
    }

    #[test]
    fn headers_are_grouped_by_name() {
        let headers = vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("set-cookie".to_string(), "a=1".to_string()),
            ("set-cookie".to_string(), "b=2".to_string()),
        ];
        assert_eq!(
            format_headers(&headers),
            "content-type => application/json\nset-cookie => a=1, b=2\n"
        );
    }

    fn popular() -> PopularFiles {
        serde_json::from_value(json!({
            "total": "3",
            "summary": { "hit": "100" },
            "popularfiles": [
                { "uri": "/a.css", "hit": "60" },
                { "uri": "/b.js", "hit": "30" },
                { "uri": "/c.png", "hit": "10" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn popular_table_lists_every_file() {
        let table = popular_table(&popular(), 0);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "      hits | file");
        assert_eq!(lines[2], "        60 | /a.css");
        assert_eq!(lines[4], "        10 | /c.png");
        assert_eq!(lines.last(), Some(&"3 of 3 files shown, 100 hits total"));
    }

    #[test]
    fn popular_table_honours_top() {
        let table = popular_table(&popular(), 1);
        assert!(table.contains("/a.css"));
        assert!(!table.contains("/b.js"));
        assert!(table.ends_with("1 of 3 files shown, 100 hits total\n"));
    }

    #[test]
    fn purge_lines_cover_every_target() {
        let report = FanOutReport::from(vec![
            Outcome { target: "1".to_string(), result: Ok(Envelope::default()) },
            Outcome {
                target: "2".to_string(),
                result: Err(MaxCdnError::api("Not Found", "zone missing")),
            },
        ]);
        assert_eq!(purge_lines("zone", &report), "zone 1: purged\nzone 2: Not Found: zone missing\n");
    }
}
