// src/parser.rs
//! Extracts the request path and response time from nginx `ui` access-log lines.
//!
//! Layout:
//! `ip remote_user real_ip [time_local] "METHOD PATH PROTO" status bytes "referer"
//! "user_agent" "forwarded_for" "request_id" "rb_user" request_time`

use crate::types::{LineOutcome, ParsedRecord};
use regex::Regex;
use std::sync::LazyLock;

const LINE_PATTERN: &str = concat!(
    r#"^(?P<remote_addr>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+(?P<remote_user>.*?)\s+"#,
    r#"(?P<real_ip>.*?)\s+\[(?P<time_local>.*?)\]\s+"(?P<method>.*?)\s+"#,
    r#"(?P<path>.*?)(?P<protocol>\s+HTTP/.*)?"\s+(?P<status>.*?)\s+"#,
    r#"(?P<body_bytes>.*?)\s+"(?P<referer>.*?)"\s+"(?P<user_agent>.*?)"\s+"#,
    r#""(?P<forwarded_for>.*?)"\s+"(?P<request_id>.*?)"\s+"#,
    r#""(?P<rb_user>.*)"\s+(?P<request_time>\d+\.?\d*)"#,
);

static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Classifies one raw line. Never fails; bad lines come back as [`LineOutcome::Unparsed`].
#[must_use]
pub fn parse_line(line: &str) -> LineOutcome {
    let Some(caps) = LINE_RE.captures(line) else {
        return LineOutcome::Unparsed;
    };
    let (Some(path), Some(time)) = (caps.name("path"), caps.name("request_time")) else {
        return LineOutcome::Unparsed;
    };
    if path.as_str().is_empty() {
        return LineOutcome::Unparsed;
    }
    match time.as_str().parse::<f64>() {
        Ok(response_time) if response_time.is_finite() => LineOutcome::Parsed(ParsedRecord {
            path: path.as_str().to_string(),
            response_time,
        }),
        _ => LineOutcome::Unparsed,
    }
}
