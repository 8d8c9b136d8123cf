//! Netscape cookie-jar serialization.
//!
//! Produces the canonical 7-field TAB-separated format: `domain`, `tailmatch`,
//! `path`, `secure`, `expires`, `name`, `value`, one line per cookie, after a
//! fixed header line. The document is treated as opaque bytes downstream.

use super::CookieRecord;

/// Header line of the canonical cookie-jar document.
pub const NETSCAPE_HEADER: &str = "# Netscape HTTP Cookie File";

/// Serializes a snapshot into a Netscape cookie-jar document.
///
/// One output line per input record, in input order, joined by newlines after
/// the header line. No trailing newline. Deterministic: the same record
/// sequence always yields byte-identical output.
#[must_use]
pub fn to_netscape_document(records: &[CookieRecord]) -> String {
    let lines: Vec<String> = records.iter().map(format_record).collect();
    format!("{NETSCAPE_HEADER}\n{}", lines.join("\n"))
}

/// Formats one cookie as a 7-field TAB-separated jar line.
///
/// The tailmatch flag reflects whether the ORIGINAL domain carried a leading
/// dot, while the output domain is always dot-prefixed. These are two
/// independent reads of the original domain string; keep them that way.
fn format_record(record: &CookieRecord) -> String {
    let tailmatch = record.domain.starts_with('.');
    let domain = if tailmatch {
        record.domain.clone()
    } else {
        format!(".{}", record.domain)
    };
    let path = if record.path.is_empty() {
        "/"
    } else {
        record.path.as_str()
    };
    let expires = record.expires.unwrap_or(0).to_string();

    [
        domain.as_str(),
        bool_field(tailmatch),
        path,
        bool_field(record.secure),
        expires.as_str(),
        record.name.as_str(),
        record.value(),
    ]
    .join("\t")
}

fn bool_field(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        value: &str,
        domain: &str,
        path: &str,
        secure: bool,
        expires: Option<u64>,
    ) -> CookieRecord {
        CookieRecord::new(
            name.to_string(),
            value.to_string(),
            domain.to_string(),
            path.to_string(),
            secure,
            expires,
        )
    }

    #[test]
    fn test_serialize_bare_domain_gets_dot_prefix_and_false_flag() {
        let records = vec![record(
            "SID",
            "abc",
            "youtube.com",
            "",
            true,
            Some(1_700_000_000),
        )];
        let document = to_netscape_document(&records);
        assert_eq!(
            document,
            "# Netscape HTTP Cookie File\n.youtube.com\tFALSE\t/\tTRUE\t1700000000\tSID\tabc"
        );
    }

    #[test]
    fn test_serialize_dotted_domain_keeps_dot_and_true_flag() {
        let records = vec![record("token", "xyz", ".example.com", "/api", false, None)];
        let document = to_netscape_document(&records);
        assert_eq!(
            document,
            "# Netscape HTTP Cookie File\n.example.com\tTRUE\t/api\tFALSE\t0\ttoken\txyz"
        );
    }

    #[test]
    fn test_serialize_session_cookie_expires_zero() {
        let records = vec![record("YSC", "v", "youtube.com", "/", false, None)];
        let line = to_netscape_document(&records);
        assert!(line.ends_with("\t0\tYSC\tv"), "session expiry must be 0: {line}");
    }

    #[test]
    fn test_serialize_preserves_input_order() {
        let records = vec![
            record("b", "2", "b.com", "/", false, None),
            record("a", "1", "a.com", "/", false, None),
        ];
        let document = to_netscape_document(&records);
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(".b.com\t"));
        assert!(lines[2].starts_with(".a.com\t"));
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let records = vec![
            record("SID", "abc", "youtube.com", "", true, Some(1_700_000_000)),
            record("YSC", "v", ".youtube.com", "/", false, None),
        ];
        assert_eq!(to_netscape_document(&records), to_netscape_document(&records));
    }

    #[test]
    fn test_serialize_empty_snapshot_is_header_only() {
        assert_eq!(to_netscape_document(&[]), "# Netscape HTTP Cookie File\n");
    }

    #[test]
    fn test_serialize_no_trailing_newline() {
        let records = vec![record("n", "v", "d.com", "/", false, None)];
        assert!(!to_netscape_document(&records).ends_with('\n'));
    }

    #[test]
    fn test_serialize_empty_value_keeps_field_count() {
        let records = vec![record("empty", "", "d.com", "/", false, None)];
        let document = to_netscape_document(&records);
        let last_line = document.lines().last().unwrap();
        assert_eq!(last_line.split('\t').count(), 7);
        assert!(last_line.ends_with("\tempty\t"));
    }
}
