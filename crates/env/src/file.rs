use crate::mapping::EnvMapping;
use denv_core::{Error, Result, COMMENT_MARKER};
use std::path::Path;

/// Parser for flat `KEY=VALUE` env files.
///
/// File-format problems are never errors: blank lines, comments, and lines
/// with no recognizable key are skipped, and a missing file parses as an
/// empty mapping. Only I/O failures other than absence are reported.
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file contents, preserving declaration order.
    ///
    /// Duplicate keys keep the last value at the first occurrence's
    /// position. A key with no `=` yields a null value; `KEY=` yields an
    /// empty string.
    pub fn parse(text: &str) -> EnvMapping {
        let mut mapping = EnvMapping::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let key_end = line
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
                .unwrap_or(line.len());
            let key = &line[..key_end];
            if key.is_empty() {
                continue;
            }
            let rest = line[key_end..].trim_start();
            if rest.is_empty() {
                mapping.insert(key, None);
            } else if let Some(value) = rest.strip_prefix('=') {
                mapping.insert(key, Some(value.trim().to_string()));
            }
            // Anything else after the key is not a KEY=VALUE line; skip it.
        }
        mapping
    }

    /// Read and parse an env file. A missing file is an empty mapping.
    pub fn read(path: &Path) -> Result<EnvMapping> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(EnvMapping::new()),
            Err(err) => Err(Error::file_system(path, "read", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs_in_order() {
        let mapping = EnvFileParser::parse("FOO=foo\nBAR=bar\nBAZ=baz\n");
        let pairs: Vec<(&str, Option<&str>)> = mapping.iter().collect();
        assert_eq!(
            pairs,
            vec![("FOO", Some("foo")), ("BAR", Some("bar")), ("BAZ", Some("baz"))]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let mapping = EnvFileParser::parse("# heading\n\n  \nFOO=foo\n# FOO=shadowed\n");
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.value("FOO"), Some("foo"));
    }

    #[test]
    fn test_parse_trims_whitespace_around_key_and_value() {
        let mapping = EnvFileParser::parse("  FOO = foo value \n\tBAR=\tbar\n");
        assert_eq!(mapping.value("FOO"), Some("foo value"));
        assert_eq!(mapping.value("BAR"), Some("bar"));
    }

    #[test]
    fn test_parse_bare_key_yields_null_value() {
        let mapping = EnvFileParser::parse("DECLARED\nWITH_VALUE=x\nEMPTY=\n");
        assert_eq!(mapping.get("DECLARED"), Some(None));
        assert_eq!(mapping.get("EMPTY"), Some(Some("")));
    }

    #[test]
    fn test_parse_ignores_malformed_lines() {
        let mapping = EnvFileParser::parse("=value without key\n!!!\nFOO bar\nGOOD=1\n");
        // "FOO bar" has a key followed by junk that is not '='; the whole
        // line is dropped rather than misread.
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.value("GOOD"), Some("1"));
    }

    #[test]
    fn test_parse_duplicate_keys_last_value_first_position() {
        let mapping = EnvFileParser::parse("FOO=first\nBAR=bar\nFOO=last\n");
        let pairs: Vec<(&str, Option<&str>)> = mapping.iter().collect();
        assert_eq!(pairs, vec![("FOO", Some("last")), ("BAR", Some("bar"))]);
    }

    #[test]
    fn test_parse_accepts_dotted_and_underscored_keys() {
        let mapping = EnvFileParser::parse("app.name=denv\nAPP_ENV=ci\n");
        assert_eq!(mapping.value("app.name"), Some("denv"));
        assert_eq!(mapping.value("APP_ENV"), Some("ci"));
    }

    #[test]
    fn test_round_trip_for_well_formed_input() {
        let mut mapping = EnvMapping::new();
        mapping.insert("FOO", Some("foo".to_string()));
        mapping.insert("BARE", None);
        mapping.insert("EMPTY", Some(String::new()));

        let reparsed = EnvFileParser::parse(&mapping.to_dotenv_string());
        assert_eq!(reparsed, mapping);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mapping =
            EnvFileParser::read(&dir.path().join(".env")).expect("missing file should not error");
        assert!(mapping.is_empty());
    }
}
