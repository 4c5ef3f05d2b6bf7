//! Labeled-line extraction for free-text AI responses.
//!
//! Generator responses follow a documented labeled-line convention
//! ("Degree: …", "Start date: 2021-01-01"). Each field is captured
//! independently: from its label up to the next recognized label or the end of
//! the text. The text contract is fragile by nature, so it is kept in one
//! table-driven pass that can be tested apart from any network call.

use std::collections::BTreeMap;

use regex::Regex;

/// One recognized label. `required` marks fields the caller treats as
/// mandatory; extraction itself never fails on a missing label.
#[derive(Debug, Clone, Copy)]
pub struct LabelSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// The outcome of an extraction pass: the fields that were found, and the
/// keys of labels that were not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub fields: BTreeMap<&'static str, String>,
    pub missing: Vec<&'static str>,
}

impl Extraction {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// True when every label marked `required` was found.
    pub fn required_present(&self, specs: &[LabelSpec]) -> bool {
        specs
            .iter()
            .filter(|s| s.required)
            .all(|s| self.fields.contains_key(s.key))
    }
}

/// Runs one extraction pass over `text` with the given label table.
///
/// A label matches at the start of a line (leading whitespace tolerated). The
/// captured value runs until the next recognized label and is trimmed; an
/// empty capture counts as missing.
pub fn extract_labeled_fields(text: &str, specs: &[LabelSpec]) -> Extraction {
    // Positions of every label occurrence, so each capture knows where the
    // next recognized label starts.
    let mut occurrences: Vec<(usize, usize, &'static str)> = Vec::new();
    for spec in specs {
        let pattern = format!(r"(?mi)^[ \t]*{}[ \t]*:[ \t]*", regex::escape(spec.label));
        let re = Regex::new(&pattern).expect("label pattern is valid");
        if let Some(m) = re.find(text) {
            occurrences.push((m.start(), m.end(), spec.key));
        }
    }
    occurrences.sort_by_key(|(start, _, _)| *start);

    let mut extraction = Extraction::default();
    for (index, (_, value_start, key)) in occurrences.iter().copied().enumerate() {
        let value_end = occurrences
            .get(index + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(text.len());
        let value = text[value_start..value_end].trim();
        if !value.is_empty() {
            extraction.fields.insert(key, value.to_string());
        }
    }

    for spec in specs {
        if !extraction.fields.contains_key(spec.key) {
            extraction.missing.push(spec.key);
        }
    }
    extraction
}

/// Accepts a value only when it is a bare `YYYY-MM-DD` date, the storage form
/// for generated dates. Anything else is treated as absent.
pub fn as_iso_date(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("static regex");
    re.find(value).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK_SPECS: &[LabelSpec] = &[
        LabelSpec {
            key: "position",
            label: "Job title",
            required: false,
        },
        LabelSpec {
            key: "company",
            label: "Company",
            required: false,
        },
        LabelSpec {
            key: "start_date",
            label: "Start date",
            required: false,
        },
        LabelSpec {
            key: "end_date",
            label: "End date",
            required: false,
        },
        LabelSpec {
            key: "description",
            label: "Description",
            required: false,
        },
    ];

    #[test]
    fn test_extracts_single_line_fields() {
        let text = "Job title: Kỹ sư phần mềm\nCompany: Tech Company X\n";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(extraction.get("position"), Some("Kỹ sư phần mềm"));
        assert_eq!(extraction.get("company"), Some("Tech Company X"));
    }

    #[test]
    fn test_multiline_tail_field_captures_to_end() {
        let text = "Job title: Developer\nDescription: • bullet one\n• bullet two\n• bullet three";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(
            extraction.get("description"),
            Some("• bullet one\n• bullet two\n• bullet three")
        );
    }

    #[test]
    fn test_capture_stops_at_next_recognized_label() {
        let text = "Description: làm việc với khách hàng\nEnd date: 2023-12-31";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(extraction.get("description"), Some("làm việc với khách hàng"));
        assert_eq!(extraction.get("end_date"), Some("2023-12-31"));
    }

    #[test]
    fn test_missing_labels_are_reported_not_errors() {
        let text = "Job title: Developer";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(extraction.get("company"), None);
        assert!(extraction.missing.contains(&"company"));
        assert!(extraction.missing.contains(&"end_date"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let text = "Company:\nJob title: Developer";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(extraction.get("company"), None);
        assert!(extraction.missing.contains(&"company"));
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let text = "job title: Developer\nCOMPANY: Tech Company X";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        assert_eq!(extraction.get("position"), Some("Developer"));
        assert_eq!(extraction.get("company"), Some("Tech Company X"));
    }

    #[test]
    fn test_mid_line_label_is_not_recognized() {
        let text = "Job title: Developer at a startup, Company: inline";
        let extraction = extract_labeled_fields(text, WORK_SPECS);
        // the whole line belongs to the first label; the inline mention is not
        // a label of its own
        assert_eq!(
            extraction.get("position"),
            Some("Developer at a startup, Company: inline")
        );
        assert!(extraction.missing.contains(&"company"));
    }

    #[test]
    fn test_required_present_checks_only_required_keys() {
        let specs = &[
            LabelSpec {
                key: "short",
                label: "Short-term",
                required: true,
            },
            LabelSpec {
                key: "long",
                label: "Long-term",
                required: true,
            },
        ];
        let both = extract_labeled_fields("Short-term: a\nLong-term: b", specs);
        assert!(both.required_present(specs));
        let one = extract_labeled_fields("Short-term: a", specs);
        assert!(!one.required_present(specs));
    }

    #[test]
    fn test_as_iso_date_accepts_only_date_shapes() {
        assert_eq!(as_iso_date(Some("2021-01-01")), Some("2021-01-01".to_string()));
        assert_eq!(
            as_iso_date(Some("2021-01-01 (approximately)")),
            Some("2021-01-01".to_string())
        );
        assert_eq!(as_iso_date(Some("January 2021")), None);
        assert_eq!(as_iso_date(Some("not provided")), None);
        assert_eq!(as_iso_date(None), None);
    }
}
