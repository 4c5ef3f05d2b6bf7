//! Best-effort natural-language detection for generator inputs. The detected
//! name is passed to the completion capability as a hint so the response
//! follows the input language. Detection never fails a request: an
//! unrecognized input simply sends no hint.

/// Vowels that only occur in Vietnamese orthography (plus the bare đ).
const VIETNAMESE_MARKERS: &str = "ăâđêôơưĂÂĐÊÔƠƯ\
    áàảãạấầẩẫậắằẳẵặéèẻẽẹếềểễệíìỉĩịóòỏõọốồổỗộớờởỡợúùủũụứừửữựýỳỷỹỵ\
    ÁÀẢÃẠẤẦẨẪẬẮẰẲẴẶÉÈẺẼẸẾỀỂỄỆÍÌỈĨỊÓÒỎÕỌỐỒỔỖỘỚỜỞỠỢÚÙỦŨỤỨỪỬỮỰÝỲỶỸỴ";

/// Detects the language of a text fragment.
///
/// Vietnamese is recognized by its diacritic inventory; otherwise a mostly
/// ASCII-alphabetic text is assumed English. Anything else is undetected.
pub fn detect_language(text: &str) -> Option<&'static str> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.chars().any(|c| VIETNAMESE_MARKERS.contains(c)) {
        return Some("Vietnamese");
    }

    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return None;
    }
    let ascii_letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if ascii_letters * 10 >= letters * 9 {
        Some("English")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_vietnamese_by_diacritics() {
        assert_eq!(detect_language("Kỹ sư phần mềm"), Some("Vietnamese"));
        assert_eq!(
            detect_language("Phát triển kỹ năng quản lý dự án"),
            Some("Vietnamese")
        );
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(
            detect_language("Senior software engineer with 5 years of experience"),
            Some("English")
        );
    }

    #[test]
    fn test_empty_input_is_undetected() {
        assert_eq!(detect_language(""), None);
        assert_eq!(detect_language("   "), None);
    }

    #[test]
    fn test_numeric_only_input_is_undetected() {
        assert_eq!(detect_language("2021 - 2023"), None);
    }

    #[test]
    fn test_non_latin_text_is_undetected() {
        assert_eq!(detect_language("ソフトウェアエンジニア"), None);
    }
}
