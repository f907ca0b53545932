use regex::Regex;
use std::sync::OnceLock;

/// One `[label]` marker and the text that follows it up to the next marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub body: String,
}

impl Section {
    fn write_into(&self, out: &mut String) {
        out.push('[');
        out.push_str(&self.label);
        out.push_str("]\n");
        out.push_str(&self.body);
        out.push_str("\n\n");
    }
}

fn section_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A marker never spans a line break: LF, CR, U+2028 or U+2029.
    RE.get_or_init(|| {
        Regex::new(r"\[([^\n\r\u{2028}\u{2029}]*?)\]").expect("section marker pattern is valid")
    })
}

/// Splits model output on `[label]` markers.
///
/// Text before the first marker is dropped, as are markers whose label is blank
/// (together with their body). Bodies are trimmed; labels are kept verbatim.
pub fn sections(raw: &str) -> Vec<Section> {
    let re = section_marker();
    let markers: Vec<(usize, usize, &str)> = re
        .captures_iter(raw)
        .filter_map(|c| {
            let whole = c.get(0)?;
            let label = c.get(1).map_or("", |m| m.as_str());
            Some((whole.start(), whole.end(), label))
        })
        .collect();

    let mut out = Vec::with_capacity(markers.len());
    for (i, &(_, body_start, label)) in markers.iter().enumerate() {
        if label.trim().is_empty() {
            continue;
        }
        let body_end = markers.get(i + 1).map_or(raw.len(), |next| next.0);
        out.push(Section {
            label: label.to_string(),
            body: raw[body_start..body_end].trim().to_string(),
        });
    }
    out
}

/// Re-emits model output as `[label]\n<body>\n\n` blocks, trailing whitespace trimmed.
///
/// Total over its input: `None`, empty and marker-free input all yield an empty string.
pub fn reformat(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };

    let mut out = String::with_capacity(raw.len() + 16);
    for section in sections(raw) {
        section.write_into(&mut out);
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_input_is_empty() {
        assert_eq!(reformat(None), "");
        assert_eq!(reformat(Some("")), "");
    }

    #[test]
    fn splits_sections_and_separates_with_blank_line() {
        let raw = "[Verse 1]\nLine1\nLine2\n[Chorus]\nLine3";
        assert_eq!(reformat(Some(raw)), "[Verse 1]\nLine1\nLine2\n\n[Chorus]\nLine3");
    }

    #[test]
    fn leading_text_before_first_label_is_dropped() {
        assert_eq!(reformat(Some("intro text[Verse 1]\nHello")), "[Verse 1]\nHello");
        assert_eq!(reformat(Some("   \n[Verse 1] Hello  ")), "[Verse 1]\nHello");
    }

    #[test]
    fn text_without_labels_formats_to_nothing() {
        assert_eq!(reformat(Some("just some words\nand more")), "");
    }

    #[test]
    fn trailing_label_keeps_empty_body() {
        assert_eq!(reformat(Some("[Outro]")), "[Outro]");
        assert_eq!(
            reformat(Some("[Verse]\nhi\n[Outro]")),
            "[Verse]\nhi\n\n[Outro]"
        );
        let parsed = sections("[Verse]\nhi\n[Outro]");
        assert_eq!(parsed[1].body, "");
    }

    #[test]
    fn adjacent_labels_emit_empty_body_line() {
        assert_eq!(reformat(Some("[Intro][Verse]\nx")), "[Intro]\n\n\n[Verse]\nx");
    }

    #[test]
    fn blank_labels_are_skipped_with_their_body() {
        assert_eq!(
            reformat(Some("[Verse]\na\n[]\nlost\n[  ]\nalso lost\n[Chorus]\nb")),
            "[Verse]\na\n\n[Chorus]\nb"
        );
    }

    #[test]
    fn labels_keep_their_spelling_and_order() {
        let raw = "[Bridge] b [Verse 2] v [ Chorus ] c";
        let labels: Vec<String> = sections(raw).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Bridge", "Verse 2", " Chorus "]);
    }

    #[test]
    fn marker_does_not_span_lines() {
        assert_eq!(
            reformat(Some("[Verse\n1] nope [Chorus]\nyes")),
            "[Chorus]\nyes"
        );
        for brk in ["\r", "\r\n", "\u{2028}", "\u{2029}"] {
            let raw = format!("[Verse{brk}1] nope [Chorus]\nyes");
            assert_eq!(reformat(Some(&raw)), "[Chorus]\nyes", "break {brk:?}");
        }
    }

    #[test]
    fn reformat_is_idempotent_on_normalized_text() {
        let once = reformat(Some(
            "[Verse 1]\n  Walking home  \n\n\n[Pre-Chorus]\nwait\n[Chorus]\nla la\n\n",
        ));
        assert_eq!(once, "[Verse 1]\nWalking home\n\n[Pre-Chorus]\nwait\n\n[Chorus]\nla la");
        assert_eq!(reformat(Some(&once)), once);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            reformat(Some("préambule [Refrain]\n  café — été  ")),
            "[Refrain]\ncafé — été"
        );
    }
}
