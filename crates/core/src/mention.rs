//! `@mention` extraction and mention-based entity filtering.
//!
//! Shot text refers to project characters and objects as `@Name` or
//! `@"Quoted Name"`. [`extract_mentions`] scans text for those tokens and
//! [`filter_entities`] narrows a project's characters and objects down to the
//! ones a shot actually mentions. When a shot mentions nothing, every entity
//! is passed through unchanged.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Regex pattern matching one mention. The quoted alternative is tried first
/// at each `@`, falling back to a bare word.
pub const MENTION_PATTERN: &str = r#"@"([^"]+)"|@([\w'-]+)"#;

/// Compiled regex for mention extraction. Compiled once, reused forever.
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN).expect("valid regex"));

/// Lazy, finite sequence of mention tokens found in a piece of text.
///
/// Tokens are yielded trimmed, in order of appearance, duplicates included.
/// Cloning or calling [`Mentions::restart`] gives an independent scan, so the
/// same text can be walked as many times as needed.
#[derive(Debug, Clone)]
pub struct Mentions<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Mentions<'t> {
    /// A fresh scan over the same text, starting from the beginning.
    pub fn restart(&self) -> Self {
        Self {
            text: self.text,
            pos: 0,
        }
    }
}

impl<'t> Iterator for Mentions<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let Some(caps) = MENTION_RE.captures_at(self.text, self.pos) else {
            self.pos = self.text.len();
            return None;
        };
        // Group 0 always participates; every match is at least two bytes long
        // so the scan always advances.
        self.pos = caps.get(0).map_or(self.text.len(), |m| m.end());
        let token = caps.get(1).or_else(|| caps.get(2))?;
        Some(token.as_str().trim())
    }
}

impl FusedIterator for Mentions<'_> {}

/// Scan `text` for `@Name` and `@"Quoted Name"` mentions.
///
/// ```
/// use shotpilot_core::mention::extract_mentions;
///
/// let names: Vec<&str> = extract_mentions(r#"@Alice and @"Bob Smith" met"#).collect();
/// assert_eq!(names, ["Alice", "Bob Smith"]);
/// ```
pub fn extract_mentions(text: &str) -> Mentions<'_> {
    Mentions { text, pos: 0 }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Anything that can be mentioned by name in shot text.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// The free-text fields of a shot that may contain mentions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotText<'a> {
    pub description: Option<&'a str>,
    pub blocking: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl ShotText<'_> {
    /// Join the present, non-empty fields with single spaces.
    pub fn combined(&self) -> String {
        [self.description, self.blocking, self.notes]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Receives mentions that matched no character or object.
///
/// Reporting is diagnostic only and never changes the filter result.
pub trait MentionObserver {
    fn unmatched_mentions(&self, names: &[&str]);
}

impl<F> MentionObserver for F
where
    F: Fn(&[&str]),
{
    fn unmatched_mentions(&self, names: &[&str]) {
        self(names)
    }
}

/// Observer that emits a `tracing` warning for unmatched mentions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MentionObserver for TracingObserver {
    fn unmatched_mentions(&self, names: &[&str]) {
        tracing::warn!(unmatched = ?names, "Shot mentions names that match no character or object");
    }
}

/// Characters and objects selected by a shot's mentions.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult<'e, C, O> {
    pub characters: Vec<&'e C>,
    pub objects: Vec<&'e O>,
    /// Every extracted mention, matched or not.
    pub mentioned_names: Vec<String>,
}

impl<C: NamedEntity, O: NamedEntity> FilterResult<'_, C, O> {
    /// Mentioned names that selected neither a character nor an object.
    pub fn unmatched_names(&self) -> Vec<&str> {
        unmatched(&self.mentioned_names, &self.characters, &self.objects)
    }
}

/// Select the characters and objects mentioned in a shot's text.
///
/// With no mentions, both lists are returned whole and in order. Otherwise
/// each list keeps only the entities whose name equals some mention,
/// ignoring case, in their original order. Mentions that select nothing are
/// reported to `observer`.
pub fn filter_entities<'e, C, O>(
    text: ShotText<'_>,
    characters: &'e [C],
    objects: &'e [O],
    observer: &dyn MentionObserver,
) -> FilterResult<'e, C, O>
where
    C: NamedEntity,
    O: NamedEntity,
{
    let combined = text.combined();
    let mentioned_names: Vec<String> = extract_mentions(&combined).map(str::to_string).collect();

    if mentioned_names.is_empty() {
        return FilterResult {
            characters: characters.iter().collect(),
            objects: objects.iter().collect(),
            mentioned_names,
        };
    }

    let wanted: HashSet<String> = mentioned_names.iter().map(|n| n.to_lowercase()).collect();

    let characters: Vec<&C> = characters
        .iter()
        .filter(|c| wanted.contains(&c.name().to_lowercase()))
        .collect();
    let objects: Vec<&O> = objects
        .iter()
        .filter(|o| wanted.contains(&o.name().to_lowercase()))
        .collect();

    let missing = unmatched(&mentioned_names, &characters, &objects);
    if !missing.is_empty() {
        observer.unmatched_mentions(&missing);
    }

    FilterResult {
        characters,
        objects,
        mentioned_names,
    }
}

fn unmatched<'m, C, O>(mentioned: &'m [String], characters: &[&C], objects: &[&O]) -> Vec<&'m str>
where
    C: NamedEntity,
    O: NamedEntity,
{
    let matched_characters: HashSet<String> =
        characters.iter().map(|c| c.name().to_lowercase()).collect();
    let matched_objects: HashSet<String> =
        objects.iter().map(|o| o.name().to_lowercase()).collect();

    mentioned
        .iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            !matched_characters.contains(&lower) && !matched_objects.contains(&lower)
        })
        .map(String::as_str)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, PartialEq, Serialize)]
    struct Item(&'static str);

    impl NamedEntity for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn mentions(text: &str) -> Vec<&str> {
        extract_mentions(text).collect()
    }

    fn shot(description: &'static str) -> ShotText<'static> {
        ShotText {
            description: Some(description),
            ..Default::default()
        }
    }

    fn silent(_: &[&str]) {}

    // -- extract_mentions --

    #[test]
    fn text_without_at_sign_has_no_mentions() {
        assert!(mentions("A wide shot of the harbour at dawn").is_empty());
        assert!(mentions("").is_empty());
    }

    #[test]
    fn bare_and_quoted_mentions() {
        assert_eq!(
            mentions(r#"@Alice and @"Bob Smith" met"#),
            ["Alice", "Bob Smith"]
        );
    }

    #[test]
    fn hyphens_and_apostrophes_belong_to_bare_word() {
        assert_eq!(mentions("@Multi-Word-Name"), ["Multi-Word-Name"]);
        assert_eq!(mentions("@O'Brien walks in"), ["O'Brien"]);
        assert_eq!(mentions("@R2_D2, beeping"), ["R2_D2"]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        assert_eq!(mentions("@Ann hugs @Ben, then @Ann leaves"), ["Ann", "Ben", "Ann"]);
    }

    #[test]
    fn quoted_mention_is_trimmed() {
        assert_eq!(mentions(r#"@"  The Red Car  " speeds off"#), ["The Red Car"]);
    }

    #[test]
    fn unterminated_quote_is_not_a_mention() {
        assert!(mentions(r#"@"Nobody closes this"#).is_empty());
    }

    #[test]
    fn lone_at_sign_is_ignored() {
        assert_eq!(mentions("meet @ noon with @Eve"), ["Eve"]);
    }

    #[test]
    fn restart_yields_same_sequence() {
        let mut scan = extract_mentions("@A @B @C");
        assert_eq!(scan.next(), Some("A"));
        let replay: Vec<&str> = scan.restart().collect();
        assert_eq!(replay, ["A", "B", "C"]);
        let rest: Vec<&str> = scan.collect();
        assert_eq!(rest, ["B", "C"]);
    }

    // -- ShotText --

    #[test]
    fn combined_skips_absent_and_empty_fields() {
        let text = ShotText {
            description: Some("@Ann"),
            blocking: None,
            notes: Some("@Ben"),
        };
        assert_eq!(text.combined(), "@Ann @Ben");

        let text = ShotText {
            description: Some(""),
            blocking: Some("@Cat"),
            notes: None,
        };
        assert_eq!(text.combined(), "@Cat");
    }

    // -- filter_entities --

    #[test]
    fn no_mentions_passes_everything_through() {
        let characters = [Item("Alice"), Item("Bob")];
        let objects = [Item("Lamp")];

        let result = filter_entities(shot("Establishing shot"), &characters, &objects, &silent);

        assert_eq!(result.characters, [&characters[0], &characters[1]]);
        assert_eq!(result.objects, [&objects[0]]);
        assert!(result.mentioned_names.is_empty());
        assert!(std::ptr::eq(result.characters[0], &characters[0]));
    }

    #[test]
    fn all_text_fields_are_scanned() {
        let characters = [Item("Alice"), Item("Bob"), Item("Cara")];
        let objects = [Item("Lamp"), Item("Sword")];
        let text = ShotText {
            description: Some("@Alice enters"),
            blocking: Some("crosses to @Sword"),
            notes: Some("@Cara off-screen"),
        };

        let result = filter_entities(text, &characters, &objects, &silent);

        assert_eq!(result.characters, [&characters[0], &characters[2]]);
        assert_eq!(result.objects, [&objects[1]]);
        assert_eq!(result.mentioned_names, ["Alice", "Sword", "Cara"]);
    }

    #[test]
    fn matching_ignores_case() {
        let characters = [Item("Alice")];
        let objects: [Item; 0] = [];

        for text in ["@alice", "@ALICE", "@Alice"] {
            let result = filter_entities(shot(text), &characters, &objects, &silent);
            assert_eq!(result.characters, [&characters[0]], "mention {text}");
        }
    }

    #[test]
    fn filter_preserves_candidate_order() {
        let characters = [Item("Zed"), Item("Amy"), Item("Max")];
        let objects: [Item; 0] = [];

        let result = filter_entities(shot("@Max then @Zed"), &characters, &objects, &silent);

        assert_eq!(result.characters, [&characters[0], &characters[2]]);
    }

    #[test]
    fn quoted_names_match_multi_word_entities() {
        let characters = [Item("Bob Smith")];
        let objects = [Item("Red Car")];

        let result = filter_entities(
            shot(r#"@"bob smith" drives the @"Red Car""#),
            &characters,
            &objects,
            &silent,
        );

        assert_eq!(result.characters, [&characters[0]]);
        assert_eq!(result.objects, [&objects[0]]);
    }

    #[test]
    fn unmatched_mentions_are_reported_but_kept() {
        let characters = [Item("Alice")];
        let objects = [Item("Lamp")];
        let seen: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let observer = |names: &[&str]| {
            seen.borrow_mut()
                .extend(names.iter().map(|n| n.to_string()));
        };

        let result = filter_entities(shot("@Alice sees @Ghost"), &characters, &objects, &observer);

        assert_eq!(result.characters, [&characters[0]]);
        assert!(result.objects.is_empty());
        assert_eq!(result.mentioned_names, ["Alice", "Ghost"]);
        assert_eq!(result.unmatched_names(), ["Ghost"]);
        assert_eq!(*seen.borrow(), ["Ghost"]);
    }

    #[test]
    fn observer_not_called_when_everything_matches() {
        let characters = [Item("Alice")];
        let objects = [Item("Lamp")];
        let calls = RefCell::new(0);
        let observer = |_: &[&str]| *calls.borrow_mut() += 1;

        filter_entities(shot("@alice lights the @LAMP"), &characters, &objects, &observer);

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn only_unknown_mentions_yield_empty_lists() {
        let characters = [Item("Alice")];
        let objects = [Item("Lamp")];

        let result = filter_entities(shot("@Nobody"), &characters, &objects, &silent);

        assert!(result.characters.is_empty());
        assert!(result.objects.is_empty());
        assert_eq!(result.mentioned_names, ["Nobody"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let characters = [Item("Alice"), Item("Bob")];
        let objects = [Item("Lamp")];
        let text = shot("@bob holds the @Lamp near @Stranger");

        let first = filter_entities(text, &characters, &objects, &silent);
        let second = filter_entities(text, &characters, &objects, &silent);

        assert_eq!(first, second);
    }

    #[test]
    fn result_serializes_with_camel_case_names() {
        let characters = [Item("Alice")];
        let objects: [Item; 0] = [];

        let result = filter_entities(shot("@Alice"), &characters, &objects, &silent);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["mentionedNames"], serde_json::json!(["Alice"]));
        assert_eq!(json["characters"], serde_json::json!(["Alice"]));
    }
}
