use crate::state::{OptionState, QuestItem};

/// What: Remove prefixes applied by an earlier annotation pass.
///
/// Inputs:
/// - `text`: Host text, possibly starting with `<col=..>X</col> ` prefixes.
///
/// Output:
/// - The base label.
///
/// Details:
/// - Everything up to the last `>` plus the single space after it is dropped,
///   which removes any number of stacked prefixes at once.
#[must_use]
pub fn strip_annotations(text: &str) -> &str {
    match text.rfind('>') {
        Some(i) => {
            let rest = &text[i + 1..];
            rest.strip_prefix(' ').unwrap_or(rest)
        }
        None => text,
    }
}

/// What: Render the label text for a row.
///
/// Inputs:
/// - `base`: Current host text (annotated or not).
/// - `item`: Quest data providing length and difficulty.
/// - `options`: Current option snapshot.
///
/// Output:
/// - `[difficulty][length]label`, each prefix present only when its option is on
///   and the category is known.
///
/// Details:
/// - Idempotent: feeding the output back in yields the same output.
#[must_use]
pub fn annotate(base: &str, item: &QuestItem, options: &OptionState) -> String {
    let mut s = String::from(strip_annotations(base));
    if options.show_length
        && let Some(length) = item.length
    {
        s.insert_str(0, length.prefix());
    }
    // Inserted after length, so difficulty ends up leftmost.
    if options.show_difficulty
        && let Some(difficulty) = item.difficulty
    {
        s.insert_str(0, difficulty.prefix());
    }
    s
}
