//! Scroll-triggered text reveal components.
//!
//! Five variants: word-stagger fade, typewriter, line-stagger fade,
//! scroll-linked fade, and letter-stagger fade. Each component detects its
//! own visibility and animates once on first viewport entry, except the
//! scroll-linked variant which follows scroll position continuously.

use std::time::Duration;

use dioxus::prelude::*;

use crate::progress::{SCROLL_OFFSET_PX, SCROLL_OPACITY};
use crate::visibility::{next_element_id, use_scroll_progress, use_viewport_entry};

/// Per-word transition delay for [`SplitTextReveal`].
const WORD_STAGGER_SECS: f64 = 0.1;

/// Per-line transition delay for [`LineStaggerReveal`].
const LINE_STAGGER_SECS: f64 = 0.2;

/// Per-letter transition delay for [`LetterStaggerReveal`].
const LETTER_STAGGER_SECS: f64 = 0.02;

/// Typewriter tick: one additional character is revealed per tick.
const TYPE_TICK_MS: u64 = 50;

/// Entry margin for the word-stagger reveal (fraction of viewport height).
const WORD_ENTRY_MARGIN: f64 = 0.10;

/// Entry margin for the line-stagger reveal.
const LINE_ENTRY_MARGIN: f64 = 0.20;

/// Splits text on single spaces, preserving word order.
///
/// Matches the display semantics exactly: consecutive spaces produce empty
/// fragments, punctuation stays attached to its word.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Splits text on newline separators, preserving line order.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Splits text into individual characters, one fragment per character
/// including spaces.
pub fn split_letters(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Maps a character to its displayed form: spaces become non-breaking spaces
/// so the fragment keeps its width.
pub fn display_letter(ch: char) -> char {
    if ch == ' ' {
        '\u{a0}'
    } else {
        ch
    }
}

/// Incremental reveal state for the typewriter effect.
///
/// The shown length is non-decreasing and reaches the full text length
/// exactly once, after which ticking is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterState {
    text: String,
    total: usize,
    shown: usize,
}

impl TypewriterState {
    /// Creates a state with nothing revealed yet.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            total,
            shown: 0,
        }
    }

    /// Reveals one more character. Returns false once already complete.
    pub fn tick(&mut self) -> bool {
        if self.shown >= self.total {
            return false;
        }
        self.shown += 1;
        true
    }

    /// Number of characters currently revealed.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether the full text is revealed.
    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }

    /// The currently revealed prefix.
    pub fn visible_text(&self) -> String {
        self.text.chars().take(self.shown).collect()
    }
}

/// Word-stagger fade: each word slides up into place with a left-to-right
/// cascade once the container first enters the viewport.
#[component]
pub fn SplitTextReveal(text: String, class: Option<String>) -> Element {
    let element_id = use_hook(|| next_element_id("split-reveal"));
    let entered = use_viewport_entry(element_id.clone(), WORD_ENTRY_MARGIN);
    let revealed = *entered.read();
    let extra = class.unwrap_or_default();
    let words: Vec<String> = split_words(&text).into_iter().map(str::to_owned).collect();

    rsx! {
        div {
            id: "{element_id}",
            class: "split-reveal {extra}",
            for (index, word) in words.into_iter().enumerate() {
                {
                    let delay = index as f64 * WORD_STAGGER_SECS;
                    rsx! {
                        span {
                            key: "{index}",
                            class: if revealed { "reveal-word entered" } else { "reveal-word" },
                            style: "transition-delay: {delay}s;",
                            "{word}"
                        }
                    }
                }
            }
        }
    }
}

/// Typewriter: reveals one character per tick after first viewport entry,
/// with an endlessly blinking caret.
///
/// The tick task is scoped to the component, so an unmount before completion
/// drops the timer.
#[component]
pub fn TypewriterReveal(text: String, class: Option<String>) -> Element {
    let element_id = use_hook(|| next_element_id("typewriter"));
    let entered = use_viewport_entry(element_id.clone(), 0.0);
    let mut typing = use_signal(|| TypewriterState::new(text.clone()));
    let extra = class.unwrap_or_default();

    // Start ticking on first entry. The latch flips false->true exactly once,
    // so only a single tick task is ever spawned.
    use_effect(move || {
        if *entered.read() {
            spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(TYPE_TICK_MS)).await;
                    let complete = {
                        let mut state = typing.write();
                        state.tick();
                        state.is_complete()
                    };
                    if complete {
                        break;
                    }
                }
            });
        }
    });

    let shown_text = typing.read().visible_text();

    rsx! {
        div {
            id: "{element_id}",
            class: "typewriter-reveal {extra}",
            span { class: "typewriter-text", "{shown_text}" }
            span { class: "typewriter-caret" }
        }
    }
}

/// Line-stagger fade: each newline-separated line slides into place with a
/// coarser per-line delay.
#[component]
pub fn LineStaggerReveal(text: String, class: Option<String>) -> Element {
    let element_id = use_hook(|| next_element_id("line-reveal"));
    let entered = use_viewport_entry(element_id.clone(), LINE_ENTRY_MARGIN);
    let revealed = *entered.read();
    let extra = class.unwrap_or_default();
    let lines: Vec<String> = split_lines(&text).into_iter().map(str::to_owned).collect();

    rsx! {
        div {
            id: "{element_id}",
            class: "line-reveal {extra}",
            for (index, line) in lines.into_iter().enumerate() {
                {
                    let delay = index as f64 * LINE_STAGGER_SECS;
                    rsx! {
                        div {
                            key: "{index}",
                            class: if revealed { "reveal-line entered" } else { "reveal-line" },
                            style: "transition-delay: {delay}s;",
                            "{line}"
                        }
                    }
                }
            }
        }
    }
}

/// Scroll-linked reveal: opacity and vertical offset follow the container's
/// progress through the viewport, forward and backward.
#[component]
pub fn ScrollLinkedReveal(class: Option<String>, children: Element) -> Element {
    let element_id = use_hook(|| next_element_id("scroll-reveal"));
    let progress = use_scroll_progress(element_id.clone());
    let p = *progress.read();
    let opacity = SCROLL_OPACITY.sample(p);
    let offset = SCROLL_OFFSET_PX.sample(p);
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            id: "{element_id}",
            class: "scroll-reveal {extra}",
            style: "opacity: {opacity}; transform: translateY({offset}px);",
            {children}
        }
    }
}

/// Letter-stagger fade: every character fades in individually with a very
/// fine cascade. Spaces render as non-breaking spaces with reserved width.
#[component]
pub fn LetterStaggerReveal(text: String, class: Option<String>) -> Element {
    let element_id = use_hook(|| next_element_id("letter-reveal"));
    let entered = use_viewport_entry(element_id.clone(), 0.0);
    let revealed = *entered.read();
    let extra = class.unwrap_or_default();
    let letters = split_letters(&text);

    rsx! {
        div {
            id: "{element_id}",
            class: "letter-reveal {extra}",
            for (index, ch) in letters.into_iter().enumerate() {
                {
                    let delay = index as f64 * LETTER_STAGGER_SECS;
                    let display = display_letter(ch);
                    let mut fragment_class = String::from("reveal-letter");
                    if ch == ' ' {
                        fragment_class.push_str(" reveal-letter-space");
                    }
                    if revealed {
                        fragment_class.push_str(" entered");
                    }
                    rsx! {
                        span {
                            key: "{index}",
                            class: "{fragment_class}",
                            style: "transition-delay: {delay}s;",
                            "{display}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_on_single_spaces() {
        assert_eq!(split_words("Track Your Ratings"), vec!["Track", "Your", "Ratings"]);
        // Consecutive spaces are not collapsed.
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        // Punctuation stays attached.
        assert_eq!(split_words("dream job!"), vec!["dream", "job!"]);
    }

    #[test]
    fn test_split_words_preserves_order() {
        let words = split_words("one two three four");
        assert_eq!(words.join(" "), "one two three four");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("first\nsecond"), vec!["first", "second"]);
        assert_eq!(split_lines("no newline"), vec!["no newline"]);
    }

    #[test]
    fn test_split_letters_one_fragment_per_char() {
        let letters = split_letters("a b");
        assert_eq!(letters, vec!['a', ' ', 'b']);
        assert_eq!(display_letter(' '), '\u{a0}');
        assert_eq!(display_letter('x'), 'x');
    }

    #[test]
    fn test_split_letters_preserves_order() {
        let text = "Smart feedback";
        let rebuilt: String = split_letters(text).into_iter().collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_typewriter_non_decreasing_and_stops() {
        let mut state = TypewriterState::new("hey");
        let mut previous = state.shown();
        let mut completions = 0;

        for _ in 0..10 {
            state.tick();
            assert!(state.shown() >= previous);
            previous = state.shown();
            if state.shown() == 3 {
                completions += 1;
            }
        }

        // Reached full length and stayed there; ticking past the end reports
        // no further advance.
        assert_eq!(state.shown(), 3);
        assert!(state.is_complete());
        assert!(completions >= 1);
        assert!(!state.tick());
        assert_eq!(state.visible_text(), "hey");
    }

    #[test]
    fn test_typewriter_visible_prefix() {
        let mut state = TypewriterState::new("abc");
        assert_eq!(state.visible_text(), "");
        state.tick();
        assert_eq!(state.visible_text(), "a");
        state.tick();
        assert_eq!(state.visible_text(), "ab");
    }

    #[test]
    fn test_typewriter_empty_text_is_complete() {
        let mut state = TypewriterState::new("");
        assert!(state.is_complete());
        assert!(!state.tick());
    }
}
