// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core word boundary detection logic.

use unicode_segmentation::UnicodeSegmentation;

/// Returns true if the grapheme cluster is a word boundary (whitespace or punctuation).
///
/// ## Examples
///
/// ```
/// use r3bl_tui::core::graphemes::word_boundaries::is_word_boundary;
///
/// assert_eq!(is_word_boundary(" "), true);   // Space
/// assert_eq!(is_word_boundary("\t"), true);  // Tab
/// assert_eq!(is_word_boundary("-"), true);   // Hyphen
/// assert_eq!(is_word_boundary("."), true);   // Period
/// assert_eq!(is_word_boundary("a"), false);  // Letter
/// assert_eq!(is_word_boundary("5"), false);  // Digit
/// assert_eq!(is_word_boundary("‰∏ñ"), false); // Unicode char
/// ```
#[must_use]
pub fn is_word_boundary(grapheme: &str) -> bool {
    grapheme
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_punctuation())
}

/// Returns true if the grapheme cluster is a word character (not a boundary).
///
/// This is the inverse of `is_word_boundary()`.
#[must_use]
pub fn is_word_char(grapheme: &str) -> bool { !is_word_boundary(grapheme) }

/// Finds the start position of the previous word from the cursor position.
///
/// This function moves backward from the cursor, skipping any boundary characters,
/// then skipping word characters until it finds the start of the previous word.
///
/// ## Algorithm
///
/// 1. Start from cursor position (or end of text if cursor is beyond)
/// 2. Skip any boundary characters (whitespace/punctuation) moving backward
/// 3. Skip word characters moving backward
/// 4. Return the position at the start of the word
///
/// ## Edge Cases
///
/// - If cursor is at position 0, returns 0
/// - If text is empty, returns 0
/// - If only boundary characters before cursor, returns 0
///
/// ## Examples
///
/// ```
/// use r3bl_tui::core::graphemes::word_boundaries::find_prev_word_start;
///
/// assert_eq!(find_prev_word_start("hello world", 11), 6);  // "world" ‚Üí "hello"
/// assert_eq!(find_prev_word_start("hello-world", 11), 6);  // "world" ‚Üí "hello"
/// assert_eq!(find_prev_word_start("hello  world", 12), 7); // Skip multiple spaces
/// assert_eq!(find_prev_word_start("hello", 5), 0);         // Start of text
/// assert_eq!(find_prev_word_start("", 0), 0);              // Empty string
/// ```
#[must_use]
pub fn find_prev_word_start(text: &str, cursor_grapheme_idx: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    let count = graphemes.len();

    if count == 0 || cursor_grapheme_idx == 0 {
        return 0;
    }

    // Start from cursor - 1 (or last grapheme if cursor is beyond end)
    let mut idx = cursor_grapheme_idx.saturating_sub(1).min(count - 1);

    // Skip any boundary characters at/before cursor
    while idx > 0 && is_word_boundary(graphemes[idx].1) {
        idx -= 1;
    }

    // If we're at position 0 and it's a boundary, stay at 0
    if idx == 0 && is_word_boundary(graphemes[0].1) {
        return 0;
    }

    // Now skip word characters to find the start of this word
    while idx > 0 && is_word_char(graphemes[idx].1) {
        idx -= 1;
    }

    // If we stopped on a boundary (and not at position 0), move forward one
    if idx > 0 && is_word_boundary(graphemes[idx].1) {
        idx += 1;
    } else if idx == 0 && is_word_char(graphemes[0].1) {
        // We're at the start and it's a word char, this is the start
        return 0;
    } else if idx == 0 && is_word_boundary(graphemes[0].1) {
        // We're at the start and it's a boundary, move forward
        idx += 1;
    }

    idx
}

/// Finds the end position of the next word from the cursor position.
///
/// This function moves forward from the cursor, skipping any boundary characters,
/// then skipping word characters until it finds the end of the next word.
///
/// ## Algorithm
///
/// 1. Start from cursor position
/// 2. Skip any boundary characters (whitespace/punctuation) moving forward
/// 3. Skip word characters moving forward
/// 4. Return the position after the last word character
///
/// ## Edge Cases
///
/// - If cursor is at end of text, returns text length
/// - If text is empty, returns 0
/// - If only boundary characters after cursor, returns text length
///
/// ## Examples
///
/// ```
/// use r3bl_tui::core::graphemes::word_boundaries::find_next_word_end;
///
/// assert_eq!(find_next_word_end("hello world", 0), 5);   // "hello"
/// assert_eq!(find_next_word_end("hello-world", 0), 5);   // "hello"
/// assert_eq!(find_next_word_end("hello  world", 0), 5);  // Skip to "hello"
/// assert_eq!(find_next_word_end("hello", 0), 5);         // End of text
/// assert_eq!(find_next_word_end("", 0), 0);              // Empty string
/// ```
#[must_use]
pub fn find_next_word_end(text: &str, cursor_grapheme_idx: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    let count = graphemes.len();

    if count == 0 {
        return 0;
    }

    if cursor_grapheme_idx >= count {
        return count;
    }

    let mut idx = cursor_grapheme_idx;

    // Skip any boundary characters at/after cursor
    while idx < count && is_word_boundary(graphemes[idx].1) {
        idx += 1;
    }

    // If we reached the end, return count
    if idx >= count {
        return count;
    }

    // Now skip word characters to find the end of this word
    while idx < count && is_word_char(graphemes[idx].1) {
        idx += 1;
    }

    idx
}

/// Finds the start position of the next word from the cursor position.
///
/// This function moves forward from the cursor, skipping any word characters
/// (to finish the current word), then skipping boundary characters, until it
/// finds the start of the next word.
///
/// ## Algorithm
///
/// 1. Start from cursor position
/// 2. Skip any word characters at/after cursor (finish current word)
/// 3. Skip boundary characters (whitespace/punctuation) moving forward
/// 4. Return the position at the start of the next word
///
/// ## Edge Cases
///
/// - If cursor is at end of text, returns text length
/// - If text is empty, returns 0
/// - If only boundary characters after cursor, returns text length
///
/// ## Examples
///
/// ```
/// use r3bl_tui::core::graphemes::word_boundaries::find_next_word_start;
///
/// // "one two three"
/// //  012 456 89ABC (C=12)
/// assert_eq!(find_next_word_start("one two three", 0), 4);   // "one" ‚Üí "two"
/// assert_eq!(find_next_word_start("one two three", 4), 8);   // "two" ‚Üí "three"
/// assert_eq!(find_next_word_start("one-two", 0), 4);         // "one" ‚Üí "two" (skip hyphen)
/// assert_eq!(find_next_word_start("one  two", 0), 5);        // Skip multiple spaces
/// assert_eq!(find_next_word_start("one", 0), 3);             // End of text
/// assert_eq!(find_next_word_start("", 0), 0);                // Empty string
/// ```
#[must_use]
pub fn find_next_word_start(text: &str, cursor_grapheme_idx: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    let count = graphemes.len();

    if count == 0 {
        return 0;
    }

    if cursor_grapheme_idx >= count {
        return count;
    }

    let mut idx = cursor_grapheme_idx;

    // Skip any word characters at/after cursor (finish current word)
    while idx < count && is_word_char(graphemes[idx].1) {
        idx += 1;
    }

    // If we reached the end, return count
    if idx >= count {
        return count;
    }

    // Skip any boundary characters to find the start of next word
    while idx < count && is_word_boundary(graphemes[idx].1) {
        idx += 1;
    }

    idx
}
