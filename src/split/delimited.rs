use log::trace;

use super::SplitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delimiter {
    open: char,
    close: char,
    escape: Option<char>,
}

impl Delimiter {
    /// Quote-like pairs open and close on the same character and nothing nests
    /// inside them.
    fn is_symmetric(self) -> bool {
        self.open == self.close
    }
}

/// Splits a string at top-level separator characters.
///
/// Regions enclosed by a configured delimiter pair are opaque: separators
/// inside them do not split. Asymmetric pairs such as `(`/`)` nest, and any
/// configured pair may open inside them. Symmetric pairs such as `'`/`'` are
/// fully opaque apart from their own escape character.
///
/// # Example
///
/// ```
/// use proposition::split::DelimitedSplitter;
///
/// let splitter = DelimitedSplitter::new(',').delimiter('\'', '\'', Some('\\'));
/// assert_eq!(splitter.split("a,'b,c',d", false).unwrap(), ["a", "'b,c'", "d"]);
/// assert_eq!(splitter.split("a,'b,c',d", true).unwrap(), ["a", "b,c", "d"]);
/// ```
#[derive(Debug, Clone)]
pub struct DelimitedSplitter {
    separator: char,
    delimiters: Vec<Delimiter>,
}

impl DelimitedSplitter {
    /// Create a splitter with no delimiter pairs configured.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            delimiters: Vec::new(),
        }
    }

    /// Create a splitter from parallel `open`/`close` strings, one pair per
    /// character position, and an optional parallel string of escape characters.
    ///
    /// A position past the end of `escape` has no escape character. Characters
    /// beyond the shorter of `open` and `close` are ignored.
    #[must_use]
    pub fn with_pairs(separator: char, open: &str, close: &str, escape: Option<&str>) -> Self {
        debug_assert_eq!(open.chars().count(), close.chars().count());
        let mut escapes = escape.unwrap_or_default().chars();
        open.chars()
            .zip(close.chars())
            .fold(Self::new(separator), |splitter, (open, close)| {
                splitter.delimiter(open, close, escapes.next())
            })
    }

    /// Add a delimiter pair. `escape`, when set, makes the character following it
    /// literal while inside this pair.
    #[must_use]
    pub fn delimiter(mut self, open: char, close: char, escape: Option<char>) -> Self {
        self.delimiters.push(Delimiter {
            open,
            close,
            escape,
        });
        self
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    fn opening(&self, ch: char) -> Option<Delimiter> {
        self.delimiters.iter().copied().find(|d| d.open == ch)
    }

    fn is_stray_close(&self, ch: char) -> bool {
        self.delimiters
            .iter()
            .any(|d| !d.is_symmetric() && d.close == ch)
    }

    /// Split `input` at top-level separators.
    ///
    /// With `clean` set, the outermost delimiter characters and the escape
    /// characters inside them are dropped from the emitted segments. Empty input
    /// yields no segments; otherwise a trailing separator yields a final empty
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError`] if a delimiter is left open at the end of input or
    /// a closing character appears at the top level.
    pub fn split(&self, input: &str, clean: bool) -> Result<Vec<String>, SplitError> {
        let mut segments = Vec::new();
        if input.is_empty() {
            return Ok(segments);
        }

        let mut current = String::new();
        let mut open: Vec<Delimiter> = Vec::new();
        let mut chars = input.char_indices();

        while let Some((offset, ch)) = chars.next() {
            let Some(&active) = open.last() else {
                if ch == self.separator {
                    segments.push(std::mem::take(&mut current));
                } else if let Some(delimiter) = self.opening(ch) {
                    open.push(delimiter);
                    if !clean {
                        current.push(ch);
                    }
                } else if self.is_stray_close(ch) {
                    return Err(SplitError::UnexpectedClose {
                        input: input.to_owned(),
                        found: ch,
                        offset,
                    });
                } else {
                    current.push(ch);
                }
                continue;
            };

            // Clean mode only strips the outermost pair and its escapes.
            let outermost = open.len() == 1;

            if active.escape == Some(ch) {
                if !(clean && outermost) {
                    current.push(ch);
                }
                if let Some((_, escaped)) = chars.next() {
                    current.push(escaped);
                }
                continue;
            }

            let closes = ch == active.close;
            if closes {
                open.pop();
            } else if !active.is_symmetric() {
                if let Some(nested) = self.opening(ch) {
                    open.push(nested);
                }
            }

            if !(clean && outermost && closes) {
                current.push(ch);
            }
        }

        if !open.is_empty() {
            return Err(SplitError::UnbalancedDelimiters {
                input: input.to_owned(),
                depth: open.len(),
            });
        }

        segments.push(current);
        trace!("split {input:?} into {} segments", segments.len());
        Ok(segments)
    }
}
