use log::trace;

/// Which end of the remaining input each step of a [`TupleSplitter`] scans from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    FromStart,
    FromEnd,
    /// Even steps scan from the start, odd steps from the end.
    #[default]
    Alternate,
}

/// Splits a string into exactly `N` parts.
///
/// Step `i` looks for `separators[i % separators.len()]`. Scanning from the
/// start, everything before the first occurrence fills the next free slot from
/// the front; scanning from the end, everything after the last occurrence fills
/// the next free slot from the back. The final step places whatever remains in
/// the last free slot. A separator that is not found moves the whole remainder
/// into the step's slot.
///
/// Anchoring on the *last* closing character is what lets a `name(args)` call
/// be peeled without descending into nested parentheses:
///
/// ```
/// use proposition::split::TupleSplitter;
///
/// let call = TupleSplitter::<3>::new("()");
/// assert_eq!(call.split("and(eq(a,1),eq(b,2))"), ["and", "eq(a,1),eq(b,2)", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct TupleSplitter<const N: usize> {
    separators: Vec<char>,
    direction: Direction,
    invert: bool,
}

impl<const N: usize> TupleSplitter<N> {
    /// Create a splitter cycling through the characters of `separators`,
    /// alternating scan direction.
    #[must_use]
    pub fn new(separators: &str) -> Self {
        Self {
            separators: separators.chars().collect(),
            direction: Direction::default(),
            invert: false,
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Flip the end every step scans from.
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    fn separator(&self, step: usize) -> Option<char> {
        if self.separators.is_empty() {
            return None;
        }
        self.separators.get(step % self.separators.len()).copied()
    }

    fn scans_from_start(&self, step: usize) -> bool {
        let from_start = match self.direction {
            Direction::FromStart => true,
            Direction::FromEnd => false,
            Direction::Alternate => step % 2 == 0,
        };
        from_start != self.invert
    }

    /// Split `input` into `N` parts borrowed from it.
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> [&'a str; N] {
        let mut parts = [""; N];
        let mut rest = input;
        let mut front = 0;
        let mut back = N.saturating_sub(1);

        for step in 0..N {
            if step + 1 == N {
                parts[front] = rest;
                break;
            }

            let separator = self.separator(step);
            if self.scans_from_start(step) {
                match separator.and_then(|sep| rest.split_once(sep)) {
                    Some((head, tail)) => {
                        parts[front] = head;
                        rest = tail;
                    }
                    None => parts[front] = std::mem::take(&mut rest),
                }
                front += 1;
            } else {
                match separator.and_then(|sep| rest.rsplit_once(sep)) {
                    Some((head, tail)) => {
                        parts[back] = tail;
                        rest = head;
                    }
                    None => parts[back] = std::mem::take(&mut rest),
                }
                back = back.saturating_sub(1);
            }
        }

        trace!("tuple split {input:?} into {parts:?}");
        parts
    }
}
