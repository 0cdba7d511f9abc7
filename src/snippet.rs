use crate::{format, Argument, FormatError, Transform};

/// A block of text normalized by a [`Transform`].
///
/// The transformation runs exactly once, at construction; the result is
/// owned by the snippet and never recomputed or mutated afterwards. The raw
/// text must be known at compile time: the `'static` bound rejects
/// runtime-built strings.
///
/// Note that the transform is ignored when comparing snippets; only the
/// finished content takes part in equality, ordering, and hashing.
#[derive(Debug, Clone, Eq)]
pub struct Snippet {
    content: Box<str>,
    transform: Transform,
    flags: SnippetFlags,
}

bitflags::bitflags! {
    /// Properties of a snippet's finished content, computed once at
    /// construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SnippetFlags: u8 {
        const HAS_NEWLINES = 0b0000_0001;
        const HAS_PARAGRAPH_BREAKS = 0b0000_0010;
        const HAS_PLACEHOLDERS = 0b0000_0100;
    }
}

impl SnippetFlags {
    fn scan(content: &str) -> SnippetFlags {
        let mut flags = SnippetFlags::empty();
        if content.contains('\n') {
            flags |= SnippetFlags::HAS_NEWLINES;
        }
        if content.contains("\n\n") {
            flags |= SnippetFlags::HAS_PARAGRAPH_BREAKS;
        }

        // A placeholder is a `{}` pair that is not part of a `{{`/`}}`
        // escape.
        let bytes = content.as_bytes();
        let mut i = 0;
        while i + 1 < bytes.len() {
            match (bytes[i], bytes[i + 1]) {
                (b'{', b'{') | (b'}', b'}') => i += 2,
                (b'{', b'}') => {
                    flags |= SnippetFlags::HAS_PLACEHOLDERS;
                    break;
                }
                _ => i += 1,
            }
        }
        flags
    }
}

impl Snippet {
    /// Apply `transform` to `raw` and keep the result.
    pub fn new(raw: &'static str, transform: Transform) -> Self {
        let content = transform.apply(raw).into_boxed_str();
        let flags = SnippetFlags::scan(&content);
        Snippet {
            content,
            transform,
            flags,
        }
    }

    #[inline]
    pub fn unindented(raw: &'static str) -> Self {
        Self::new(raw, Transform::Unindent)
    }

    #[inline]
    pub fn folded(raw: &'static str) -> Self {
        Self::new(raw, Transform::Fold)
    }

    /// The transformed content.
    #[inline]
    pub fn value(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[inline]
    pub fn flags(&self) -> SnippetFlags {
        self.flags
    }

    /// Substitute positional `{}` placeholders in the content with `args`.
    ///
    /// The content itself is never altered; a new string is returned, or
    /// the formatter's error when the placeholder and argument counts do
    /// not match.
    #[inline]
    pub fn format(&self, args: &[Argument]) -> Result<String, FormatError> {
        format(self.value(), args)
    }
}

impl std::hash::Hash for Snippet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl Ord for Snippet {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.content.cmp(&other.content)
    }
}

impl PartialOrd for Snippet {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Snippet {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl PartialEq<str> for Snippet {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.value() == other
    }
}

impl PartialEq<&str> for Snippet {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.value() == *other
    }
}

impl PartialEq<String> for Snippet {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.value() == other
    }
}

impl PartialEq<Snippet> for str {
    #[inline]
    fn eq(&self, other: &Snippet) -> bool {
        self == other.value()
    }
}

impl PartialEq<Snippet> for &str {
    #[inline]
    fn eq(&self, other: &Snippet) -> bool {
        *self == other.value()
    }
}

impl PartialEq<Snippet> for String {
    #[inline]
    fn eq(&self, other: &Snippet) -> bool {
        self == other.value()
    }
}

impl PartialOrd<str> for Snippet {
    #[inline]
    fn partial_cmp(&self, other: &str) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(other)
    }
}

impl PartialOrd<&str> for Snippet {
    #[inline]
    fn partial_cmp(&self, other: &&str) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(*other)
    }
}

impl PartialOrd<String> for Snippet {
    #[inline]
    fn partial_cmp(&self, other: &String) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(other.as_str())
    }
}

impl PartialOrd<Snippet> for str {
    #[inline]
    fn partial_cmp(&self, other: &Snippet) -> Option<std::cmp::Ordering> {
        self.partial_cmp(other.value())
    }
}

impl PartialOrd<Snippet> for &str {
    #[inline]
    fn partial_cmp(&self, other: &Snippet) -> Option<std::cmp::Ordering> {
        (*self).partial_cmp(other.value())
    }
}

impl PartialOrd<Snippet> for String {
    #[inline]
    fn partial_cmp(&self, other: &Snippet) -> Option<std::cmp::Ordering> {
        self.as_str().partial_cmp(other.value())
    }
}

impl std::ops::Deref for Snippet {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.content
    }
}

impl AsRef<str> for Snippet {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Snippet {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

impl<'a> IntoIterator for &'a Snippet {
    type Item = char;
    type IntoIter = std::str::Chars<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.content.chars()
    }
}
