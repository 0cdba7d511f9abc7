/// Errors surfaced by positional placeholder substitution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The template has more `{}` placeholders than arguments were given.
    #[error("missing argument for placeholder {placeholder}")]
    MissingArgument { placeholder: usize },
    /// More arguments were given than the template has placeholders.
    #[error("{given} arguments given, but the template takes {taken}")]
    UnusedArguments { given: usize, taken: usize },
    /// Something other than a plain `{}` appeared between braces.
    #[error("unsupported placeholder: {{{0}}}")]
    UnsupportedPlaceholder(String),
    /// A `{` or `}` that is neither doubled nor part of a placeholder.
    #[error("unmatched brace at byte {offset}")]
    UnmatchedBrace { offset: usize },
}

/// A positional argument to [`format`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    Str(&'a str),
    Char(char),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl Argument<'_> {
    fn write_to(&self, out: &mut String) {
        match *self {
            Argument::Str(s) => out.push_str(s),
            Argument::Char(c) => out.push(c),
            Argument::Int(v) => out.push_str(itoa::Buffer::new().format(v)),
            Argument::Uint(v) => out.push_str(itoa::Buffer::new().format(v)),
            Argument::Float(v) => out.push_str(ryu::Buffer::new().format(v)),
            Argument::Bool(v) => out.push_str(if v { "true" } else { "false" }),
        }
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Argument::Str(value)
    }
}

impl<'a> From<&'a String> for Argument<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Argument::Str(value)
    }
}

impl From<char> for Argument<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Argument::Char(value)
    }
}

impl From<bool> for Argument<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

macro_rules! impl_int {
    ($($t:ty,)+) => {
        $(
            impl From<$t> for Argument<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Argument::Int(value as i64)
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, isize,);

macro_rules! impl_uint {
    ($($t:ty,)+) => {
        $(
            impl From<$t> for Argument<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Argument::Uint(value as u64)
                }
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64, usize,);

macro_rules! impl_float {
    ($($t:ty,)+) => {
        $(
            impl From<$t> for Argument<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Argument::Float(value as f64)
                }
            }
        )*
    };
}

impl_float!(f32, f64,);

/// Substitute positional `{}` placeholders in `template` with `args`, left
/// to right.
///
/// `{{` and `}}` escape literal braces. Substitution fails if the number of
/// placeholders does not match the number of arguments; partial output is
/// never returned.
///
/// ```
/// use deindent::format;
///
/// let greeting = format("{}, {}!", &["Hello".into(), "World".into()])?;
/// assert_eq!(greeting, "Hello, World!");
/// # Ok::<(), deindent::FormatError>(())
/// ```
pub fn format(template: &str, args: &[Argument]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;

    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => match bytes.get(i + 1) {
                Some(b'{') => {
                    out.push('{');
                    i += 2;
                }
                Some(b'}') => {
                    let arg = args
                        .get(next)
                        .ok_or(FormatError::MissingArgument { placeholder: next })?;
                    arg.write_to(&mut out);
                    next += 1;
                    i += 2;
                }
                _ => {
                    return match template[i + 1..].find('}') {
                        Some(end) => Err(FormatError::UnsupportedPlaceholder(
                            template[i + 1..i + 1 + end].to_owned(),
                        )),
                        None => Err(FormatError::UnmatchedBrace { offset: i }),
                    };
                }
            },
            b'}' => {
                if bytes.get(i + 1) == Some(&b'}') {
                    out.push('}');
                    i += 2;
                } else {
                    return Err(FormatError::UnmatchedBrace { offset: i });
                }
            }
            _ => {
                // Braces are ASCII, so scanning bytes for the next one
                // always lands on a character boundary.
                let start = i;
                while i < bytes.len() && bytes[i] != b'{' && bytes[i] != b'}' {
                    i += 1;
                }
                out.push_str(&template[start..i]);
            }
        }
    }

    if next < args.len() {
        return Err(FormatError::UnusedArguments {
            given: args.len(),
            taken: next,
        });
    }
    Ok(out)
}
