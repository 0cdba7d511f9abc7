pub trait CharExt {
    fn is_indent(self) -> bool;
    fn is_linebreak(self) -> bool;
}

impl CharExt for char {
    #[inline]
    fn is_indent(self) -> bool {
        // Indentation is counted in literal spaces. Tabs are ordinary
        // characters and terminate the indent like anything else.
        self == ' '
    }

    #[inline]
    fn is_linebreak(self) -> bool {
        self == '\n'
    }
}
