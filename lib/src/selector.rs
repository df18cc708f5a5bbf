//! Parsing of combined `small[,big]` font selections.

/// A font selection split into its name tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec<'a> {
    /// Name of the small font.
    pub small: &'a str,
    /// Name of the big font, if one was given.
    pub big: Option<&'a str>,
}

impl<'a> FontSpec<'a> {
    /// Split `spec` at its last comma.
    ///
    /// Everything before that comma, including any earlier commas, is the small
    /// font name.  A comma in the final position does not split: `"vip,"` is a
    /// single (invalid) small font name.
    pub fn parse(spec: &'a str) -> Self {
        let bytes = spec.as_bytes();
        let head = &bytes[..bytes.len().saturating_sub(1)];
        match head.iter().rposition(|&b| b == b',') {
            // ',' is ASCII, so both sides are char boundaries
            Some(pos) => FontSpec { small: &spec[..pos], big: Some(&spec[pos + 1..]) },
            None => FontSpec { small: spec, big: None },
        }
    }
}
