//! Delimiter configuration for HL7 v2 segments

/// Line terminator honored when [`Delimiters::lf_terminated`] is set
pub const SEGMENT_TERMINATOR: char = '\n';

/// The five delimiter characters of an HL7 v2 message plus the
/// line-feed termination flag.
///
/// A delimiter set is read-only and shared by reference across every
/// parse, encode, get and set call. It is normally derived once from the
/// MSH segment of a message; that extraction is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delimiters {
    /// Field delimiter, `|` in the standard set
    pub field: char,
    /// Repetition delimiter, `~` in the standard set
    pub repetition: char,
    /// Component delimiter, `^` in the standard set
    pub component: char,
    /// Subcomponent delimiter, `&` in the standard set
    pub subcomponent: char,
    /// Escape character, `\` in the standard set
    pub escape: char,
    /// Treat a line feed as the end of the segment
    pub lf_terminated: bool,
}

impl Delimiters {
    /// Create a delimiter set with line-feed termination off
    pub fn new(
        field: char,
        repetition: char,
        component: char,
        subcomponent: char,
        escape: char,
    ) -> Self {
        Self {
            field,
            repetition,
            component,
            subcomponent,
            escape,
            lf_terminated: false,
        }
    }

    /// The standard HL7 delimiter set `|^~\&`
    pub fn standard() -> Self {
        Self::new('|', '~', '^', '&', '\\')
    }

    /// Enable or disable line-feed termination
    pub fn with_lf_termination(mut self, lf_terminated: bool) -> Self {
        self.lf_terminated = lf_terminated;
        self
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::standard()
    }
}
