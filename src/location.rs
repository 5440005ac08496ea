//! Addressing descriptor for reads and writes within a segment

/// Selects a field, repetition, component or subcomponent position.
///
/// Indices follow HL7 numbering: the field sequence counts from 0 (the
/// segment ID occupies sequence 0), while repetition, component and
/// subcomponent indices count from 1. A `Location` without a field
/// sequence addresses the whole segment. A more specific index is only
/// meaningful when every less specific index above it is set; turning a
/// path syntax such as `PID-3.1` into a `Location` is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Field sequence number; `None` addresses the whole segment
    pub field: Option<usize>,
    /// Repetition of the field, counted from 1
    pub repetition: Option<usize>,
    /// Component within the repetition, counted from 1
    pub component: Option<usize>,
    /// Subcomponent within the component, counted from 1
    pub subcomponent: Option<usize>,
}

impl Location {
    /// Address the whole segment
    pub fn segment() -> Self {
        Self::default()
    }

    /// Address a field by sequence number
    pub fn field(seq: usize) -> Self {
        Self {
            field: Some(seq),
            ..Self::default()
        }
    }

    /// Select one repetition of the field
    pub fn with_repetition(mut self, repetition: usize) -> Self {
        self.repetition = Some(repetition);
        self
    }

    /// Select a component within the field
    pub fn with_component(mut self, component: usize) -> Self {
        self.component = Some(component);
        self
    }

    /// Select a subcomponent within the component
    pub fn with_subcomponent(mut self, subcomponent: usize) -> Self {
        self.subcomponent = Some(subcomponent);
        self
    }

    /// Whether this location addresses the whole segment
    pub fn is_segment(&self) -> bool {
        self.field.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_location() {
        let location = Location::segment();
        assert!(location.is_segment());
        assert_eq!(location.component, None);
    }

    #[test]
    fn test_builder_chain() {
        let location = Location::field(3).with_repetition(2).with_component(1);
        assert!(!location.is_segment());
        assert_eq!(location.field, Some(3));
        assert_eq!(location.repetition, Some(2));
        assert_eq!(location.component, Some(1));
        assert_eq!(location.subcomponent, None);
    }
}
