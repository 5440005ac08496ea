//! Field level of the segment tree

use std::fmt;

use crate::component::Component;
use crate::delimiters::Delimiters;
use crate::location::Location;
use crate::tokenizer::{join, split_escaped};

/// One field repetition: a sequence number, a raw value and its components.
///
/// Repetitions of the same field are sibling `Field` entries in the
/// segment sharing a sequence number; each entry carries the components
/// of one repetition. Sequence numbers come from parse order and are not
/// validated against any schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    seq: usize,
    value: String,
    components: Vec<Component>,
}

impl Field {
    /// Parse a raw field value into components
    pub fn parse(value: impl Into<String>, seq: usize, delimiters: &Delimiters) -> Self {
        let value = value.into();
        let components = split_escaped(&value, delimiters.component, delimiters.escape)
            .into_iter()
            .map(|slice| Component::parse(slice, delimiters))
            .collect();
        Self {
            seq,
            value,
            components,
        }
    }

    /// Wrap a raw value in a single component and subcomponent, bypassing
    /// the splitter
    pub(crate) fn force(value: impl Into<String>, seq: usize) -> Self {
        let value = value.into();
        Self {
            seq,
            components: vec![Component::force(value.clone())],
            value,
        }
    }

    /// Sequence number of this field; the segment ID occupies sequence 0
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Raw value of this field repetition
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Components in order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub(crate) fn encode(&self, delimiters: &Delimiters) -> String {
        join(
            self.components.iter().map(Component::value),
            delimiters.component,
        )
    }

    /// Resolve a read at this field.
    ///
    /// Without a component index the whole field value is returned; a
    /// component index past the parsed components reads as empty.
    pub fn get(&self, location: &Location) -> String {
        match location.component {
            None => self.value.clone(),
            Some(index) => index
                .checked_sub(1)
                .and_then(|i| self.components.get(i))
                .map(|component| component.get(location))
                .unwrap_or_default(),
        }
    }

    /// Apply a write at this field, creating missing components
    pub(crate) fn set(&mut self, location: &Location, value: &str, delimiters: &Delimiters) {
        match location.component {
            None => *self = Self::parse(value, self.seq, delimiters),
            Some(index) => {
                let slot = index.saturating_sub(1);
                while self.components.len() <= slot {
                    self.components.push(Component::force(""));
                }
                self.components[slot].set(location, value, delimiters);
                self.value = self.encode(delimiters);
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
