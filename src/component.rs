//! Component level of the segment tree

use std::fmt;

use crate::delimiters::Delimiters;
use crate::location::Location;
use crate::subcomponent::SubComponent;
use crate::tokenizer::{join, split_escaped};

/// One component of a field: a raw value and its subcomponents.
///
/// Joining the subcomponents with the subcomponent delimiter reproduces
/// the raw value. A force-created component instead wraps the raw value
/// in a single synthetic subcomponent, unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    value: String,
    subcomponents: Vec<SubComponent>,
}

impl Component {
    /// Parse a raw component value into subcomponents
    pub fn parse(value: impl Into<String>, delimiters: &Delimiters) -> Self {
        let value = value.into();
        let subcomponents = split_escaped(&value, delimiters.subcomponent, delimiters.escape)
            .into_iter()
            .map(SubComponent::new)
            .collect();
        Self {
            value,
            subcomponents,
        }
    }

    /// Wrap a raw value in a single subcomponent, bypassing the splitter
    pub(crate) fn force(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            subcomponents: vec![SubComponent::new(value.clone())],
            value,
        }
    }

    /// Raw value of this component
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Subcomponents in order
    pub fn subcomponents(&self) -> &[SubComponent] {
        &self.subcomponents
    }

    pub(crate) fn encode(&self, delimiters: &Delimiters) -> String {
        join(
            self.subcomponents.iter().map(SubComponent::value),
            delimiters.subcomponent,
        )
    }

    /// Resolve a read at this component.
    ///
    /// Without a subcomponent index the whole component value is returned;
    /// an index past the parsed subcomponents reads as empty.
    pub fn get(&self, location: &Location) -> String {
        match location.subcomponent {
            None => self.value.clone(),
            Some(index) => index
                .checked_sub(1)
                .and_then(|i| self.subcomponents.get(i))
                .map(|subcomponent| subcomponent.value().to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply a write at this component, creating missing subcomponents
    pub(crate) fn set(&mut self, location: &Location, value: &str, delimiters: &Delimiters) {
        match location.subcomponent {
            None => *self = Self::parse(value, delimiters),
            Some(index) => {
                let slot = index.saturating_sub(1);
                while self.subcomponents.len() <= slot {
                    self.subcomponents.push(SubComponent::default());
                }
                self.subcomponents[slot].set_value(value);
                self.value = self.encode(delimiters);
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
