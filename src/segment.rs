//! Segment parsing, encoding and location-addressed access

use std::fmt;

use log::trace;

use crate::delimiters::{Delimiters, SEGMENT_TERMINATOR};
use crate::error::{Hl7Error, Result};
use crate::field::Field;
use crate::location::Location;

/// Segment ID of the message header, whose own fields carry the delimiter set
const HEADER_ID: &str = "MSH";

/// Sequence number of the encoding-characters field in a header segment
const ENCODING_SEQ: usize = 2;

/// One parsed HL7 v2 segment: an ordered field tree addressable by
/// sequence number, plus the raw value it was parsed from.
///
/// The raw value and the field tree are kept consistent: every successful
/// [`Segment::set`] re-encodes the raw value from the mutated tree. A
/// segment is not safe for concurrent mutation; clone it or serialize
/// writes per instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    value: String,
    fields: Vec<Field>,
    max_seq: usize,
}

impl Segment {
    /// Parse one raw segment line.
    ///
    /// Fails when the input is shorter than the three-character segment
    /// ID. For a header segment two delimiter self-references apply: the
    /// field separator itself becomes the value of sequence 1, and the
    /// encoding-characters field at sequence 2 is kept as a single
    /// unsplit leaf — its repetition and escape characters are data, not
    /// structure. A line feed ends the scan when the delimiter set says
    /// so; characters escaped with the escape character are never treated
    /// as delimiters.
    pub fn parse(value: impl Into<String>, delimiters: &Delimiters) -> Result<Self> {
        let value = value.into();
        if value.len() < 3 {
            return Err(Hl7Error::segment_too_short(value.len()));
        }
        let is_header = value.starts_with(HEADER_ID);
        trace!("parsing segment, header={is_header} len={}", value.len());

        let mut segment = Self::default();
        let mut start = 0;
        let mut seq = 0;
        let mut chars = value.char_indices();
        loop {
            let Some((idx, ch)) = chars.next() else {
                // the trailing slice is always a field, even when empty
                segment.push_parsed(&value[start..], seq, delimiters);
                break;
            };
            if ch == SEGMENT_TERMINATOR && delimiters.lf_terminated {
                segment.push_parsed(&value[start..idx], seq, delimiters);
                break;
            }
            if is_header
                && seq == ENCODING_SEQ
                && (ch == delimiters.repetition || ch == delimiters.escape)
            {
                // delimiters-as-data inside the encoding-characters field
                continue;
            }
            if ch == delimiters.field {
                if is_header && seq == ENCODING_SEQ {
                    segment.force_field(&value[start..idx], seq);
                } else {
                    segment.push_parsed(&value[start..idx], seq, delimiters);
                }
                start = idx + ch.len_utf8();
                seq += 1;
                if is_header && seq == 1 {
                    // the separator cannot be recovered by splitting: it is
                    // its own field
                    segment.force_field(delimiters.field.to_string(), seq);
                    seq += 1;
                }
            } else if ch == delimiters.repetition {
                // a repetition is a sibling field with the same sequence
                segment.push_parsed(&value[start..idx], seq, delimiters);
                start = idx + ch.len_utf8();
            } else if ch == delimiters.escape {
                chars.next();
            }
        }
        segment.value = value;
        Ok(segment)
    }

    fn push_parsed(&mut self, value: &str, seq: usize, delimiters: &Delimiters) {
        self.push(Field::parse(value, seq, delimiters));
    }

    fn push(&mut self, field: Field) {
        if field.seq() > self.max_seq {
            self.max_seq = field.seq();
        }
        self.fields.push(field);
    }

    /// Append a field wrapping `value` verbatim in a single component and
    /// subcomponent, bypassing the splitter. Used for the header delimiter
    /// self-references and for gap-filling writes past the end.
    fn force_field(&mut self, value: impl Into<String>, seq: usize) {
        self.push(Field::force(value, seq));
    }

    /// Join the field values back into the raw segment value.
    ///
    /// Fields are joined in append order, never re-sorted; consecutive
    /// fields sharing a sequence number are repetitions and rejoin with
    /// the repetition delimiter. A header segment joins its forced
    /// separator field like any other, so a mutated header's encoded
    /// value spells out separators where the original line was
    /// self-referential.
    fn encode(&self, delimiters: &Delimiters) -> String {
        let mut out = String::new();
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                if field.seq() == self.fields[i - 1].seq() {
                    out.push(delimiters.repetition);
                } else {
                    out.push(delimiters.field);
                }
            }
            out.push_str(field.value());
        }
        out
    }

    /// Raw value of the whole segment
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parsed fields in append order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with the given sequence number
    pub fn field(&self, seq: usize) -> Result<&Field> {
        self.fields
            .iter()
            .find(|field| field.seq() == seq)
            .ok_or(Hl7Error::field_not_found(seq))
    }

    /// Every repetition of the given sequence number, in order.
    ///
    /// Distinguishes a missing field from a present-but-empty one: an
    /// empty result set is `FieldNotFound`.
    pub fn all_fields(&self, seq: usize) -> Result<Vec<&Field>> {
        let fields: Vec<&Field> = self
            .fields
            .iter()
            .filter(|field| field.seq() == seq)
            .collect();
        if fields.is_empty() {
            return Err(Hl7Error::field_not_found(seq));
        }
        Ok(fields)
    }

    /// Read the value addressed by `location`.
    ///
    /// A whole-segment location returns the raw segment value. A
    /// repetition index selects among sibling fields of the sequence and
    /// fails with `FieldNotFound` when out of range; component and
    /// subcomponent positions past the parsed tree read as empty.
    pub fn get(&self, location: &Location) -> Result<String> {
        let Some(seq) = location.field else {
            return Ok(self.value.clone());
        };
        let field = match location.repetition {
            None => self.field(seq)?,
            Some(repetition) => self
                .all_fields(seq)?
                .get(repetition.saturating_sub(1))
                .copied()
                .ok_or(Hl7Error::field_not_found(seq))?,
        };
        Ok(field.get(location))
    }

    /// Read every repetition addressed by `location`, one string per
    /// sibling field of the sequence.
    ///
    /// All-or-nothing: the first resolution failure aborts the read.
    pub fn get_all(&self, location: &Location) -> Result<Vec<String>> {
        let Some(seq) = location.field else {
            return Ok(vec![self.value.clone()]);
        };
        let values = self
            .all_fields(seq)?
            .into_iter()
            .map(|field| field.get(location))
            .collect();
        Ok(values)
    }

    /// Write `value` at `location`, creating missing fields on the way.
    ///
    /// Rejects a whole-segment location: writing requires a field
    /// sequence. A target sequence past the highest one seen so far is
    /// reachable — the gap is filled with empty fields first. The raw
    /// segment value is re-encoded after every successful write so it
    /// always agrees with the field tree.
    pub fn set(&mut self, location: &Location, value: &str, delimiters: &Delimiters) -> Result<()> {
        let Some(seq) = location.field else {
            return Err(Hl7Error::FieldRequired);
        };
        if seq > self.max_seq {
            for missing in self.max_seq + 1..=seq {
                self.force_field("", missing);
            }
        }
        trace!("set sequence {seq} to {value:?}");
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.seq() == seq)
            .ok_or(Hl7Error::field_not_found(seq))?;
        field.set(location, value, delimiters);
        self.value = self.encode(delimiters);
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
