//! Subscripts: keys and slices.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::Error;
use crate::value::{Key, Stream};

/// A slice descriptor: optional start, stop and step.
///
/// Against a sequence, negative bounds count from the end and out-of-range
/// bounds are clamped. Against a stream, bounds must be non-negative and the
/// step positive.
///
/// # Examples
///
/// ```rust
/// use fx::itemgetter::Slice;
///
/// let evens = Slice::full().with_step(2);
/// assert_eq!(evens.to_string(), "::2");
/// assert_eq!(evens.select(&[1, 2, 3, 4, 5], "list"), Ok(vec![1, 3, 5]));
///
/// let init = Slice::from(..-1);
/// assert_eq!(init.select(&[1, 2, 3, 4, 5], "list"), Ok(vec![1, 2, 3, 4]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    /// First position, inclusive.
    pub start: Option<i64>,
    /// Last position, exclusive.
    pub stop: Option<i64>,
    /// Distance between selected positions.
    pub step: Option<i64>,
}

impl Slice {
    /// Creates a slice from its three parts.
    #[must_use]
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    /// The slice selecting everything.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(None, None, None)
    }

    /// Replaces the step.
    #[must_use]
    pub const fn with_step(self, step: i64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    fn invalid(self, target: &'static str) -> Error {
        Error::InvalidKey {
            key: Subscript::Slice(self).to_string(),
            target,
        }
    }

    /// Selects the sliced elements of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the step is zero.
    pub fn select<T: Clone>(&self, items: &[T], target: &'static str) -> Result<Vec<T>, Error> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(self.invalid(target));
        }

        let length = i64::try_from(items.len()).unwrap_or(i64::MAX);
        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };
        let clamp = |bound: i64| {
            if bound < 0 {
                bound.saturating_add(length).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let mut selected = Vec::new();
        let mut position = start;
        while (step > 0 && position < stop) || (step < 0 && position > stop) {
            if let Some(item) = usize::try_from(position)
                .ok()
                .and_then(|index| items.get(index))
            {
                selected.push(item.clone());
            }
            match position.checked_add(step) {
                Some(next) => position = next,
                None => break,
            }
        }
        Ok(selected)
    }

    /// Restricts a stream to this slice without pulling anything from it.
    ///
    /// The result ends when `stop` is reached or the source runs out,
    /// whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if a bound is negative or the step is not
    /// positive.
    pub fn lazy(&self, source: Stream) -> Result<Stream, Error> {
        let start = usize::try_from(self.start.unwrap_or(0)).map_err(|_| self.invalid("stream"))?;
        let stop = self
            .stop
            .map(usize::try_from)
            .transpose()
            .map_err(|_| self.invalid("stream"))?;
        let step = usize::try_from(self.step.unwrap_or(1))
            .ok()
            .filter(|step| *step > 0)
            .ok_or_else(|| self.invalid("stream"))?;
        let length = stop.map_or(usize::MAX, |stop| stop.saturating_sub(start));
        Ok(Stream::new(source.skip(start).take(length).step_by(step)))
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = self.start {
            write!(formatter, "{start}")?;
        }
        formatter.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(formatter, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(formatter, ":{step}")?;
        }
        Ok(())
    }
}

/// One recorded access: a key or a slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Subscript {
    /// A mapping key or sequence index.
    Key(Key),
    /// A slice.
    Slice(Slice),
}

impl std::fmt::Display for Subscript {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => write!(formatter, "[{key}]"),
            Self::Slice(slice) => write!(formatter, "[{slice}]"),
        }
    }
}

impl From<Key> for Subscript {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<Slice> for Subscript {
    fn from(slice: Slice) -> Self {
        Self::Slice(slice)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<RangeFull> for Subscript {
    fn from(range: RangeFull) -> Self {
        Self::Slice(range.into())
    }
}

macro_rules! impl_from_key {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Subscript {
                fn from(key: $source) -> Self {
                    Self::Key(key.into())
                }
            }
        )+
    };
}

impl_from_key!(bool, i32, i64, isize, usize, &str, String);

/// Inclusive ends become exclusive stops; `..=-1` runs to the end.
fn inclusive_stop(end: i64) -> Option<i64> {
    end.checked_add(1).filter(|stop| *stop != 0)
}

macro_rules! impl_from_range {
    ($($integer:ty),+) => {
        $(
            impl From<Range<$integer>> for Slice {
                fn from(range: Range<$integer>) -> Self {
                    Self::new(Some(range.start as i64), Some(range.end as i64), None)
                }
            }

            impl From<RangeFrom<$integer>> for Slice {
                fn from(range: RangeFrom<$integer>) -> Self {
                    Self::new(Some(range.start as i64), None, None)
                }
            }

            impl From<RangeTo<$integer>> for Slice {
                fn from(range: RangeTo<$integer>) -> Self {
                    Self::new(None, Some(range.end as i64), None)
                }
            }

            impl From<RangeInclusive<$integer>> for Slice {
                fn from(range: RangeInclusive<$integer>) -> Self {
                    Self::new(
                        Some(*range.start() as i64),
                        inclusive_stop(*range.end() as i64),
                        None,
                    )
                }
            }

            impl From<RangeToInclusive<$integer>> for Slice {
                fn from(range: RangeToInclusive<$integer>) -> Self {
                    Self::new(None, inclusive_stop(range.end as i64), None)
                }
            }

            impl From<Range<$integer>> for Subscript {
                fn from(range: Range<$integer>) -> Self {
                    Self::Slice(range.into())
                }
            }

            impl From<RangeFrom<$integer>> for Subscript {
                fn from(range: RangeFrom<$integer>) -> Self {
                    Self::Slice(range.into())
                }
            }

            impl From<RangeTo<$integer>> for Subscript {
                fn from(range: RangeTo<$integer>) -> Self {
                    Self::Slice(range.into())
                }
            }

            impl From<RangeInclusive<$integer>> for Subscript {
                fn from(range: RangeInclusive<$integer>) -> Self {
                    Self::Slice(range.into())
                }
            }

            impl From<RangeToInclusive<$integer>> for Subscript {
                fn from(range: RangeToInclusive<$integer>) -> Self {
                    Self::Slice(range.into())
                }
            }
        )+
    };
}

#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
mod ranges {
    use super::{
        Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive, Slice, Subscript,
        inclusive_stop,
    };

    impl_from_range!(i32, i64, isize);
}
