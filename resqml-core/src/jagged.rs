//! Jagged array codec.
//!
//! A jagged array stores `n` variable-length sub-lists as an offsets array of
//! length `n + 1` plus one flat values array. Element `i` is
//! `values[offsets[i]..offsets[i + 1]]`.
//!
//! # Invariants
//! ```text
//! offsets[0] == 0
//! offsets[i] <= offsets[i + 1]
//! offsets[n] == values.len()
//! ```
//!
//! On the wire RESQML drops the leading zero and calls the remaining `n`
//! entries `CumulativeLength`; see [`JaggedArray::from_cumulative_lengths`].

use crate::error::{JaggedDefect, Result};

/// Offsets + flat values encoding of a list of variable-length lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JaggedArray<T> {
    offsets: Vec<usize>,
    values: Vec<T>,
}

impl<T> JaggedArray<T> {
    /// Encodes a list of sequences. Never fails; empty sequences are kept.
    ///
    /// # Example
    /// ```
    /// use resqml_core::JaggedArray;
    ///
    /// let jagged = JaggedArray::encode(vec![vec![], vec![1, 2], vec![]]);
    /// assert_eq!(jagged.offsets(), &[0, 0, 2, 2]);
    /// assert_eq!(jagged.values(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn encode<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let mut offsets = vec![0];
        let mut values = Vec::new();
        for sequence in sequences {
            values.extend(sequence);
            offsets.push(values.len());
        }
        Self { offsets, values }
    }

    /// Builds a jagged array from raw parts, checking every invariant.
    ///
    /// # Errors
    /// Returns [`Error::MalformedJaggedArray`](crate::Error::MalformedJaggedArray)
    /// if the offsets are empty, do not start at zero, decrease, or do not end
    /// at `values.len()`.
    pub fn from_parts(offsets: Vec<usize>, values: Vec<T>) -> Result<Self> {
        check_offsets(&offsets, values.len())?;
        Ok(Self { offsets, values })
    }

    /// Decodes raw parts straight into nested lists.
    ///
    /// # Errors
    /// Same conditions as [`JaggedArray::from_parts`].
    pub fn decode(offsets: Vec<usize>, values: Vec<T>) -> Result<Vec<Vec<T>>> {
        Ok(Self::from_parts(offsets, values)?.into_nested())
    }

    /// Builds a jagged array from RESQML `CumulativeLength` entries.
    ///
    /// The wire form omits the leading zero, so `n` cumulative lengths describe
    /// `n` elements.
    ///
    /// # Errors
    /// Returns [`Error::MalformedJaggedArray`](crate::Error::MalformedJaggedArray)
    /// for negative entries or when the offsets invariants fail.
    pub fn from_cumulative_lengths(cumulative: &[i64], values: Vec<T>) -> Result<Self> {
        let mut offsets = Vec::with_capacity(cumulative.len() + 1);
        offsets.push(0);
        for (position, &value) in cumulative.iter().enumerate() {
            let offset =
                usize::try_from(value).map_err(|_| JaggedDefect::Negative { position, value })?;
            offsets.push(offset);
        }
        Self::from_parts(offsets, values)
    }

    /// Returns the RESQML `CumulativeLength` form (offsets without the leading zero).
    #[must_use]
    pub fn cumulative_lengths(&self) -> &[usize] {
        &self.offsets[1..]
    }

    /// Returns the number of sub-lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns true if there are no sub-lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the offsets array (length `len() + 1`).
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the flat values array.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns sub-list `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[T]> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index.checked_add(1)?)?;
        Some(&self.values[start..end])
    }

    /// Returns the length of sub-list `index`, or `None` past the end.
    #[must_use]
    pub fn sub_len(&self, index: usize) -> Option<usize> {
        Some(self.offsets.get(index.checked_add(1)?)? - self.offsets.get(index)?)
    }

    /// Iterates over the sub-lists in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.values[w[0]..w[1]])
    }

    /// Splits back into offsets and values.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<T>) {
        (self.offsets, self.values)
    }

    /// Materializes the nested lists, consuming the array.
    #[must_use]
    pub fn into_nested(self) -> Vec<Vec<T>> {
        let mut nested = Vec::with_capacity(self.len());
        let mut values = self.values.into_iter();
        for w in self.offsets.windows(2) {
            nested.push(values.by_ref().take(w[1] - w[0]).collect());
        }
        nested
    }

    /// Maps every value, keeping the offsets.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> JaggedArray<U> {
        JaggedArray {
            offsets: self.offsets,
            values: self.values.into_iter().map(f).collect(),
        }
    }
}

impl<T: Clone> JaggedArray<T> {
    /// Materializes the nested lists without consuming the array.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter().map(<[T]>::to_vec).collect()
    }
}

impl<T> Default for JaggedArray<T> {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            values: Vec::new(),
        }
    }
}

impl<T, S> FromIterator<S> for JaggedArray<T>
where
    S: IntoIterator<Item = T>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::encode(iter)
    }
}

/// Checks the offsets invariants against a value count.
fn check_offsets(offsets: &[usize], value_count: usize) -> std::result::Result<(), JaggedDefect> {
    let (&first, rest) = offsets.split_first().ok_or(JaggedDefect::EmptyOffsets)?;
    if first != 0 {
        return Err(JaggedDefect::NonZeroStart { first });
    }

    let mut previous = first;
    for (i, &current) in rest.iter().enumerate() {
        if current < previous {
            return Err(JaggedDefect::Decreasing {
                position: i + 1,
                previous,
                current,
            });
        }
        previous = current;
    }

    if previous != value_count {
        return Err(JaggedDefect::LengthMismatch {
            last: previous,
            values: value_count,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_empty_sub_lists() {
        let jagged = JaggedArray::encode(vec![vec![], vec![1, 2], vec![]]);
        assert_eq!(jagged.offsets(), &[0, 0, 2, 2]);
        assert_eq!(jagged.values(), &[1, 2]);
        assert_eq!(jagged.len(), 3);

        let (offsets, values) = jagged.into_parts();
        let decoded = JaggedArray::decode(offsets, values).expect("valid offsets");
        assert_eq!(decoded, vec![vec![], vec![1, 2], vec![]]);
    }

    #[test]
    fn test_encode_no_sequences() {
        let jagged: JaggedArray<u32> = JaggedArray::encode(Vec::<Vec<u32>>::new());
        assert_eq!(jagged.offsets(), &[0]);
        assert!(jagged.values().is_empty());
        assert!(jagged.is_empty());
        assert_eq!(jagged, JaggedArray::default());
    }

    #[test]
    fn test_round_trip_faces_per_cell() {
        let faces_per_cell = vec![
            vec![0u32, 1, 2, 3, 4, 5],
            vec![5, 6, 7, 8, 9],
            vec![9, 10, 11, 12],
        ];
        let jagged = JaggedArray::encode(faces_per_cell.clone());
        assert_eq!(jagged.offsets(), &[0, 6, 11, 15]);

        let (offsets, values) = jagged.clone().into_parts();
        assert_eq!(
            JaggedArray::decode(offsets, values).expect("valid"),
            faces_per_cell
        );
        assert_eq!(jagged.to_nested(), faces_per_cell);
    }

    #[test]
    fn test_offsets_monotonic_after_encode() {
        let jagged = JaggedArray::encode(vec![vec!['a'], vec![], vec!['b', 'c'], vec![], vec![]]);
        assert_eq!(jagged.offsets()[0], 0);
        assert!(jagged.offsets().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*jagged.offsets().last().expect("non-empty"), 3);
    }

    #[test]
    fn test_decode_rejects_empty_offsets() {
        let err = JaggedArray::<i32>::decode(vec![], vec![]).unwrap_err();
        assert_eq!(err, Error::MalformedJaggedArray(JaggedDefect::EmptyOffsets));
    }

    #[test]
    fn test_decode_rejects_non_zero_start() {
        let err = JaggedArray::decode(vec![1, 2], vec![7, 8]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedJaggedArray(JaggedDefect::NonZeroStart { first: 1 })
        );
    }

    #[test]
    fn test_decode_rejects_decreasing_offsets() {
        let err = JaggedArray::decode(vec![0, 3, 2, 3], vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedJaggedArray(JaggedDefect::Decreasing {
                position: 2,
                previous: 3,
                current: 2,
            })
        );
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        let err = JaggedArray::decode(vec![0, 1, 2], vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedJaggedArray(JaggedDefect::LengthMismatch { last: 2, values: 3 })
        );
    }

    #[test]
    fn test_get_and_sub_len() {
        let jagged = JaggedArray::encode(vec![vec![10, 11], vec![], vec![12]]);
        assert_eq!(jagged.get(0), Some(&[10, 11][..]));
        assert_eq!(jagged.get(1), Some(&[][..]));
        assert_eq!(jagged.get(2), Some(&[12][..]));
        assert_eq!(jagged.get(3), None);
        assert_eq!(jagged.sub_len(0), Some(2));
        assert_eq!(jagged.sub_len(1), Some(0));
        assert_eq!(jagged.sub_len(3), None);
    }

    #[test]
    fn test_cumulative_lengths_bridge() {
        let jagged =
            JaggedArray::from_cumulative_lengths(&[3, 3, 5], vec![1, 2, 3, 4, 5]).expect("valid");
        assert_eq!(jagged.offsets(), &[0, 3, 3, 5]);
        assert_eq!(jagged.cumulative_lengths(), &[3, 3, 5]);
        assert_eq!(jagged.get(1), Some(&[][..]));
    }

    #[test]
    fn test_cumulative_lengths_rejects_negative() {
        let err = JaggedArray::from_cumulative_lengths(&[2, -1], vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedJaggedArray(JaggedDefect::Negative {
                position: 1,
                value: -1
            })
        );
    }

    #[test]
    fn test_collect_and_map() {
        let jagged: JaggedArray<i32> = vec![vec![1], vec![2, 3]].into_iter().collect();
        let doubled = jagged.map(|v| v * 2);
        assert_eq!(doubled.to_nested(), vec![vec![2], vec![4, 6]]);
        assert_eq!(doubled.iter().len(), 2);
    }

    /// Every shape of up to `max_lists` sub-lists, each `0..=max_len` long.
    fn shapes(max_lists: usize, max_len: usize) -> Vec<Vec<usize>> {
        let mut all = vec![Vec::new()];
        let mut frontier = vec![Vec::new()];
        for _ in 0..max_lists {
            frontier = frontier
                .iter()
                .flat_map(|shape: &Vec<usize>| {
                    (0..=max_len).map(move |len| {
                        let mut next = shape.clone();
                        next.push(len);
                        next
                    })
                })
                .collect();
            all.extend(frontier.iter().cloned());
        }
        all
    }

    #[test]
    fn test_sweep_all_small_shapes() {
        let shapes = shapes(4, 3);
        assert_eq!(shapes.len(), 1 + 4 + 16 + 64 + 256);

        let mut next = 0i64;
        for shape in shapes {
            let nested: Vec<Vec<i64>> = shape
                .iter()
                .map(|&len| {
                    (0..len)
                        .map(|_| {
                            next += 1;
                            next
                        })
                        .collect()
                })
                .collect();

            let jagged = JaggedArray::encode(nested.clone());
            assert_eq!(jagged.len(), nested.len(), "{shape:?}");
            assert_eq!(jagged.offsets()[0], 0);
            assert!(jagged.offsets().windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(jagged.offsets()[nested.len()], jagged.values().len());
            for (i, sub) in nested.iter().enumerate() {
                assert_eq!(jagged.get(i), Some(sub.as_slice()), "{shape:?}");
                assert_eq!(jagged.sub_len(i), Some(sub.len()));
            }

            let cumulative: Vec<i64> = jagged
                .cumulative_lengths()
                .iter()
                .map(|&c| i64::try_from(c).expect("small"))
                .collect();
            let bridged = JaggedArray::from_cumulative_lengths(&cumulative, jagged.values().to_vec())
                .expect("valid cumulative lengths");
            assert_eq!(bridged, jagged);

            let (offsets, values) = jagged.into_parts();
            assert_eq!(
                JaggedArray::from_parts(offsets.clone(), values.clone())
                    .expect("valid parts")
                    .to_nested(),
                nested
            );
            assert_eq!(JaggedArray::decode(offsets, values).expect("valid"), nested);
        }
    }
}
