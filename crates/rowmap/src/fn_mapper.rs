use std::{fmt, marker::PhantomData};

/// Maps values with a hand-written function.
///
/// For conversions the derives cannot express, this gives the same one/many
/// surface as [`Mapper`](crate::Mapper) over a plain closure.
pub struct FnMapper<In, Out, F> {
    map: F,
    _p: PhantomData<fn(In) -> Out>,
}

impl<In, Out, F> FnMapper<In, Out, F>
where
    F: Fn(In) -> Out,
{
    pub fn new(map: F) -> Self {
        Self {
            map,
            _p: PhantomData,
        }
    }

    pub fn map(&self, input: In) -> Out {
        (self.map)(input)
    }

    /// Maps every value, preserving order and length.
    pub fn map_all(&self, input: impl IntoIterator<Item = In>) -> Vec<Out> {
        input.into_iter().map(&self.map).collect()
    }
}

impl<In, Out, F> fmt::Debug for FnMapper<In, Out, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMapper").finish_non_exhaustive()
    }
}
