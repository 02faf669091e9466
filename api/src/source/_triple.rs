use super::*;
use crate::term::SimpleTerm;
use crate::triple::Triple;

/// A triple source produces [triples](Triple), and may also fail in the process.
///
/// see [module documentation](super) for the rationale of his trait.
///
/// # Common implementors
///
/// Any iterator yielding [results](std::result::Result) of [`Triple`]
/// implements the [`TripleSource`] trait.
pub trait TripleSource {
    /// The type of triples this source yields.
    type Triple<'x>: Triple;
    /// The type of errors produced by this source.
    type Error: Error + 'static;

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return `Ok(false)` if there are no more triples in this source.
    ///
    /// Return an error if either the source or `f` errs.
    fn try_for_some_triple<E, F>(&mut self, f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Self::Triple<'_>) -> Result<(), E>;

    /// Call f for all triples from this source.
    ///
    /// Return an error if either the source or `f` errs.
    #[inline]
    fn try_for_each_triple<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(Self::Triple<'_>) -> Result<(), E>,
        E: Error,
    {
        while self.try_for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return false if there are no more triples in this source.
    ///
    /// Return an error if either the source errs.
    #[inline]
    fn for_some_triple<F>(&mut self, f: &mut F) -> Result<bool, Self::Error>
    where
        F: FnMut(Self::Triple<'_>),
    {
        self.try_for_some_triple(|t| -> Result<(), Self::Error> {
            f(t);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Call f for all triples from this source.
    ///
    /// Return an error if either the source errs.
    #[inline]
    fn for_each_triple<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Self::Triple<'_>),
    {
        let mut f = f;
        while self.for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Copy all triples of this source into a vector, in the order they are produced.
    ///
    /// If the source errs, the triples produced before the error are lost.
    fn collect_triples(mut self) -> Result<Vec<[SimpleTerm; 3]>, Self::Error>
    where
        Self: Sized,
    {
        let mut triples = vec![];
        self.for_each_triple(|t| triples.push(t.to_simple()))?;
        Ok(triples)
    }
}

impl<'a, I, T, E> TripleSource for I
where
    I: Iterator<Item = Result<T, E>> + 'a,
    T: Triple,
    E: Error + 'static,
{
    type Triple<'x> = T;
    type Error = E;

    fn try_for_some_triple<E2, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E2>
    where
        E2: Error,
        F: FnMut(Self::Triple<'_>) -> Result<(), E2>,
    {
        match self.next() {
            Some(Err(e)) => Err(SourceError(e)),
            Some(Ok(t)) => {
                f(t).map_err(SinkError)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
