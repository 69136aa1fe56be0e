use crate::error::Error;

/// Retries an operation while it fails with [`Error::Interrupted`].
///
/// The primitive never retries internally: a signal arriving during a wait
/// surfaces as [`Error::Interrupted`], and the choice to re-invoke belongs
/// to the caller. `retry_interrupted` is that choice as a thin loop.
///
/// `factory` runs once per attempt and must build the attempt from scratch.
/// For a readiness wait that means re-arming the interest sets from
/// templates, since a failed call leaves them in an unspecified state.
///
/// Any outcome other than `Err(Error::Interrupted)` is returned unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// use paratus::tools::retry_interrupted;
///
/// let ready = retry_interrupted(|| {
///     let mut request = WaitRequest::new(fd + 1)
///         .readable(template)
///         .timeout(Duration::from_secs(5));
///
///     paratus::wait(&mut request)
/// })?;
/// ```
pub fn retry_interrupted<T, G>(mut factory: G) -> Result<T, Error>
where
    G: FnMut() -> Result<T, Error>,
{
    loop {
        match factory() {
            Err(Error::Interrupted) => continue,
            outcome => return outcome,
        }
    }
}
