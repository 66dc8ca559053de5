/// Accumulates errors so one derive invocation reports every problem found.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet(Vec<syn::Error>);

impl ErrorSet {
    pub(crate) fn push(&mut self, err: syn::Error) {
        self.0.push(err);
    }

    /// Records the error of a failed result and returns the value otherwise.
    pub(crate) fn check<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        result.map_err(|err| self.push(err)).ok()
    }

    /// Fails with every recorded error combined, in the order pushed.
    pub(crate) fn finish(self) -> syn::Result<()> {
        match self.0.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
