/// Reaches a `T` stored somewhere inside an `M`.
pub(crate) struct Access<M, T> {
    pub(crate) get: fn(&M) -> &T,
    pub(crate) get_mut: fn(&mut M) -> &mut T,
}

impl<M, T> Access<M, T> {
    pub(crate) fn new(get: fn(&M) -> &T, get_mut: fn(&mut M) -> &mut T) -> Access<M, T> {
        Access { get, get_mut }
    }

    pub(crate) fn get<'a>(&self, model: &'a M) -> &'a T {
        (self.get)(model)
    }

    pub(crate) fn get_mut<'a>(&self, model: &'a mut M) -> &'a mut T {
        (self.get_mut)(model)
    }
}

impl<M, T> Clone for Access<M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Access<M, T> {}
