/// One stage of the world pipeline: a pure transform from `I` to a freshly owned `O`.
pub trait Layer<I, O> {
    fn name(&self) -> &'static str;

    fn generate(&self, input: I) -> O;
}
