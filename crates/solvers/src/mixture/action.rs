/// Actions an observer can take during mixture optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the mixture reached so far.
    ///
    /// The serving-size correction still runs if it is enabled.
    StopEarly,
}
