use hlogo_syntax::ast::RangeArgs;

/// Lowers range arguments to the bounds passed to `range()`, in source order.
/// Bounds are not validated; a zero step fails when the generated program runs.
pub fn translate_range(range: &RangeArgs) -> Vec<&str> {
    match range {
        RangeArgs::Stop(stop) => vec![stop.as_str()],
        RangeArgs::StartStop(start, stop) => vec![start.as_str(), stop.as_str()],
        RangeArgs::StartStopStep(start, stop, step) => {
            vec![start.as_str(), stop.as_str(), step.as_str()]
        }
    }
}
