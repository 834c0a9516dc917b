/// Identification of a use case for UI titles and logging
pub trait UseCaseMetadata {
    /// Use case index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "process_orders"
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u501_process_orders"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
