#[derive(thiserror::Error, Debug)]
pub enum ForwardingError {
    #[error("Log forwarding configuration not provided: missing `custom.logForwarding` section")]
    SettingsNotConfigured,

    #[error(
        "Log forwarding is not configured correctly: `destinationARN` is required. \
         Please see the README for proper setup."
    )]
    MissingDestination,

    #[error(
        "Functions '{function}' and '{previous}' both produce subscription filter id '{filter_id}'. \
         Rename one function or set normalizedFilterID: false."
    )]
    DuplicateFilterId {
        filter_id: String,
        function: String,
        /// Function that claimed the id first.
        previous: String,
    },
}
