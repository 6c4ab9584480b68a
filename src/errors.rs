use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidJson, "Invalid JSON format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    AmountOutOfRange,
    "Amount '{value}' exceeds the supported magnitude of {max}.",
    { value: &str, max: i64 }
);
define_client_error!(
    InvalidPostingRecord,
    "Invalid posting record #{index}: missing or invalid '{field}'. The whole batch was rejected.",
    { index: usize, field: &str }
);

// Configuration-related.
define_client_error!(InvalidConfig, "Invalid dashboard config: {details}.", { details: &str });
define_client_error!(InvalidLocale, "Unknown number-format locale: '{name}'.", { name: &str });

// Dashboard state.
define_client_error!(
    DataNotLoaded,
    "No postings loaded yet. Load a year before requesting a view."
);
define_client_error!(
    DataUnavailable,
    "Failed to acquire financial data: {cause}",
    { cause: &str }
);
define_client_error!(
    UnknownCategory,
    "Category '{name}' is not a row of the current view.",
    { name: &str }
);
