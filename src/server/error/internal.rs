use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A booking row carries a status string outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Booking {booking_id} has unknown stored status '{value}'")]
    UnknownBookingStatus {
        /// ID of the offending booking row
        booking_id: i32,
        /// The stored status value
        value: String,
    },

    /// A row referenced by a freshly read row has disappeared.
    ///
    /// Occurs when a join that the schema guarantees comes back empty, e.g. a
    /// booking whose item no longer exists.
    #[error("{entity} {id} referenced by {referenced_by} is missing")]
    MissingRelation {
        /// Name of the missing entity
        entity: &'static str,
        /// ID of the missing entity
        id: i32,
        /// Description of the row holding the reference
        referenced_by: String,
    },

    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logger(String),

    /// Binding the HTTP listener failed.
    #[error("Failed to bind server address {addr}: {source}")]
    Bind {
        /// Address the server attempted to bind
        addr: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an IO error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
