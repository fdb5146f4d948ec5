//! Diesel schema for task persistence.

diesel::table! {
    /// Persisted task records.
    task (id) {
        /// Store-assigned identifier.
        id -> BigInt,
        /// Task description text.
        description -> Text,
        /// Completion flag; the column keeps its historical name.
        complete -> Bool,
        /// Creation timestamp.
        created_at -> Nullable<Timestamptz>,
        /// Last-update timestamp, NULL until the first update.
        updated_at -> Nullable<Timestamptz>,
    }
}
