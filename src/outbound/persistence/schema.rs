//! Diesel table definition for the users table.
//!
//! Used by Diesel for compile-time query validation and type-safe SQL
//! generation. The table itself is provisioned outside this service.

diesel::table! {
    /// Directory users.
    ///
    /// `id` is a store-generated serial primary key.
    users (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
    }
}
