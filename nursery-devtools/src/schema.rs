// Tables owned by the web application. Only the columns these tools touch
// are declared.

diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        #[max_length = 20]
        user_type -> Varchar,
        #[max_length = 255]
        name -> Nullable<Varchar>,
        #[max_length = 50]
        phone -> Nullable<Varchar>,
    }
}

diesel::table! {
    nurseries (id) {
        id -> Int4,
        owner_id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        address -> Text,
        #[max_length = 100]
        city -> Varchar,
        #[max_length = 20]
        postal_code -> Nullable<Varchar>,
        latitude -> Nullable<Float8>,
        longitude -> Nullable<Float8>,
        description -> Nullable<Text>,
        #[max_length = 100]
        hours -> Nullable<Varchar>,
        #[max_length = 50]
        phone -> Nullable<Varchar>,
        #[max_length = 255]
        email -> Nullable<Varchar>,
        // NUMERIC on the server; float8 binds are cast on assignment.
        price_per_month -> Nullable<Float8>,
        available_spots -> Nullable<Int4>,
        total_spots -> Nullable<Int4>,
        staff_count -> Nullable<Int4>,
        #[max_length = 50]
        age_range -> Nullable<Varchar>,
    }
}

diesel::joinable!(nurseries -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    nurseries,
);
