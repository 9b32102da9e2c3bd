///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comments (id) {
        id -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        deleted_at -> Nullable<BigInt>,
        parent_id -> BigInt,
        username -> Text,
        email -> Text,
        content -> Text,
        upvotes -> BigInt,
        downvotes -> BigInt,
        status -> Text,
        url -> Text,
    }
}
