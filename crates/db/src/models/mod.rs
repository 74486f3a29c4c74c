//! Row structs and the mapping between stored documents and domain records.

pub mod todo_item;
