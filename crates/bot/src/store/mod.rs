//! Raw document store client.
//!
//! The store is a Firebase Realtime Database style REST API: each raw lives
//! under `/raws/{id}` as a JSON object with `title`, `authorName`, `views`
//! and `code` fields. The client exposes exactly the two operations the
//! commands need - fetch a document and replace its `code` - with no retry,
//! no cache, and no optimistic-concurrency token. Two concurrent edits to
//! the same raw are last-write-wins.

mod client;
mod error;
mod types;

pub use client::StoreClient;
pub use error::StoreError;
pub use types::RawDocument;
