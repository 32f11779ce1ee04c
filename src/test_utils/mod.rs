#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod stores;

pub(crate) use http::{assert_content_type, get_json_body};
pub(crate) use stores::{StubSpenderStore, StubTransactionStore};
