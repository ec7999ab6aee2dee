mod query;

pub use query::{QueryClient, QueryResult};

#[cfg(test)]
pub(crate) use query::tests::{ScriptedSource, instant_options, players};
