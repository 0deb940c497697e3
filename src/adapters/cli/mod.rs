//! Terminal adapter: the per-agent interactive review loop.

mod interactive;

pub use interactive::InteractiveSession;
