//! Service plumbing: the HTTP endpoint layer.

pub mod http;
