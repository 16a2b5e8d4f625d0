//! Local HTTP stub shared with the library's unit tests

#[allow(dead_code)]
#[path = "../../src/app/client/stub.rs"]
mod stub;

pub(crate) use stub::StubServer;
