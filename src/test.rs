#![allow(dead_code)]
use serde::Deserialize;

/// Reads `./snapshots/inputs/pexels/{name}.json`
pub fn read_fixture(name: &str) -> String {
    let path = format!("./snapshots/inputs/pexels/{}.json", name);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {}: {}", path, err))
}

/// Reads and deserializes a fixture
pub fn fixture<T>(name: &str) -> T
where
    for<'de> T: Deserialize<'de>,
{
    serde_json::from_str(&read_fixture(name)).unwrap()
}

/// A local address nothing listens on
pub fn unreachable_ep() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
