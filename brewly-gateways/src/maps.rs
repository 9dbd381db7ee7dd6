use brewly_core::gateways::maps::MapsGateway;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

// Characters that are left untouched when encoding URI components
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleMaps;

impl MapsGateway for GoogleMaps {
    fn search_url(&self, address: &str) -> String {
        let encoded = utf8_percent_encode(address, QUERY_COMPONENT);
        format!("{SEARCH_URL}{encoded}")
    }
}
