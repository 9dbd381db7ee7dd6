pub trait MapsGateway {
    /// Link that opens a map search for the given address.
    fn search_url(&self, address: &str) -> String;
}
