//! Map directions links.

/// Base of the directions URL; each address becomes one path segment.
pub const MAPS_DIR_BASE: &str = "https://www.google.com/maps/dir/";

/// Build a directions link visiting `addresses` in order.
///
/// Each address is percent-encoded as a single path component, so `/`
/// inside an address never splits a segment.
pub fn maps_url<'a, I>(addresses: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let path = addresses
        .into_iter()
        .map(|address| urlencoding::encode(address).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!("{}{}", MAPS_DIR_BASE, path)
}
