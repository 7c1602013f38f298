//! JSON pointer fragments for error reporting
//!
//! Paths are RFC 6901 pointers built one reference token at a time. The
//! document root is the empty string.

/// Pointer to the document root
pub const ROOT: &str = "";

/// Append a member name to `path`, escaping `~` and `/`
pub fn child(path: &str, name: &str) -> String {
    let mut out = String::with_capacity(path.len() + name.len() + 1);
    out.push_str(path);
    out.push('/');
    for c in name.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    out
}

/// Append an array index to `path`
pub fn index(path: &str, index: usize) -> String {
    format!("{}/{}", path, index)
}
