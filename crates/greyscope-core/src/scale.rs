//! The fixed 16-name grey scale.

use anyhow::{Result, bail};

/// Canonical names for the 16 grey buckets, darkest to lightest.
pub const GREY_SCALE: [&str; 16] = [
    "Black",
    "Very Dark Gray",
    "Dark Gray",
    "Medium Dark Gray",
    "Slate Gray",
    "Dim Gray",
    "Light Slate Gray",
    "Gray",
    "Light Gray",
    "Gainsboro",
    "Silver",
    "Light Silver",
    "Very Light Gray",
    "Near White",
    "Off White",
    "White",
];

/// Title-cases each whitespace-separated word: `"off white"` -> `"Off White"`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bucket index for a grey color name, canonicalized first.
///
/// # Errors
///
/// Returns an error if the name matches none of the 16 fixed names.
pub fn bucket_index(name: &str) -> Result<usize> {
    let canonical = canonical_name(name);
    match GREY_SCALE.iter().position(|&n| n == canonical) {
        Some(index) => Ok(index),
        None => bail!("'{name}' is not one of the 16 greyscale color names"),
    }
}
