//! OSC (operating system command) sequences.
//!
//! Both sequences are `ESC ] {code} ; {payload} BEL`. Payloads are not
//! escaped: a BEL inside a title ends the sequence early.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const ESC: &str = "\x1b";
const BEL: &str = "\x07";

/// OSC 52: put `text` on the system clipboard (`c` selection).
pub fn clipboard(text: &str) -> String {
    format!("{ESC}]52;c;{}{BEL}", STANDARD.encode(text.as_bytes()))
}

/// OSC 0: set the window and icon title.
pub fn title(text: &str) -> String {
    format!("{ESC}]0;{text}{BEL}")
}
