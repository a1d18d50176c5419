/// Bold (strong emphasis) inline type.
///
/// Only the double-asterisk form is recognised and the content may not
/// contain an asterisk, so `**a*b**` stays literal text.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
}
