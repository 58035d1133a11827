/// A key code delivered by [`Console::get_key`](crate::Console::get_key).
///
/// Printable keys carry their ASCII value (so `Key::A` is the unshifted `a` and an
/// uppercase `A` arrives as `Key::from_ascii(b'A')`). Keys without an ASCII value
/// use codes from 5000 upwards. Compare against the associated constants.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Key(u16);

const fn ascii(b: u8) -> Key {
    Key(b as u16)
}

impl Key {
    pub const SPACE: Key = ascii(b' ');
    pub const EXCLAMATION_MARK: Key = ascii(b'!');
    pub const QUOTATION_MARK: Key = ascii(b'"');
    pub const NUMBER_SIGN: Key = ascii(b'#');
    pub const DOLLAR: Key = ascii(b'$');
    pub const PERCENT_SIGN: Key = ascii(b'%');
    pub const AMPERSAND: Key = ascii(b'&');
    pub const APOSTROPHE: Key = ascii(b'\'');
    pub const LEFT_PARENTHESIS: Key = ascii(b'(');
    pub const RIGHT_PARENTHESIS: Key = ascii(b')');
    pub const ASTERISK: Key = ascii(b'*');
    pub const PLUS: Key = ascii(b'+');
    pub const COMMA: Key = ascii(b',');
    pub const MINUS: Key = ascii(b'-');
    pub const DOT: Key = ascii(b'.');
    pub const SLASH: Key = ascii(b'/');
    pub const COLON: Key = ascii(b':');
    pub const SEMICOLON: Key = ascii(b';');
    pub const LESS_THAN_SIGN: Key = ascii(b'<');
    pub const EQUALS_SIGN: Key = ascii(b'=');
    pub const GREATER_THAN_SIGN: Key = ascii(b'>');
    pub const QUESTION_MARK: Key = ascii(b'?');
    pub const AT_SIGN: Key = ascii(b'@');
    pub const LEFT_BRACKET: Key = ascii(b'[');
    pub const BACKSLASH: Key = ascii(b'\\');
    pub const RIGHT_BRACKET: Key = ascii(b']');
    pub const CARET: Key = ascii(b'^');
    pub const UNDERSCORE: Key = ascii(b'_');
    pub const BACKTICK: Key = ascii(b'`');
    pub const LEFT_CURLY_BRACKET: Key = ascii(b'{');
    pub const VERTICAL_BAR: Key = ascii(b'|');
    pub const RIGHT_CURLY_BRACKET: Key = ascii(b'}');
    pub const TILDE: Key = ascii(b'~');

    pub const DIGIT_0: Key = ascii(b'0');
    pub const DIGIT_1: Key = ascii(b'1');
    pub const DIGIT_2: Key = ascii(b'2');
    pub const DIGIT_3: Key = ascii(b'3');
    pub const DIGIT_4: Key = ascii(b'4');
    pub const DIGIT_5: Key = ascii(b'5');
    pub const DIGIT_6: Key = ascii(b'6');
    pub const DIGIT_7: Key = ascii(b'7');
    pub const DIGIT_8: Key = ascii(b'8');
    pub const DIGIT_9: Key = ascii(b'9');

    pub const A: Key = ascii(b'a');
    pub const B: Key = ascii(b'b');
    pub const C: Key = ascii(b'c');
    pub const D: Key = ascii(b'd');
    pub const E: Key = ascii(b'e');
    pub const F: Key = ascii(b'f');
    pub const G: Key = ascii(b'g');
    pub const H: Key = ascii(b'h');
    pub const I: Key = ascii(b'i');
    pub const J: Key = ascii(b'j');
    pub const K: Key = ascii(b'k');
    pub const L: Key = ascii(b'l');
    pub const M: Key = ascii(b'm');
    pub const N: Key = ascii(b'n');
    pub const O: Key = ascii(b'o');
    pub const P: Key = ascii(b'p');
    pub const Q: Key = ascii(b'q');
    pub const R: Key = ascii(b'r');
    pub const S: Key = ascii(b's');
    pub const T: Key = ascii(b't');
    pub const U: Key = ascii(b'u');
    pub const V: Key = ascii(b'v');
    pub const W: Key = ascii(b'w');
    pub const X: Key = ascii(b'x');
    pub const Y: Key = ascii(b'y');
    pub const Z: Key = ascii(b'z');

    pub const LEFT: Key = Key(5000);
    pub const UP: Key = Key(5001);
    pub const RIGHT: Key = Key(5002);
    pub const DOWN: Key = Key(5003);

    pub const F1: Key = Key(5004);
    pub const F2: Key = Key(5005);
    pub const F3: Key = Key(5006);
    pub const F4: Key = Key(5007);
    pub const F5: Key = Key(5008);
    pub const F6: Key = Key(5009);
    pub const F7: Key = Key(5010);
    pub const F8: Key = Key(5011);
    pub const F9: Key = Key(5012);
    pub const F10: Key = Key(5013);
    pub const F11: Key = Key(5014);
    pub const F12: Key = Key(5015);

    pub const ESC: Key = Key(5016);
    pub const DELETE: Key = Key(5017);
    pub const ENTER: Key = Key(5018);
    pub const TAB: Key = Key(5019);
}

impl Key {
    pub const fn from_ascii(byte: u8) -> Option<Key> {
        if byte.is_ascii() {
            Some(ascii(byte))
        } else {
            None
        }
    }

    /// Maps `n` in `1..=12` to `F1..=F12`.
    pub const fn function(n: u8) -> Option<Key> {
        if n >= 1 && n <= 12 {
            Some(Key(Key::F1.0 + n as u16 - 1))
        } else {
            None
        }
    }

    pub const fn code(&self) -> u16 {
        self.0
    }

    pub fn is_arrow_key(&self) -> bool {
        (Key::LEFT..=Key::DOWN).contains(self)
    }

    pub fn is_function_key(&self) -> bool {
        (Key::F1..=Key::F12).contains(self)
    }

    pub fn is_ascii(&self) -> bool {
        self.0 <= 0x7f
    }

    pub fn to_ascii(&self) -> Option<u8> {
        self.is_ascii().then_some(self.0 as u8)
    }

    /// ASCII digit check.
    pub fn is_numeric(&self) -> bool {
        self.to_ascii().is_some_and(|b| b.is_ascii_digit())
    }

    pub fn is_alphanumeric(&self) -> bool {
        self.to_ascii().is_some_and(|b| b.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
#[path = "../tests/unit/key.rs"]
mod tests;
