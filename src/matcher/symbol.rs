//! 符号文本转换
//! 宿主系统中的符号（类名等）可能以不同形式存放，匹配前统一转换为字符串

use std::borrow::Cow;

/// 可转换为匹配用文本的符号
pub trait SymbolText {
    fn symbol_text(&self) -> Cow<'_, str>;
}

impl SymbolText for str {
    fn symbol_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SymbolText for String {
    fn symbol_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl SymbolText for Cow<'_, str> {
    fn symbol_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

/// 原始字节形式的符号（如常量池中的类名），非法UTF-8按替换字符处理
impl SymbolText for [u8] {
    fn symbol_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl SymbolText for Vec<u8> {
    fn symbol_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_forms_do_not_allocate() {
        let owned = String::from("java/lang/Object");
        assert!(matches!(owned.symbol_text(), Cow::Borrowed("java/lang/Object")));
        assert!(matches!("Foo".symbol_text(), Cow::Borrowed("Foo")));
    }

    #[test]
    fn test_bytes_are_lossy() {
        let raw: &[u8] = b"com/foo/\xffBar";
        assert_eq!(raw.symbol_text(), "com/foo/\u{fffd}Bar");
        assert_eq!(b"Baz".to_vec().symbol_text(), "Baz");
    }
}
