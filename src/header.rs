//! Reads and writes icon sets in C header form, the format firmware assets
//! are usually authored in:
//!
//! ```text
//! // Heart icon 16x16
//! const unsigned char heart_icon [] PROGMEM = {
//!     0x00, 0x00, 0x0C, 0x30, ...
//! };
//! ```
//!
//! Dimensions come from the closest `WxH` comment above each array.

use crate::{Bitmap, IconError, IconTable};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const\s+unsigned\s+char\s+(\w+)\s*\[\s*\]\s*(?:PROGMEM\s*)?=\s*\{(.*?)\}\s*;")
        .expect("array pattern")
});

static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*?\b(\d+)\s*[xX]\s*(\d+)\b").expect("dimensions pattern"));

const BYTES_PER_LINE: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderIcon {
    pub symbol: String,
    pub bitmap: Bitmap,
}

fn line_of(src: &str, offset: usize) -> usize {
    src[..offset].matches('\n').count() + 1
}

fn parse_byte(token: &str) -> Option<u8> {
    match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.len() <= 2 => u8::from_str_radix(hex, 16).ok(),
        Some(_) => None,
        None => token.parse::<u8>().ok(),
    }
}

/// Every icon array in `src`, in source order.
pub fn parse(src: &str) -> Result<Vec<HeaderIcon>, IconError> {
    let mut icons = Vec::new();
    let mut previous_end = 0;

    for caps in ARRAY.captures_iter(src) {
        let array = caps.get_match();
        let symbol = &caps[1];
        let line = line_of(src, array.start());
        let malformed = |reason: String| IconError::MalformedHeader { line, reason };

        let dims = DIMENSIONS
            .captures_iter(&src[previous_end..array.start()])
            .last()
            .ok_or_else(|| malformed(format!("no WxH comment before `{}`", symbol)))?;
        let width = dims[1]
            .parse::<usize>()
            .map_err(|_| malformed(format!("bad width `{}`", &dims[1])))?;
        let height = dims[2]
            .parse::<usize>()
            .map_err(|_| malformed(format!("bad height `{}`", &dims[2])))?;

        let data = caps[2]
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| parse_byte(token).ok_or_else(|| malformed(format!("bad byte literal `{}`", token))))
            .collect::<Result<Vec<u8>, _>>()?;

        icons.push(HeaderIcon {
            symbol: symbol.to_string(),
            bitmap: Bitmap::new(width, height, data)?,
        });
        previous_end = array.end();
    }

    Ok(icons)
}

/// Renders a table back into header form.
pub struct Header<'a>(pub &'a IconTable);

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#ifndef ICONS_H")?;
        writeln!(f, "#define ICONS_H")?;
        for (id, bitmap) in self.0.iter() {
            writeln!(f)?;
            writeln!(f, "// {} icon {}x{}", id, bitmap.width(), bitmap.height())?;
            writeln!(f, "const unsigned char {} [] PROGMEM = {{", id.symbol())?;
            let lines: Vec<String> = bitmap
                .data()
                .chunks(BYTES_PER_LINE)
                .map(|chunk| {
                    chunk
                        .iter()
                        .map(|b| format!("0x{:02X}", b))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect();
            writeln!(f, "    {}", lines.join(",\n    "))?;
            writeln!(f, "}};")?;
        }
        writeln!(f)?;
        writeln!(f, "#endif")
    }
}

pub fn write(table: &IconTable) -> String {
    Header(table).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconId;

    const HEART: &str = "
// Heart icon 16x16
const unsigned char heart_icon [] PROGMEM = {
    0x00, 0x00, 0x0C, 0x30, 0x12, 0x48, 0x21, 0x84, 0x41, 0x82, 0x41, 0x82,
    0x41, 0x82, 0x21, 0x84, 0x10, 0x08, 0x08, 0x10, 0x04, 0x20, 0x02, 0x40,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
};
";

    const ORIGINAL: &str = r#"
#ifndef ICONS_H
#define ICONS_H

// Play icon 16x16
const unsigned char play_icon [] PROGMEM = {
    0x00, 0x00, 0x00, 0x80, 0x01, 0xC0, 0x03, 0xE0, 0x07, 0xF0, 0x0F, 0xF8,
    0x1F, 0xFC, 0x3F, 0xFE, 0x3F, 0xFE, 0x1F, 0xFC, 0x0F, 0xF8, 0x07, 0xF0,
    0x03, 0xE0, 0x01, 0xC0, 0x00, 0x80, 0x00, 0x00
};

// Pause icon 16x16
const unsigned char pause_icon [] PROGMEM = {
    0x00, 0x00, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC,
    0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC,
    0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x00, 0x00
};

// Heart icon 16x16
const unsigned char heart_icon [] PROGMEM = {
    0x00, 0x00, 0x0C, 0x30, 0x12, 0x48, 0x21, 0x84, 0x41, 0x82, 0x41, 0x82,
    0x41, 0x82, 0x21, 0x84, 0x10, 0x08, 0x08, 0x10, 0x04, 0x20, 0x02, 0x40,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
};

// Temperature icon 16x16
const unsigned char temp_icon [] PROGMEM = {
    0x00, 0xE0, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0xD0, 0x01, 0xD0, 0x01, 0xD0, 0x01, 0xD0, 0x01, 0x50,
    0x01, 0x20, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00
};

// SpO2 icon 16x16
const unsigned char spo2_icon [] PROGMEM = {
    0x00, 0x00, 0x07, 0xE0, 0x08, 0x10, 0x13, 0xC8, 0x14, 0x28, 0x14, 0x28,
    0x13, 0xC8, 0x10, 0x08, 0x10, 0x08, 0x13, 0xC8, 0x14, 0x28, 0x14, 0x28,
    0x13, 0xC8, 0x08, 0x10, 0x07, 0xE0, 0x00, 0x00
};

// ECG wave icon 16x16
const unsigned char ecg_icon [] PROGMEM = {
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40,
    0x00, 0x40, 0x01, 0x40, 0x01, 0x40, 0x06, 0x40, 0x18, 0x40, 0x00, 0x40,
    0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
};

// Error icon 16x16
const unsigned char error_icon [] PROGMEM = {
    0x00, 0x00, 0x07, 0xE0, 0x0F, 0xF0, 0x1F, 0xF8, 0x1C, 0x38, 0x19, 0x98,
    0x13, 0xC8, 0x17, 0xE8, 0x17, 0xE8, 0x13, 0xC8, 0x19, 0x98, 0x1C, 0x38,
    0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xE0, 0x00, 0x00
};

#endif
"#;

    #[test]
    fn parses_progmem_array() {
        let icons = parse(HEART).unwrap();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].symbol, "heart_icon");
        assert_eq!(icons[0].bitmap, *IconTable::global().get(IconId::Heart));
    }

    #[test]
    fn accepts_plain_arrays_and_decimal_bytes() {
        let src = "/* tiny */\n// dot 3X2\nconst unsigned char dot[] = { 64, 0x00 };\n";
        let icons = parse(src).unwrap();
        assert_eq!(icons[0].bitmap.to_string(), ".#.\n...");
    }

    #[test]
    fn dimensions_come_from_nearest_comment() {
        let src = "// a 8x1\n// b 8x2\nconst unsigned char b [] = { 0xFF, 0x01 };\n";
        let icons = parse(src).unwrap();
        assert_eq!((icons[0].bitmap.width(), icons[0].bitmap.height()), (8, 2));
    }

    #[test]
    fn dimensions_are_not_shared_between_arrays() {
        let src = "// a 8x1\nconst unsigned char a [] = { 0xFF };\nconst unsigned char b [] = { 0x01 };\n";
        assert_eq!(
            parse(src),
            Err(IconError::MalformedHeader { line: 3, reason: "no WxH comment before `b`".to_string() })
        );
    }

    #[test]
    fn rejects_bad_literals() {
        let src = "\n// a 8x1\nconst unsigned char a [] = { 0x1FF };\n";
        assert_eq!(
            parse(src),
            Err(IconError::MalformedHeader { line: 3, reason: "bad byte literal `0x1FF`".to_string() })
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let src = "// a 16x2\nconst unsigned char a [] = { 0x00, 0x00, 0x00 };\n";
        assert_eq!(
            parse(src),
            Err(IconError::InvalidBitmapDefinition { width: 16, height: 2, expected: 4, actual: 3 })
        );
    }

    #[test]
    fn table_survives_header_form() {
        let table = IconTable::global();
        let text = write(table);
        assert!(text.starts_with("#ifndef ICONS_H\n#define ICONS_H\n"));
        assert!(text.contains("// temperature icon 16x16\nconst unsigned char temp_icon [] PROGMEM = {\n"));
        assert_eq!(IconTable::from_header(&text).unwrap(), *table);
    }

    #[test]
    fn header_table_needs_every_icon() {
        assert_eq!(IconTable::from_header(HEART), Err(IconError::MissingIcon(IconId::Play)));
    }

    #[test]
    fn header_table_rejects_unknown_symbols() {
        let text = format!("{}\n// Battery icon 8x1\nconst unsigned char battery_icon [] = {{ 0x00 }};\n", HEART);
        assert_eq!(
            IconTable::from_header(&text),
            Err(IconError::UnknownIcon("battery_icon".to_string()))
        );
    }

    #[test]
    fn reads_the_firmware_header() {
        let icons = parse(ORIGINAL).unwrap();
        let symbols: Vec<&str> = icons.iter().map(|icon| icon.symbol.as_str()).collect();
        assert_eq!(symbols, IconId::ALL.map(IconId::symbol).to_vec());
        assert_eq!(IconTable::from_header(ORIGINAL).unwrap(), *IconTable::global());
    }

    #[test]
    fn huge_dimensions_are_an_error() {
        let src = format!("// a {}x16\nconst unsigned char a [] = {{ 0x00 }};\n", usize::MAX);
        assert_eq!(
            parse(&src),
            Err(IconError::InvalidBitmapDefinition {
                width: usize::MAX,
                height: 16,
                expected: usize::MAX,
                actual: 1,
            })
        );

        let src = "// a 99999999999999999999999x16\nconst unsigned char a [] = { 0x00 };\n";
        assert_eq!(
            parse(src),
            Err(IconError::MalformedHeader {
                line: 2,
                reason: "bad width `99999999999999999999999`".to_string(),
            })
        );
    }
}
