/*
 * charset.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Framekit, an HTTP framing and stream buffering library.
 *
 * Framekit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Framekit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Framekit.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Charset registry: IANA name (or alias) to `Charset`.

use std::fmt;

use crate::error::CharsetError;

/// Character sets recognised in `charset=` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    Utf16Be,
    Utf16Le,
    UsAscii,
    Iso8859_1,
    Iso8859_15,
    Windows1252,
    ShiftJis,
    EucJp,
    Gb2312,
}

impl Charset {
    /// Look up a charset by name. Surrounding whitespace and double quotes are ignored.
    pub fn for_name(name: &str) -> Result<Charset, CharsetError> {
        let trimmed = name.trim().trim_matches('"').trim();
        let lower = trimmed.to_ascii_lowercase();
        let charset = match lower.as_str() {
            "utf-8" | "utf8" => Charset::Utf8,
            "utf-16be" => Charset::Utf16Be,
            "utf-16le" => Charset::Utf16Le,
            "us-ascii" | "ascii" | "iso646-us" | "ansi_x3.4-1968" => Charset::UsAscii,
            "iso-8859-1" | "iso_8859-1" | "latin1" | "l1" => Charset::Iso8859_1,
            "iso-8859-15" | "iso_8859-15" | "latin-9" => Charset::Iso8859_15,
            "windows-1252" | "cp1252" => Charset::Windows1252,
            "shift_jis" | "sjis" | "ms_kanji" => Charset::ShiftJis,
            "euc-jp" => Charset::EucJp,
            "gb2312" | "euc-cn" => Charset::Gb2312,
            _ => return Err(CharsetError::Unknown(trimmed.to_string())),
        };
        Ok(charset)
    }

    /// Canonical IANA name.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Iso8859_15 => "ISO-8859-15",
            Charset::Windows1252 => "windows-1252",
            Charset::ShiftJis => "Shift_JIS",
            Charset::EucJp => "EUC-JP",
            Charset::Gb2312 => "GB2312",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases() {
        assert_eq!(Charset::for_name("UTF-8"), Ok(Charset::Utf8));
        assert_eq!(Charset::for_name("utf8"), Ok(Charset::Utf8));
        assert_eq!(Charset::for_name(" \"Latin1\" "), Ok(Charset::Iso8859_1));
        assert_eq!(Charset::for_name("CP1252"), Ok(Charset::Windows1252));
        assert_eq!(Charset::Windows1252.to_string(), "windows-1252");
    }

    #[test]
    fn unknown_and_empty_fail() {
        assert_eq!(
            Charset::for_name("x-klingon"),
            Err(CharsetError::Unknown("x-klingon".into()))
        );
        assert!(Charset::for_name("").is_err());
        assert!(Charset::for_name("\"\"").is_err());
    }
}
