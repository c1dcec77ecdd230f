sql_names! {
    /// Character sets accepted by `CHARACTER SET=`.
    pub enum Charset (UnknownCharset) {
        default: Utf8,
        Big5 => "big5",
        Dec8 => "dec8",
        Cp850 => "cp850",
        Hp8 => "hp8",
        Koi8r => "koi8r",
        Latin1 => "latin1",
        Latin2 => "latin2",
        Swe7 => "swe7",
        Ascii => "ascii",
        Ujis => "ujis",
        Sjis => "sjis",
        Hebrew => "hebrew",
        Tis620 => "tis620",
        Euckr => "euckr",
        Koi8u => "koi8u",
        Gb2312 => "gb2312",
        Greek => "greek",
        Cp1250 => "cp1250",
        Gbk => "gbk",
        Latin5 => "latin5",
        Armscii8 => "armscii8",
        Utf8 => "utf8",
        Ucs2 => "ucs2",
        Cp866 => "cp866",
        Keybcs2 => "keybcs2",
        Macce => "macce",
        Macroman => "macroman",
        Cp852 => "cp852",
        Latin7 => "latin7",
        Utf8mb4 => "utf8mb4",
        Cp1251 => "cp1251",
        Utf16 => "utf16",
        Cp1256 => "cp1256",
        Cp1257 => "cp1257",
        Utf32 => "utf32",
        Binary => "binary",
        Geostd8 => "geostd8",
        Cp932 => "cp932",
        Eucjpms => "eucjpms",
    }
}
