use std::process;

use umwero_core::numeral::NumeralCodec;

use super::{escape_pua, unescape_pua};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn codec(max_place: Option<u32>) -> NumeralCodec {
    max_place.map_or_else(NumeralCodec::from_settings, NumeralCodec::new)
}

pub fn encode(n: u64, max_place: Option<u32>, escape: bool) {
    let glyphs = die!(codec(max_place).encode_str(n), "Error: {}");
    if escape {
        println!("{}", escape_pua(&glyphs));
    } else {
        println!("{glyphs}");
    }
}

/// `glyphs` may spell place markers as `<U+XXXX>`.
pub fn decode(glyphs: &str, max_place: Option<u32>) {
    let n = die!(codec(max_place).decode_str(&unescape_pua(glyphs)), "Error: {}");
    println!("{n}");
}
